//! Record id generator

use uuid::Uuid;

/// Return a fresh opaque record id: a 32-char lowercase hex string
/// (UUID v4, simple format). Never reused.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
