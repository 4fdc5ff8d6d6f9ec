//! Core building blocks for the validation-and-mutation pipeline

pub mod error;
pub mod id;
pub mod payload;
pub mod store;
pub mod validate;

pub use error::{ApiError, ApiResult};
pub use payload::Envelope;
pub use store::{Keyed, Repository};
pub use validate::Chain;
