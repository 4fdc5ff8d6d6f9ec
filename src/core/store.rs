//! Repository abstraction over the backing collections
//!
//! The reference data store is an ordered, process-wide mutable sequence of
//! records. Handlers receive it as an injected trait object, so the pipeline
//! is testable against any conforming implementation without global state.

use anyhow::Result;
use async_trait::async_trait;

/// A record addressable by its opaque id
pub trait Keyed {
    fn id(&self) -> &str;
}

/// Ordered, shared, mutable collection of records
///
/// Mutators own every mutation; validators and guards only read. Collection
/// order is insertion order and survives updates: `replace` overwrites the
/// record at its existing position.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    /// Snapshot of the full collection in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Find a record by exact id match
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// Append a new record to the end of the collection
    async fn append(&self, record: T) -> Result<()>;

    /// Overwrite the record carrying the same id, in place.
    ///
    /// Returns false when no record carries that id.
    async fn replace(&self, record: T) -> Result<bool>;

    /// Remove a record by id, preserving the order of the rest
    async fn remove(&self, id: &str) -> Result<Option<T>>;
}
