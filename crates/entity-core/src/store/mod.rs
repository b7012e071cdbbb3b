//! Table-store port
//!
//! The backing store is an external collaborator; handlers only see this
//! trait. [`MemoryTableStore`] is the in-process implementation used by the
//! server binary and the scenario tests.

pub mod memory;

pub use memory::MemoryTableStore;

use crate::{ETag, Entity, Result};
use async_trait::async_trait;

/// A table-style store keyed by (partition key, row key).
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Persist a new row. Returns the stored entity with the
    /// store-assigned timestamp and concurrency token.
    async fn insert(&self, entity: &Entity) -> Result<Entity>;

    /// Point lookup. `NotFound` if no such row.
    async fn get(&self, partition_key: &str, row_key: &str) -> Result<Entity>;

    /// Scan a partition and return the first page of rows, in row-key
    /// order. Rows beyond the first page are not returned.
    async fn query_page(&self, partition_key: &str) -> Result<Vec<Entity>>;

    /// Replace the stored row wholesale, conditioned on `etag` matching
    /// the row's current token. `Conflict` if another writer got there
    /// first; `NotFound` if the row no longer exists.
    async fn replace(&self, entity: &Entity, etag: &ETag) -> Result<Entity>;

    /// Unconditional delete of one row, ignoring concurrency tokens.
    /// `NotFound` if no such row.
    async fn delete(&self, partition_key: &str, row_key: &str) -> Result<()>;

    /// Remove every row in a partition. `NotFound` if the partition holds
    /// no rows.
    async fn delete_partition(&self, partition_key: &str) -> Result<()>;
}
