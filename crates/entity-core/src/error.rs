//! Error types for the entity store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors reported by a [`crate::TableStore`] implementation.
///
/// `NotFound` is the only variant HTTP handlers translate (to 404);
/// everything else propagates as a server error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity not found")]
    NotFound,

    #[error("concurrency token mismatch")]
    Conflict,

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
