//! Entity Service Core Library
//!
//! Domain types, the table-store port, and the in-memory backend for the
//! entity service.

pub mod entity;
pub mod error;
pub mod store;

pub use entity::{ETag, Entity};
pub use error::{Result, StoreError};
pub use store::{MemoryTableStore, TableStore};
