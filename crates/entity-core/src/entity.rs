//! Entity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque concurrency token assigned by the store on every write.
///
/// Compared only for equality; never serialized to API clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ETag(String);

impl ETag {
    pub fn fresh() -> Self {
        ETag(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named record in the table store.
///
/// The wire shape uses PascalCase field names; camelCase aliases are
/// accepted on input so clients decode responses regardless of casing.
/// `id == row_key` always, and `partition_key` is the same configured
/// value for every entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "Id", alias = "id")]
    pub id: String,

    #[serde(rename = "Name", alias = "name")]
    pub name: Option<String>,

    #[serde(rename = "PartitionKey", alias = "partitionKey")]
    pub partition_key: String,

    #[serde(rename = "RowKey", alias = "rowKey")]
    pub row_key: String,

    #[serde(rename = "Timestamp", alias = "timestamp")]
    pub timestamp: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub etag: Option<ETag>,
}

impl Entity {
    /// Build a new entity with a fresh id. The timestamp set here is
    /// provisional; the store overwrites it on persist.
    pub fn new(partition_key: impl Into<String>, name: Option<String>) -> Self {
        let id = Uuid::new_v4().to_string();
        Entity {
            row_key: id.clone(),
            id,
            name,
            partition_key: partition_key.into(),
            timestamp: Some(Utc::now()),
            etag: None,
        }
    }
}
