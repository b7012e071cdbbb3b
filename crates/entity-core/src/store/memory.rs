//! In-memory table store using DashMap

use crate::{ETag, Entity, Result, StoreError, TableStore};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

/// Rows returned by a single `query_page` call.
const PAGE_SIZE: usize = 1000;

/// DashMap-backed table keyed by (partition key, row key).
///
/// Every write assigns a fresh concurrency token and refreshes the
/// timestamp, mirroring what a hosted table service does on persist.
#[derive(Clone)]
pub struct MemoryTableStore {
    rows: Arc<DashMap<(String, String), Entity>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        MemoryTableStore {
            rows: Arc::new(DashMap::new()),
        }
    }

    fn key(partition_key: &str, row_key: &str) -> (String, String) {
        (partition_key.to_string(), row_key.to_string())
    }

    fn stamp(entity: &Entity) -> Entity {
        let mut stored = entity.clone();
        stored.timestamp = Some(Utc::now());
        stored.etag = Some(ETag::fresh());
        stored
    }
}

impl Default for MemoryTableStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableStore for MemoryTableStore {
    async fn insert(&self, entity: &Entity) -> Result<Entity> {
        let stored = Self::stamp(entity);
        self.rows.insert(
            Self::key(&stored.partition_key, &stored.row_key),
            stored.clone(),
        );
        Ok(stored)
    }

    async fn get(&self, partition_key: &str, row_key: &str) -> Result<Entity> {
        self.rows
            .get(&Self::key(partition_key, row_key))
            .map(|row| row.clone())
            .ok_or(StoreError::NotFound)
    }

    async fn query_page(&self, partition_key: &str) -> Result<Vec<Entity>> {
        let mut page: Vec<Entity> = self
            .rows
            .iter()
            .filter(|row| row.key().0 == partition_key)
            .map(|row| row.value().clone())
            .collect();
        page.sort_by(|a, b| a.row_key.cmp(&b.row_key));
        page.truncate(PAGE_SIZE);
        Ok(page)
    }

    async fn replace(&self, entity: &Entity, etag: &ETag) -> Result<Entity> {
        let key = Self::key(&entity.partition_key, &entity.row_key);
        let mut row = self.rows.get_mut(&key).ok_or(StoreError::NotFound)?;
        if row.etag.as_ref() != Some(etag) {
            return Err(StoreError::Conflict);
        }
        let stored = Self::stamp(entity);
        *row = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, partition_key: &str, row_key: &str) -> Result<()> {
        self.rows
            .remove(&Self::key(partition_key, row_key))
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn delete_partition(&self, partition_key: &str) -> Result<()> {
        let keys: Vec<(String, String)> = self
            .rows
            .iter()
            .filter(|row| row.key().0 == partition_key)
            .map(|row| row.key().clone())
            .collect();

        if keys.is_empty() {
            return Err(StoreError::NotFound);
        }
        for key in keys {
            self.rows.remove(&key);
        }
        Ok(())
    }
}
