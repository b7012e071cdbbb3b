//! HTTP client for the Entity Service
//!
//! One method per server operation. Non-success statuses surface as
//! [`ClientError::Status`] so callers can distinguish a 404 from a
//! transport failure.

use entity_core::Entity;
use reqwest::{Client as ReqwestClient, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status(status) => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Client for the entity CRUD endpoints.
pub struct EntityClient {
    http: ReqwestClient,
    base_url: String,
}

impl EntityClient {
    /// `base_url` is the entity route root, e.g. `http://host:port/entity`.
    pub fn new(base_url: impl Into<String>) -> Self {
        EntityClient {
            http: ReqwestClient::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response)
    }

    /// POST the name as a JSON string; returns the created entity.
    pub async fn create(&self, name: &str) -> Result<Entity> {
        let response = self.http.post(&self.base_url).json(&name).send().await?;
        let entity = Self::check(response)?.json().await?;
        Ok(entity)
    }

    /// GET one entity by id.
    pub async fn get_by_id(&self, id: &str) -> Result<Entity> {
        let response = self.http.get(self.item_url(id)).send().await?;
        let entity = Self::check(response)?.json().await?;
        Ok(entity)
    }

    /// GET the collection (first page only).
    pub async fn list_all(&self) -> Result<Vec<Entity>> {
        let response = self.http.get(&self.base_url).send().await?;
        let entities = Self::check(response)?.json().await?;
        Ok(entities)
    }

    /// PUT a new name for an existing entity; returns the updated entity.
    pub async fn update(&self, id: &str, new_name: &str) -> Result<Entity> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(&new_name)
            .send()
            .await?;
        let entity = Self::check(response)?.json().await?;
        Ok(entity)
    }

    /// DELETE one entity by id.
    pub async fn delete_one(&self, id: &str) -> Result<()> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        Self::check(response)?;
        Ok(())
    }

    /// DELETE the whole collection.
    pub async fn delete_all(&self) -> Result<()> {
        let response = self.http.delete(&self.base_url).send().await?;
        Self::check(response)?;
        Ok(())
    }
}
