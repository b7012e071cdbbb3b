//! Server configuration from environment variables

use tracing::info;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:7071";
pub const DEFAULT_PARTITION_KEY: &str = "EntityPartitionKey";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// Partition key shared by every entity; injected into the store
    /// calls at startup rather than baked in as a static.
    pub partition_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let partition_key = std::env::var("ENTITY_PARTITION_KEY")
            .unwrap_or_else(|_| DEFAULT_PARTITION_KEY.to_string());

        info!(
            "Config loaded: bind={}, partition={}",
            bind_address, partition_key
        );

        Config {
            bind_address,
            partition_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            partition_key: DEFAULT_PARTITION_KEY.to_string(),
        }
    }
}
