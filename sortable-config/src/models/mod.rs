use serde::{Deserialize, Serialize};
use sortable_core::SortStyles;
use std::path::PathBuf;

pub mod sources;

/// Effective configuration after every source has been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub styles: SortStyles,
    pub server: ServerConfig,
    pub metadata: ConfigMetadata,
}

/// Bind address for hosts that serve the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
