use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub styles: FileStylesConfig,
    #[serde(default)]
    pub server: FileServerConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStylesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asc_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub none_class: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub sort_asc_class: Option<String>,
    pub sort_desc_class: Option<String>,
    pub sort_none_class: Option<String>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: std::env::var("SORTABLE_CONFIG")
                .ok()
                .map(PathBuf::from),
            sort_asc_class: std::env::var("SORT_ASC_CLASS").ok(),
            sort_desc_class: std::env::var("SORT_DESC_CLASS").ok(),
            sort_none_class: std::env::var("SORT_NONE_CLASS").ok(),
            server_host: std::env::var("SERVER_HOST").ok(),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }
}
