//! Configuration for sortable column styles.
//!
//! Values are read once at process start and layered as environment
//! variables over `sortable.toml` over built-in defaults. The resulting
//! [`Config`] is passed explicitly to whatever renders the tags; nothing in
//! this crate keeps global state.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{Config, ConfigMetadata, ServerConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
