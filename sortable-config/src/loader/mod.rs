use once_cell::sync::Lazy;
use sortable_core::SortStyles;
use std::{fs, path::PathBuf};

pub mod error;

use crate::{
    models::{
        Config, ConfigMetadata, ServerConfig,
        sources::{EnvConfig, FileConfig, FileStylesConfig},
    },
    validation::ConfigWarnings,
};
use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("sortable.toml"),
        PathBuf::from("config/sortable.toml"),
    ]
});

/// A loaded configuration plus anything worth telling the operator about.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathProvenance {
    Explicit,
    Env,
    Default,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Loads `.env` (when present), gathers the process environment and
    /// merges it over the configuration file.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_from_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Same as [`ConfigLoader::load`] but with an explicit environment
    /// snapshot instead of the process environment.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();
        let (file_config, config_path) = self.load_file_config(&env)?;

        if config_path.is_none() {
            warnings.push_with_hint(
                "No sortable.toml detected; using environment variables and defaults",
                "Create sortable.toml with a [styles] table to override the CSS classes",
            );
        }

        let FileConfig {
            styles: file_styles,
            server: file_server,
        } = file_config.unwrap_or_default();

        let styles = compose_styles(&env, file_styles, &mut warnings)?;
        let defaults = ServerConfig::default();
        let server = ServerConfig {
            host: env
                .server_host
                .clone()
                .or(file_server.host)
                .unwrap_or(defaults.host),
            port: env.server_port.or(file_server.port).unwrap_or(defaults.port),
        };

        tracing::debug!(
            asc = %styles.asc_class,
            desc = %styles.desc_class,
            none = %styles.none_class,
            "resolved sort styles"
        );

        Ok(ConfigLoad {
            config: Config {
                styles,
                server,
                metadata: ConfigMetadata {
                    config_path,
                    env_file_loaded: false,
                },
            },
            warnings,
        })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let resolved = if let Some(explicit) = &self.options.config_path {
            Some((explicit.clone(), PathProvenance::Explicit))
        } else if let Some(from_env) = &env.config_path {
            Some((from_env.clone(), PathProvenance::Env))
        } else {
            DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .map(|path| (path.clone(), PathProvenance::Default))
        };

        let Some((path, provenance)) = resolved else {
            return Ok((None, None));
        };

        if !path.exists() {
            if provenance != PathProvenance::Default {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_styles(
    env: &EnvConfig,
    file: FileStylesConfig,
    warnings: &mut ConfigWarnings,
) -> Result<SortStyles, ConfigLoadError> {
    let defaults = SortStyles::default();
    Ok(SortStyles {
        asc_class: pick_class(
            "asc_class",
            env.sort_asc_class.clone(),
            file.asc_class,
            defaults.asc_class,
            warnings,
        )?,
        desc_class: pick_class(
            "desc_class",
            env.sort_desc_class.clone(),
            file.desc_class,
            defaults.desc_class,
            warnings,
        )?,
        none_class: pick_class(
            "none_class",
            env.sort_none_class.clone(),
            file.none_class,
            defaults.none_class,
            warnings,
        )?,
    })
}

fn pick_class(
    key: &'static str,
    env: Option<String>,
    file: Option<String>,
    default: String,
    warnings: &mut ConfigWarnings,
) -> Result<String, ConfigLoadError> {
    let value = env.or(file).unwrap_or(default);
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigLoadError::EmptyClass { key });
    }
    if trimmed.split_whitespace().nth(1).is_some() {
        warnings.push(format!(
            "style '{key}' contains several classes: '{trimmed}'"
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_file_which_overrides_defaults() {
        let mut warnings = ConfigWarnings::default();
        let env = EnvConfig {
            sort_asc_class: Some("env-up".into()),
            ..EnvConfig::default()
        };
        let file = FileStylesConfig {
            asc_class: Some("file-up".into()),
            desc_class: Some("file-down".into()),
            none_class: None,
        };

        let styles = compose_styles(&env, file, &mut warnings).unwrap();

        assert_eq!(styles.asc_class, "env-up");
        assert_eq!(styles.desc_class, "file-down");
        assert_eq!(styles.none_class, "sort-none");
        assert!(warnings.is_empty());
    }

    #[test]
    fn blank_class_is_rejected() {
        let mut warnings = ConfigWarnings::default();
        let env = EnvConfig {
            sort_none_class: Some("   ".into()),
            ..EnvConfig::default()
        };

        let err =
            compose_styles(&env, FileStylesConfig::default(), &mut warnings)
                .unwrap_err();

        assert!(matches!(
            err,
            ConfigLoadError::EmptyClass { key: "none_class" }
        ));
    }

    #[test]
    fn multiple_classes_are_trimmed_and_flagged() {
        let mut warnings = ConfigWarnings::default();
        let env = EnvConfig {
            sort_desc_class: Some(" arrow down ".into()),
            ..EnvConfig::default()
        };

        let styles =
            compose_styles(&env, FileStylesConfig::default(), &mut warnings)
                .unwrap();

        assert_eq!(styles.desc_class, "arrow down");
        assert_eq!(warnings.iter().count(), 1);
    }
}
