use std::fs;

use sortable_config::{ConfigLoadError, ConfigLoader, EnvConfig};
use tempfile::tempdir;

#[test]
fn file_styles_and_server_are_applied() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sortable.toml");
    fs::write(
        &path,
        r#"
[styles]
asc_class = "arrow-up"
desc_class = "arrow-down"

[server]
port = 8088
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_from_env(EnvConfig::default())
        .expect("load");

    let config = load.config;
    assert_eq!(config.styles.asc_class, "arrow-up");
    assert_eq!(config.styles.desc_class, "arrow-down");
    assert_eq!(config.styles.none_class, "sort-none");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn environment_wins_over_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sortable.toml");
    fs::write(&path, "[styles]\nnone_class = \"idle\"\n").expect("write");

    let env = EnvConfig {
        config_path: Some(path),
        sort_none_class: Some("dormant".into()),
        server_port: Some(9000),
        ..EnvConfig::default()
    };

    let config = ConfigLoader::new().load_from_env(env).expect("load").config;

    assert_eq!(config.styles.none_class, "dormant");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load_from_env(EnvConfig::default())
        .unwrap_err();

    assert!(
        matches!(err, ConfigLoadError::MissingConfig { ref path } if path == &missing)
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sortable.toml");
    fs::write(&path, "[styles\nasc_class = 1").expect("write");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_from_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn defaults_without_any_source() {
    let load = ConfigLoader::new()
        .load_from_env(EnvConfig::default())
        .expect("load");

    assert_eq!(load.config.styles, sortable_core::SortStyles::default());
    assert!(load.config.metadata.config_path.is_none());
    assert!(!load.warnings.is_empty());
}

// The only test that touches the process environment; the others inject an
// `EnvConfig` snapshot so they can run in parallel with it.
#[test]
fn env_file_feeds_the_process_environment() {
    let dir = tempdir().expect("tempdir");

    let absent = ConfigLoader::new()
        .with_env_file(dir.path().join("absent.env"))
        .load()
        .expect("load without env file");
    assert!(!absent.config.metadata.env_file_loaded);

    let config_path = dir.path().join("styles.toml");
    fs::write(&config_path, "[styles]\nnone_class = \"idle\"\n")
        .expect("write config");
    let env_path = dir.path().join(".env");
    fs::write(
        &env_path,
        format!(
            "SORT_DESC_CLASS=arrow-down\nSORTABLE_CONFIG=\"{}\"\nSERVER_PORT=8123\n",
            config_path.display()
        ),
    )
    .expect("write env file");

    let load = ConfigLoader::new()
        .with_env_file(&env_path)
        .load()
        .expect("load with env file");

    for key in ["SORT_DESC_CLASS", "SORTABLE_CONFIG", "SERVER_PORT"] {
        unsafe { std::env::remove_var(key) };
    }

    let config = load.config;
    assert!(config.metadata.env_file_loaded);
    assert_eq!(config.metadata.config_path.as_deref(), Some(config_path.as_path()));
    assert_eq!(config.styles.desc_class, "arrow-down");
    assert_eq!(config.styles.none_class, "idle");
    assert_eq!(config.styles.asc_class, "sort-asc");
    assert_eq!(config.server.port, 8123);
}
