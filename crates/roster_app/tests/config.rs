use std::fs;

use clap::Parser;
use pretty_assertions::assert_eq;
use roster_app::{load_config, save_config, AppConfig, Args, ConfigError, FilterSetting};
use roster_core::FilterMode;
use tempfile::TempDir;

#[test]
fn missing_optional_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = load_config(&temp.path().join("roster.ron"), false).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn missing_required_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = load_config(&temp.path().join("roster.ron"), true).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roster.ron");
    fs::write(
        &path,
        r#"(base_url: "https://backend.example.com/api", owner_id: 12, filter: Subscribed)"#,
    )
    .unwrap();

    let config = load_config(&path, true).unwrap();

    assert_eq!(config.base_url, "https://backend.example.com/api");
    assert_eq!(config.owner_id, 12);
    assert_eq!(config.filter, FilterSetting::Subscribed);
    assert_eq!(config.items_path, AppConfig::default().items_path);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roster.ron");
    fs::write(&path, "(owner_id: \"twelve\")").unwrap();

    let err = load_config(&path, true).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn saved_config_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("roster.ron");
    let config = AppConfig {
        owner_id: 3,
        bearer_token: Some("token".to_string()),
        filter: FilterSetting::Unsubscribed,
        ..AppConfig::default()
    };

    save_config(&path, &config).unwrap();

    assert_eq!(load_config(&path, true).unwrap(), config);
}

#[test]
fn command_line_overrides_file_values() {
    let mut config = AppConfig {
        owner_id: 3,
        ..AppConfig::default()
    };
    let args = Args::parse_from([
        "roster",
        "--owner",
        "8",
        "--filter",
        "subscribed",
        "--base-url",
        "http://127.0.0.1:9000",
        "--remove",
        "4",
        "--remove",
        "5",
    ]);

    config.apply_args(&args);

    assert_eq!(config.owner_id, 8);
    assert_eq!(FilterMode::from(config.filter), FilterMode::IncludeOnly);
    assert_eq!(config.source_settings().base_url, "http://127.0.0.1:9000");
    assert_eq!(args.remove, vec![4, 5]);
}
