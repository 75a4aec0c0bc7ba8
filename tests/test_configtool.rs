use passgenk::configtool::*;
use passgenk::error::PassgenError;
use passgenk::passgen::GenerationConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_config_yields_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let config = load_config(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, ConfigFile::default());
    assert_eq!(config.defaults.length, 12);
    assert!(config.defaults.include_uppercase);
    assert!(config.defaults.include_digits);
    assert!(!config.defaults.include_symbols);
}

#[test]
fn test_save_and_load_config() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
    let config = ConfigFile {
        defaults: GenerationConfig {
            length: 20,
            include_symbols: true,
            exclude_similar: true,
            ..Default::default()
        },
        show_feedback: true,
    };
    config.save_config(&path).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, r#"{ "defaults": { "length": 16 } }"#).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config.defaults.length, 16);
    assert!(config.defaults.include_uppercase);
    assert!(!config.show_feedback);
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "not json").unwrap();
    assert!(matches!(load_config(&path), Err(PassgenError::Json(_))));
}
