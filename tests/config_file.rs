//! Configuration file loading

use std::io::Write;
use std::path::PathBuf;

use bookshelf::shared::{AppConfigBuilder, ConfigError};

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 4100").unwrap();
    writeln!(file, "static_dir = \"dist\"").unwrap();
    writeln!(file, "server_url = \"http://books.local:4100\"").unwrap();

    let config = AppConfigBuilder::from_toml_file(file.path())
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.port, 4100);
    assert_eq!(config.static_dir, PathBuf::from("dist"));
    assert_eq!(config.server_url(), "http://books.local:4100");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppConfigBuilder::from_toml_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();

    let result = AppConfigBuilder::from_toml_file(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
