use crate::config::{ConfigBuilder, ConfigLoader, LogFormat, LogLevel, MentoraConfig, StorageBackend};
use std::io::Write;
use std::str::FromStr;

#[test]
fn test_default_config() {
    let config = MentoraConfig::default();
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.logging.format, LogFormat::Default);
    assert!(config.logging.stdout);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_memory_storage()
        .with_log_level(LogLevel::Debug)
        .with_log_format(LogFormat::Json)
        .with_log_file("/tmp/mentora-test.log")
        .with_stdout_logging(false)
        .build()
        .unwrap();

    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/mentora-test.log"))
    );
    assert!(!config.logging.stdout);
}

#[test]
fn test_loader_reads_toml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        "[logging]\nlevel = \"warn\"\nformat = \"compact\"\nstdout = false"
    )
    .unwrap();

    let mut loader = ConfigLoader::new();
    loader.load_file(file.path()).unwrap();
    let config = loader.extract().unwrap();

    assert_eq!(config.logging.level, LogLevel::Warn);
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert!(!config.logging.stdout);
    // Untouched sections keep their defaults
    assert_eq!(config.storage.backend, StorageBackend::Memory);
}

#[test]
fn test_loader_rejects_unknown_extension() {
    let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
    let mut loader = ConfigLoader::new();
    assert!(loader.load_file(file.path()).is_err());
}

#[test]
fn test_loader_rejects_missing_file() {
    let mut loader = ConfigLoader::new();
    assert!(loader.load_file("/nonexistent/mentora.toml").is_err());
}

#[test]
fn test_log_level_from_str() {
    assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
    assert!(LogLevel::from_str("verbose").is_err());
}
