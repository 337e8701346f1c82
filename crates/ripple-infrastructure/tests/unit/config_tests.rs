//! Tests for configuration loading and validation

use ripple_domain::error::Error;
use ripple_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, EngineConfig};
use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn load(contents: &str) -> ripple_domain::error::Result<AppConfig> {
    let file = config_file(contents);
    ConfigLoader::new()
        .with_env_prefix("RIPPLE_TEST_UNSET")
        .with_config_path(file.path())
        .load()
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert_eq!(config.engine.similarity_timeout_ms, 2000);
    assert_eq!(config.engine.max_concurrent_lookups, 8);
    assert_eq!(config.providers.similarity.provider, "memory");
    assert_eq!(config.providers.embedding.provider, "null");
    assert_eq!(config.providers.embedding.dimensions, None);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = ConfigLoader::new()
        .with_env_prefix("RIPPLE_TEST_UNSET")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect("defaults are valid");

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_file_overrides_only_given_keys() {
    let config = load(
        r#"
[engine]
similarity_timeout_ms = 250

[providers.similarity]
provider = "null"
"#,
    )
    .expect("config should load");

    assert_eq!(config.engine.similarity_timeout_ms, 250);
    assert_eq!(config.engine.max_concurrent_lookups, 8);
    assert_eq!(config.providers.similarity.provider, "null");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_aligner_options_from_engine_config() {
    let engine = EngineConfig {
        similarity_timeout_ms: 1500,
        max_concurrent_lookups: 3,
    };

    let options = engine.aligner_options();

    assert_eq!(options.similarity_timeout, Duration::from_millis(1500));
    assert_eq!(options.max_concurrent_lookups, 3);
}

#[test]
fn test_zero_timeout_rejected() {
    let err = load("[engine]\nsimilarity_timeout_ms = 0\n").expect_err("must be rejected");

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_zero_concurrency_rejected() {
    let err = load("[engine]\nmax_concurrent_lookups = 0\n").expect_err("must be rejected");

    assert!(err.to_string().contains("concurrent"));
}

#[test]
fn test_empty_provider_rejected() {
    let err = load("[providers.similarity]\nprovider = \"  \"\n").expect_err("must be rejected");

    assert!(err.to_string().contains("Similarity provider"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let err = load("[logging]\nlevel = \"loud\"\n").expect_err("must be rejected");

    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_malformed_toml_is_a_configuration_error() {
    let err = load("[engine\nsimilarity_timeout_ms = ").expect_err("must be rejected");

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ripple.toml");
    let config = ConfigBuilder::new()
        .with_similarity_provider("null")
        .with_embedding_provider("null")
        .with_engine(EngineConfig {
            similarity_timeout_ms: 900,
            max_concurrent_lookups: 2,
        })
        .build();
    let loader = ConfigLoader::new()
        .with_env_prefix("RIPPLE_TEST_UNSET")
        .with_config_path(&path);

    loader.save_to_file(&config, &path).expect("save should succeed");
    let reloaded = loader.reload().expect("reload should succeed");

    assert_eq!(reloaded, config);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_saved_embedding_section_holds_only_provider_and_dimensions() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("ripple.toml");
    let mut config = AppConfig::default();
    config.providers.embedding.dimensions = Some(16);

    ConfigLoader::new()
        .save_to_file(&config, &path)
        .expect("save should succeed");
    let saved = std::fs::read_to_string(&path).expect("read saved config");

    assert!(saved.contains("[providers.embedding]"), "saved: {saved}");
    assert!(saved.contains("dimensions = 16"), "saved: {saved}");
    assert!(!saved.contains("model"), "saved: {saved}");
}
