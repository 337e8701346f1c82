//! Unit tests for domain error types

use ripple_domain::Error;
use std::error::Error as _;

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::not_found("embedding for chunk x").to_string(),
        "Not found: embedding for chunk x"
    );
    assert_eq!(
        Error::invalid_argument("duplicate chunk id").to_string(),
        "Invalid argument: duplicate chunk id"
    );
    assert_eq!(
        Error::timeout("similarity lookup", 250).to_string(),
        "Operation timed out after 250ms: similarity lookup"
    );
    assert_eq!(
        Error::embedding("No embedding returned").to_string(),
        "Embedding provider error: No embedding returned"
    );
}

#[test]
fn test_config_builds_configuration_variant() {
    let error = Error::config("Similarity timeout cannot be 0");

    assert!(matches!(
        error,
        Error::Configuration { source: None, .. }
    ));
    assert_eq!(
        error.to_string(),
        "Configuration error: Similarity timeout cannot be 0"
    );
    assert!(error.source().is_none());
}
