//! Tests for the error context extension trait

use ripple_domain::error::Error;
use ripple_infrastructure::error_ext::ErrorContext;
use std::error::Error as _;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let err = io_failure().context("Loading chunks").expect_err("should fail");

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert!(err.to_string().contains("Loading chunks: no such file"));
    assert!(err.source().is_some());
}

#[test]
fn test_with_context_is_lazy_on_success() {
    let ok: Result<u8, io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .expect("should pass through");

    assert_eq!(value, 7);
}

#[test]
fn test_io_context() {
    let err = io_failure().io_context("Reading old text").expect_err("should fail");

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Reading old text"));
}

#[test]
fn test_config_context() {
    let err = io_failure().config_context("Parsing config").expect_err("should fail");

    assert!(matches!(err, Error::Configuration { .. }));
}
