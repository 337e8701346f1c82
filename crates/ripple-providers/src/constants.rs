//! Provider-specific constants

/// Dimensionality of vectors produced by the null embedding provider
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Model name reported by the null embedding provider
pub const NULL_EMBEDDING_MODEL: &str = "null-hash";
