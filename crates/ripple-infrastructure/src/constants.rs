//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ripple.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ripple";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "RIPPLE";

/// Separator between prefix and nested keys in environment overrides
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// ENGINE CONSTANTS
// ============================================================================

/// Default bound on a single similarity lookup (milliseconds)
pub const DEFAULT_SIMILARITY_TIMEOUT_MS: u64 = 2_000;

/// Default number of similarity lookups in flight at once
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

// ============================================================================
// PROVIDER CONSTANTS
// ============================================================================

/// Default similarity provider
pub const DEFAULT_SIMILARITY_PROVIDER: &str = "memory";

/// Default embedding provider
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "null";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "RIPPLE_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;
