//! Root application configuration

use super::{EngineConfig, LoggingConfig, ProvidersConfig};
use serde::{Deserialize, Serialize};

/// Root configuration; every section falls back to its defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Impact engine tuning
    pub engine: EngineConfig,
    /// Provider selection
    pub providers: ProvidersConfig,
}
