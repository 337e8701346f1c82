//! Impact engine configuration

use crate::constants::{DEFAULT_MAX_CONCURRENT_LOOKUPS, DEFAULT_SIMILARITY_TIMEOUT_MS};
use ripple_application::domain_services::AlignerOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning for the similarity fallback
///
/// Matching and severity thresholds are domain constants, not settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on a single similarity lookup, in milliseconds
    pub similarity_timeout_ms: u64,
    /// Maximum number of similarity lookups in flight at once
    pub max_concurrent_lookups: usize,
}

impl EngineConfig {
    /// Aligner options derived from this section
    pub fn aligner_options(&self) -> AlignerOptions {
        AlignerOptions {
            similarity_timeout: Duration::from_millis(self.similarity_timeout_ms),
            max_concurrent_lookups: self.max_concurrent_lookups,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_timeout_ms: DEFAULT_SIMILARITY_TIMEOUT_MS,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }
}
