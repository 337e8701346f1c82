//! Provider selection

use crate::constants::{DEFAULT_EMBEDDING_PROVIDER, DEFAULT_SIMILARITY_PROVIDER};
use serde::{Deserialize, Serialize};

/// Provider configuration sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Similarity lookup backend
    pub similarity: SimilarityProviderSettings,
    /// Embedding generation backend
    pub embedding: EmbeddingProviderSettings,
}

/// Similarity provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityProviderSettings {
    /// Registered provider name
    pub provider: String,
}

impl Default for SimilarityProviderSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_SIMILARITY_PROVIDER.to_string(),
        }
    }
}

/// Embedding provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingProviderSettings {
    /// Registered provider name
    pub provider: String,
    /// Vector dimensionality, for providers where it is configurable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
}

impl Default for EmbeddingProviderSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            dimensions: None,
        }
    }
}
