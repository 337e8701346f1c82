//! Null embedding provider for testing and development
//!
//! Produces deterministic, hash-based vectors. Identical texts always map to
//! identical vectors; different texts map to unrelated ones. No external
//! dependencies, always works offline.

use async_trait::async_trait;

use ripple_domain::error::Result;
use ripple_domain::ports::providers::EmbeddingProvider;
use ripple_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_EMBEDDING_MODEL};

/// Null embedding provider
///
/// # Example
///
/// ```rust
/// use ripple_providers::embedding::NullEmbeddingProvider;
/// use ripple_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a provider producing vectors of the default dimensionality
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a provider producing vectors of `dimensions` components
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn embed_one(&self, text: &str) -> Embedding {
        let seed = fnv1a(text.as_bytes());
        let vector = (0..self.dimensions as u64)
            .map(|j| {
                let mixed = splitmix(seed ^ j.wrapping_mul(0x9E37_79B9_7F4A_7C15));
                // Top 24 bits → [-1.0, 1.0)
                ((mixed >> 40) as f32 / (1u64 << 23) as f32) - 1.0
            })
            .collect();
        Embedding::new(vector, NULL_EMBEDDING_MODEL)
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|text| self.embed_one(text)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

fn splitmix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ripple_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

fn null_embedding_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<std::sync::Arc<dyn EmbeddingProvider>, String> {
    let provider = match config.dimensions {
        Some(0) => return Err("null embedding provider needs at least one dimension".to_string()),
        Some(dimensions) => NullEmbeddingProvider::with_dimensions(dimensions),
        None => NullEmbeddingProvider::new(),
    };
    Ok(std::sync::Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_EMBEDDING_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_embedding_factory,
};
