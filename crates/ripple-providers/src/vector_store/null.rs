//! Null similarity provider
//!
//! Never finds a match, so the aligner always keeps its textual result.

use async_trait::async_trait;
use ripple_domain::error::Result;
use ripple_domain::ports::providers::ChunkSimilarityProvider;
use ripple_domain::value_objects::SimilarityMatch;

/// Similarity provider that never returns a match
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChunkSimilarityProvider;

impl NullChunkSimilarityProvider {
    /// Create a new null similarity provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChunkSimilarityProvider for NullChunkSimilarityProvider {
    async fn find_most_similar(
        &self,
        _chunk_id: &str,
        _candidate_ids: &[String],
    ) -> Result<Option<SimilarityMatch>> {
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ripple_application::ports::registry::{
    CHUNK_SIMILARITY_PROVIDERS, ChunkSimilarityProviderConfig, ChunkSimilarityProviderEntry,
};

fn null_similarity_factory(
    _config: &ChunkSimilarityProviderConfig,
) -> std::result::Result<std::sync::Arc<dyn ChunkSimilarityProvider>, String> {
    Ok(std::sync::Arc::new(NullChunkSimilarityProvider::new()))
}

#[linkme::distributed_slice(CHUNK_SIMILARITY_PROVIDERS)]
static NULL_SIMILARITY_PROVIDER: ChunkSimilarityProviderEntry = ChunkSimilarityProviderEntry {
    name: "null",
    description: "Null provider (never matches; textual alignment only)",
    factory: null_similarity_factory,
};
