//! Chunk Similarity Provider Registry
//!
//! Auto-registration system for similarity lookup backends using linkme
//! distributed slices.

use std::collections::HashMap;
use std::sync::Arc;

use ripple_domain::ports::providers::ChunkSimilarityProvider;
use ripple_domain::value_objects::Embedding;

/// Configuration for similarity provider creation
///
/// `embeddings` carries vectors already computed for chunks, keyed by chunk
/// id. Index-backed providers seed themselves from it; others ignore it.
#[derive(Debug, Clone, Default)]
pub struct ChunkSimilarityProviderConfig {
    /// Provider name (e.g., "memory", "null")
    pub provider: String,
    /// Pre-computed chunk embeddings keyed by chunk id
    pub embeddings: HashMap<String, Embedding>,
}

impl ChunkSimilarityProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Seed the provider with one chunk embedding
    pub fn with_embedding(mut self, chunk_id: impl Into<String>, embedding: Embedding) -> Self {
        self.embeddings.insert(chunk_id.into(), embedding);
        self
    }

    /// Seed the provider with many chunk embeddings
    pub fn with_embeddings(
        mut self,
        embeddings: impl IntoIterator<Item = (String, Embedding)>,
    ) -> Self {
        self.embeddings.extend(embeddings);
        self
    }
}

/// Registry entry for similarity providers
pub struct ChunkSimilarityProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory:
        fn(&ChunkSimilarityProviderConfig) -> Result<Arc<dyn ChunkSimilarityProvider>, String>,
}

#[linkme::distributed_slice]
pub static CHUNK_SIMILARITY_PROVIDERS: [ChunkSimilarityProviderEntry] = [..];

/// Resolve similarity provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn ChunkSimilarityProvider>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_chunk_similarity_provider(
    config: &ChunkSimilarityProviderConfig,
) -> Result<Arc<dyn ChunkSimilarityProvider>, String> {
    let provider_name = &config.provider;

    for entry in CHUNK_SIMILARITY_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CHUNK_SIMILARITY_PROVIDERS
        .iter()
        .map(|e| e.name)
        .collect();

    Err(format!(
        "Unknown similarity provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered similarity providers as (name, description) tuples
pub fn list_chunk_similarity_providers() -> Vec<(&'static str, &'static str)> {
    CHUNK_SIMILARITY_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
