//! In-memory chunk vector store
//!
//! Keeps one embedding per chunk id in a concurrent map and answers
//! similarity lookups with a brute-force cosine scan over the candidate set.
//! Data is not persisted. Suitable for the chunk counts of a single source
//! document.

use async_trait::async_trait;
use dashmap::DashMap;
use ripple_domain::error::{Error, Result};
use ripple_domain::ports::providers::ChunkSimilarityProvider;
use ripple_domain::value_objects::{Embedding, SimilarityMatch};
use std::sync::Arc;
use tracing::trace;

/// In-memory chunk vector store
pub struct InMemoryChunkVectorStore {
    embeddings: Arc<DashMap<String, Embedding>>,
}

impl InMemoryChunkVectorStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            embeddings: Arc::new(DashMap::new()),
        }
    }

    /// Create a store seeded with pre-computed embeddings
    pub fn with_embeddings(embeddings: impl IntoIterator<Item = (String, Embedding)>) -> Self {
        let store = Self::new();
        for (chunk_id, embedding) in embeddings {
            store.upsert(chunk_id, embedding);
        }
        store
    }

    /// Insert or replace a chunk's embedding
    pub fn upsert(&self, chunk_id: impl Into<String>, embedding: Embedding) {
        self.embeddings.insert(chunk_id.into(), embedding);
    }

    /// Remove a chunk's embedding, returning it if present
    pub fn remove(&self, chunk_id: &str) -> Option<Embedding> {
        self.embeddings.remove(chunk_id).map(|(_, embedding)| embedding)
    }

    /// Whether a chunk has a stored embedding
    pub fn contains(&self, chunk_id: &str) -> bool {
        self.embeddings.contains_key(chunk_id)
    }

    /// Number of stored embeddings
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }
}

impl Default for InMemoryChunkVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChunkSimilarityProvider for InMemoryChunkVectorStore {
    async fn find_most_similar(
        &self,
        chunk_id: &str,
        candidate_ids: &[String],
    ) -> Result<Option<SimilarityMatch>> {
        if candidate_ids.is_empty() {
            return Ok(None);
        }

        let query = self
            .embeddings
            .get(chunk_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(format!("embedding for chunk '{chunk_id}'")))?;

        let mut best: Option<SimilarityMatch> = None;
        for candidate_id in candidate_ids {
            let Some(candidate) = self.embeddings.get(candidate_id) else {
                continue;
            };
            let Some(score) = query.cosine_similarity(candidate.value()) else {
                trace!(chunk_id, candidate_id, "Skipping incomparable embedding");
                continue;
            };
            if best.as_ref().is_none_or(|current| score > current.score) {
                best = Some(SimilarityMatch::new(candidate_id.clone(), score));
            }
        }

        Ok(best)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use ripple_application::ports::registry::{
    CHUNK_SIMILARITY_PROVIDERS, ChunkSimilarityProviderConfig, ChunkSimilarityProviderEntry,
};

fn in_memory_similarity_factory(
    config: &ChunkSimilarityProviderConfig,
) -> std::result::Result<Arc<dyn ChunkSimilarityProvider>, String> {
    Ok(Arc::new(InMemoryChunkVectorStore::with_embeddings(
        config
            .embeddings
            .iter()
            .map(|(id, embedding)| (id.clone(), embedding.clone())),
    )))
}

#[linkme::distributed_slice(CHUNK_SIMILARITY_PROVIDERS)]
static MEMORY_PROVIDER: ChunkSimilarityProviderEntry = ChunkSimilarityProviderEntry {
    name: "memory",
    description: "In-memory chunk vector store (brute-force cosine, non-persistent)",
    factory: in_memory_similarity_factory,
};
