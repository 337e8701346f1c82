//! Provider Resolvers
//!
//! Wrap the linkme registry resolution with the application configuration.

use crate::config::AppConfig;
use ripple_application::ports::registry::{
    ChunkSimilarityProviderConfig, EmbeddingProviderConfig, list_chunk_similarity_providers,
    list_embedding_providers, resolve_chunk_similarity_provider, resolve_embedding_provider,
};
use ripple_domain::ports::providers::{ChunkSimilarityProvider, EmbeddingProvider};
use ripple_domain::value_objects::Embedding;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Similarity Provider Resolver
// ============================================================================

/// Resolver for similarity providers
pub struct SimilarityProviderResolver {
    config: Arc<AppConfig>,
}

impl SimilarityProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the configured provider, seeding it with chunk embeddings
    pub fn resolve_from_config(
        &self,
        embeddings: HashMap<String, Embedding>,
    ) -> Result<Arc<dyn ChunkSimilarityProvider>, String> {
        let registry_config =
            ChunkSimilarityProviderConfig::new(&self.config.providers.similarity.provider)
                .with_embeddings(embeddings);

        resolve_chunk_similarity_provider(&registry_config)
    }

    /// Resolve provider from override config
    pub fn resolve_from_override(
        &self,
        override_config: &ChunkSimilarityProviderConfig,
    ) -> Result<Arc<dyn ChunkSimilarityProvider>, String> {
        resolve_chunk_similarity_provider(override_config)
    }

    /// List available similarity providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_chunk_similarity_providers()
    }
}

impl std::fmt::Debug for SimilarityProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityProviderResolver").finish()
    }
}

// ============================================================================
// Embedding Provider Resolver
// ============================================================================

/// Resolver for embedding providers
pub struct EmbeddingProviderResolver {
    config: Arc<AppConfig>,
}

impl EmbeddingProviderResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve provider from current application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn EmbeddingProvider>, String> {
        let settings = &self.config.providers.embedding;
        let mut registry_config = EmbeddingProviderConfig::new(&settings.provider);
        if let Some(dimensions) = settings.dimensions {
            registry_config = registry_config.with_dimensions(dimensions);
        }

        resolve_embedding_provider(&registry_config)
    }

    /// Resolve provider from override config
    pub fn resolve_from_override(
        &self,
        override_config: &EmbeddingProviderConfig,
    ) -> Result<Arc<dyn EmbeddingProvider>, String> {
        resolve_embedding_provider(override_config)
    }

    /// List available embedding providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_embedding_providers()
    }
}

impl std::fmt::Debug for EmbeddingProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingProviderResolver").finish()
    }
}
