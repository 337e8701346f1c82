//! Application Context Bootstrap
//!
//! Composition root: resolves providers from configuration and builds the
//! impact analysis service on top of them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config, EmbeddingSeed::EmbedChunks(chunks)).await?;
//! let report = context.impact_analysis().analyze(&request).await?;
//! ```

use crate::config::AppConfig;
use crate::di::provider_resolvers::{EmbeddingProviderResolver, SimilarityProviderResolver};
use ripple_application::ports::services::ImpactAnalysisServiceInterface;
use ripple_application::use_cases::ImpactAnalysisServiceImpl;
use ripple_domain::entities::SourceChunk;
use ripple_domain::error::{Error, Result};
use ripple_domain::ports::providers::{ChunkSimilarityProvider, EmbeddingProvider};
use ripple_domain::value_objects::Embedding;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the similarity provider's chunk embeddings come from
#[derive(Debug, Clone, Default)]
pub enum EmbeddingSeed {
    /// Start without embeddings
    #[default]
    None,
    /// Embeddings computed elsewhere, keyed by chunk id
    Precomputed(HashMap<String, Embedding>),
    /// Embed these chunks with the configured embedding provider
    EmbedChunks(Vec<SourceChunk>),
}

/// Application context holding resolved providers and services
pub struct AppContext {
    config: Arc<AppConfig>,
    embedding: Arc<dyn EmbeddingProvider>,
    similarity: Arc<dyn ChunkSimilarityProvider>,
    impact_analysis: Arc<dyn ImpactAnalysisServiceInterface>,
}

impl AppContext {
    /// Configuration the context was built from
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Resolved embedding provider
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.embedding)
    }

    /// Resolved similarity provider
    pub fn similarity_provider(&self) -> Arc<dyn ChunkSimilarityProvider> {
        Arc::clone(&self.similarity)
    }

    /// Impact analysis service
    pub fn impact_analysis(&self) -> Arc<dyn ImpactAnalysisServiceInterface> {
        Arc::clone(&self.impact_analysis)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("embedding", &self.embedding.provider_name())
            .field("similarity", &self.similarity.provider_name())
            .finish_non_exhaustive()
    }
}

/// Build the application context from configuration
pub async fn init_app(config: AppConfig, seed: EmbeddingSeed) -> Result<AppContext> {
    let config = Arc::new(config);

    let embedding = EmbeddingProviderResolver::new(Arc::clone(&config))
        .resolve_from_config()
        .map_err(|e| Error::config(format!("Failed to resolve embedding provider: {e}")))?;

    let embeddings = match seed {
        EmbeddingSeed::None => HashMap::new(),
        EmbeddingSeed::Precomputed(embeddings) => embeddings,
        EmbeddingSeed::EmbedChunks(chunks) => embed_chunks(embedding.as_ref(), &chunks).await?,
    };
    debug!(count = embeddings.len(), "Seeding similarity provider");

    let similarity = SimilarityProviderResolver::new(Arc::clone(&config))
        .resolve_from_config(embeddings)
        .map_err(|e| Error::config(format!("Failed to resolve similarity provider: {e}")))?;

    let impact_analysis: Arc<dyn ImpactAnalysisServiceInterface> =
        Arc::new(ImpactAnalysisServiceImpl::with_options(
            Arc::clone(&similarity),
            config.engine.aligner_options(),
        ));

    info!(
        similarity = similarity.provider_name(),
        embedding = embedding.provider_name(),
        "Application context initialized"
    );

    Ok(AppContext {
        config,
        embedding,
        similarity,
        impact_analysis,
    })
}

/// Embed chunk contents, keyed by chunk id
///
/// The first chunk seen for an id wins; a later chunk reusing the id with
/// different content is skipped with a warning.
async fn embed_chunks(
    provider: &dyn EmbeddingProvider,
    chunks: &[SourceChunk],
) -> Result<HashMap<String, Embedding>> {
    let mut unique: Vec<&SourceChunk> = Vec::with_capacity(chunks.len());
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(chunks.len());
    for chunk in chunks {
        match seen.get(chunk.id.as_str()) {
            Some(content) if *content != chunk.content => {
                warn!(chunk_id = %chunk.id, "Chunk id reused with different content; keeping first");
            }
            Some(_) => {}
            None => {
                seen.insert(&chunk.id, &chunk.content);
                unique.push(chunk);
            }
        }
    }

    let texts: Vec<String> = unique.iter().map(|chunk| chunk.content.clone()).collect();
    let vectors = provider.embed_batch(&texts).await?;
    if vectors.len() != unique.len() {
        return Err(Error::embedding(format!(
            "provider '{}' returned {} embeddings for {} chunks",
            provider.provider_name(),
            vectors.len(),
            unique.len()
        )));
    }

    Ok(unique
        .into_iter()
        .map(|chunk| chunk.id.clone())
        .zip(vectors)
        .collect())
}
