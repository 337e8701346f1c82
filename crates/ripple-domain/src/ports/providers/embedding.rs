use crate::error::{Error, Result};
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Generation
///
/// Turns chunk content into vectors so a similarity index can be populated.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Embed several texts, preserving order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of produced vectors
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider
    fn provider_name(&self) -> &str;
}
