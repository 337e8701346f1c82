use crate::error::Result;
use crate::value_objects::SimilarityMatch;
use async_trait::async_trait;

/// Vector-Similarity Lookup over Chunk Embeddings
///
/// The aligner falls back to this port when textual overlap cannot decide
/// which new chunk an old chunk turned into. Any nearest-neighbour index can
/// back it: an SQL vector extension, a dedicated vector database, or an
/// in-memory brute-force scan for small chunk counts.
///
/// Callers treat every error as "no match"; implementations should still
/// report failures as errors rather than silently returning `None`, so the
/// caller can log them.
///
/// # Example
///
/// ```ignore
/// use ripple_domain::ports::providers::ChunkSimilarityProvider;
///
/// let candidates = vec!["new-1".to_string(), "new-2".to_string()];
/// if let Some(best) = provider.find_most_similar("old-7", &candidates).await? {
///     println!("{} scored {}", best.chunk_id, best.score);
/// }
/// ```
#[async_trait]
pub trait ChunkSimilarityProvider: Send + Sync {
    /// Find the candidate whose embedding is most similar to `chunk_id`'s
    ///
    /// # Arguments
    /// * `chunk_id` - Old chunk whose stored embedding is the query
    /// * `candidate_ids` - New chunk ids the search is restricted to
    ///
    /// # Returns
    /// Ok(Some(match)) with the highest-scoring candidate, Ok(None) if no
    /// candidate could be scored, Error if the lookup failed
    async fn find_most_similar(
        &self,
        chunk_id: &str,
        candidate_ids: &[String],
    ) -> Result<Option<SimilarityMatch>>;

    /// Get the name/identifier of this provider
    fn provider_name(&self) -> &str;
}
