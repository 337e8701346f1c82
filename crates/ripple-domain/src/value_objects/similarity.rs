//! Similarity lookup results

use serde::{Deserialize, Serialize};

/// Best candidate returned by a vector-similarity lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    /// Identifier of the matching candidate chunk
    pub chunk_id: String,
    /// Similarity score (cosine similarity for vector providers)
    pub score: f32,
}

impl SimilarityMatch {
    /// Create a new similarity match
    pub fn new(chunk_id: impl Into<String>, score: f32) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            score,
        }
    }
}
