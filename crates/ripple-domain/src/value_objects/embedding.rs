//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings used by the
//! vector-similarity fallback of the chunk aligner.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of chunk content that captures semantic
/// meaning.
///
/// ## Example
///
/// ```rust
/// use ripple_domain::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "null-test");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving dimensions from the vector length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// L2 norm of the vector
    pub fn norm(&self) -> f32 {
        self.vector.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Cosine similarity in `[-1, 1]`; zero vectors and mismatched dimensions yield `None`
    pub fn cosine_similarity(&self, other: &Self) -> Option<f32> {
        if self.vector.len() != other.vector.len() {
            return None;
        }
        let norm_a = self.norm();
        let norm_b = other.norm();
        if norm_a == 0.0 || norm_b == 0.0 {
            return None;
        }
        let dot: f32 = self
            .vector
            .iter()
            .zip(other.vector.iter())
            .map(|(x, y)| x * y)
            .sum();
        Some(dot / (norm_a * norm_b))
    }
}
