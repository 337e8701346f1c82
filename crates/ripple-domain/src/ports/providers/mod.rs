//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | ChunkSimilarityProvider | Nearest-neighbour lookup over chunk embeddings |
//! | EmbeddingProvider | Text embedding generation services |

/// Chunk similarity provider port
pub mod chunk_similarity;
/// Embedding provider port
pub mod embedding;

pub use chunk_similarity::ChunkSimilarityProvider;
pub use embedding::EmbeddingProvider;
