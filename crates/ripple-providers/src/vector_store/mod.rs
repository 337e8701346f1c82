//! Chunk Similarity Provider Implementations
//!
//! Backends answering "which candidate chunk is closest to this one".
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullChunkSimilarityProvider | Testing | Never finds a match |
//! | InMemoryChunkVectorStore | Local | Brute-force cosine over a concurrent map |

#[cfg(feature = "vectorstore-memory")]
pub mod in_memory;
pub mod null;

#[cfg(feature = "vectorstore-memory")]
pub use in_memory::InMemoryChunkVectorStore;
pub use null::NullChunkSimilarityProvider;
