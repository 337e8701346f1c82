//! # Ripple - Provider Implementations
//!
//! User-selectable implementations of the provider ports defined in
//! `ripple-domain`. Every provider registers itself in a linkme registry
//! declared by `ripple-application`, so linking this crate is enough to make
//! them resolvable by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Similarity | `ChunkSimilarityProvider` | InMemory (`memory`), Null (`null`) |
//! | Embedding | `EmbeddingProvider` | Null (`null`) |
//!
//! ## Usage
//!
//! ```ignore
//! use ripple_providers::vector_store::InMemoryChunkVectorStore;
//! use ripple_providers::embedding::NullEmbeddingProvider;
//! ```

pub use ripple_domain::error::{Error, Result};
pub use ripple_domain::ports::providers::{ChunkSimilarityProvider, EmbeddingProvider};

/// Provider-specific constants
pub mod constants;

/// Embedding provider implementations
pub mod embedding;

/// Chunk similarity provider implementations
pub mod vector_store;

#[cfg(feature = "vectorstore-memory")]
pub use vector_store::InMemoryChunkVectorStore;
pub use embedding::NullEmbeddingProvider;
pub use vector_store::NullChunkSimilarityProvider;
