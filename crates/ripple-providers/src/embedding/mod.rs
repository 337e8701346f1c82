//! Embedding Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullEmbeddingProvider | Testing | Deterministic hash-based vectors, offline |

pub mod null;

pub use null::NullEmbeddingProvider;
