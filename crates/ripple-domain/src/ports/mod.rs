//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and external layers. The
//! high-level engine defines the interfaces; provider crates implement them.

/// External service provider ports
pub mod providers;

pub use providers::{ChunkSimilarityProvider, EmbeddingProvider};
