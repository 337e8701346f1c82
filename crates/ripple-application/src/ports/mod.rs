//! Application Port Interfaces
//!
//! Boundary contracts owned by the application layer. Provider ports live in
//! `ripple_domain::ports`; this module adds the service interface callers use
//! and the registries providers plug themselves into.
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces (impact analysis)

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use registry::{
    CHUNK_SIMILARITY_PROVIDERS, ChunkSimilarityProviderConfig, ChunkSimilarityProviderEntry,
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_chunk_similarity_providers, list_embedding_providers, resolve_chunk_similarity_provider,
    resolve_embedding_provider,
};
pub use services::{ImpactAnalysisServiceInterface, ImpactRequest};
