//! Provider Registry System
//!
//! Auto-registration for plugin providers. Uses the `linkme` crate so that
//! providers compiled into the binary are discoverable at runtime without a
//! central list.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = memory" → InMemory store     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in ripple-providers)
//!
//! ```ignore
//! use ripple_application::ports::registry::{
//!     ChunkSimilarityProviderEntry, CHUNK_SIMILARITY_PROVIDERS,
//! };
//!
//! #[linkme::distributed_slice(CHUNK_SIMILARITY_PROVIDERS)]
//! static MEMORY_PROVIDER: ChunkSimilarityProviderEntry = ChunkSimilarityProviderEntry {
//!     name: "memory",
//!     description: "In-memory brute-force cosine index",
//!     factory: |config| Ok(Arc::new(InMemoryChunkVectorStore::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a Provider (in ripple-infrastructure)
//!
//! ```ignore
//! use ripple_application::ports::registry::resolve_chunk_similarity_provider;
//!
//! let config = ChunkSimilarityProviderConfig::new("memory");
//! let provider = resolve_chunk_similarity_provider(&config)?;
//! ```

pub mod embedding;
pub mod similarity;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use similarity::{
    CHUNK_SIMILARITY_PROVIDERS, ChunkSimilarityProviderConfig, ChunkSimilarityProviderEntry,
    list_chunk_similarity_providers, resolve_chunk_similarity_provider,
};
