//! Provider wiring
//!
//! Resolves providers from configuration through the linkme registries and
//! assembles the application context.
//!
//! ```text
//! AppConfig → Resolvers → linkme registry → Arc<dyn Provider> → ImpactAnalysisServiceImpl
//! ```

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{AppContext, EmbeddingSeed, init_app};
pub use provider_resolvers::{EmbeddingProviderResolver, SimilarityProviderResolver};
