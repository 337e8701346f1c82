//! Configuration
//!
//! Typed configuration sections and the layered loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, EmbeddingProviderSettings, EngineConfig, LoggingConfig, ProvidersConfig,
    SimilarityProviderSettings,
};
