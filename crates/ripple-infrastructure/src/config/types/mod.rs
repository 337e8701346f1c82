//! Configuration types

mod app;
mod engine;
mod logging;
mod providers;

pub use app::AppConfig;
pub use engine::EngineConfig;
pub use logging::LoggingConfig;
pub use providers::{EmbeddingProviderSettings, ProvidersConfig, SimilarityProviderSettings};
