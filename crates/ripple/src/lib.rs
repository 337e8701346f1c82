//! # Ripple
//!
//! Source change impact analysis. Given two versions of an ingested source
//! document and the chunks each version was split into, Ripple computes the
//! character-level changes, maps old chunks to new ones and classifies how
//! severe the change is for the artifacts generated from that source.
//!
//! ## Example
//!
//! ```ignore
//! use ripple::application::ports::services::ImpactRequest;
//! use ripple::infrastructure::{AppConfig, EmbeddingSeed, init_app};
//!
//! let context = init_app(AppConfig::default(), EmbeddingSeed::None).await?;
//! let report = context.impact_analysis().analyze(&request).await?;
//! println!("{:?}", report.severity);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Chunks, diff regions, mappings, severity and provider ports
//! - `application` - Diff, alignment and severity services plus the provider registries
//! - `providers` - Similarity and embedding provider implementations
//! - `infrastructure` - Configuration, logging and provider wiring
//! - [`cli`] - The `ripple` command line

// Force-link ripple-providers to ensure linkme inventory registrations are included
extern crate ripple_providers;

pub mod cli;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ripple_domain::*;
}

/// Application layer - impact analysis services
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use ripple_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use ripple_providers::*;
}

/// Infrastructure layer - config, logging and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ripple_infrastructure::*;
}
