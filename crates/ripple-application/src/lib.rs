//! Application Layer - Ripple
//!
//! Implements the source change impact engine on top of the domain types:
//!
//! ```text
//! old/new text ──► text_diff ──► DiffRegion[] ─┐
//!                                              ├─► chunk_aligner ──► ChunkMapping[] ──► severity ──► Severity
//! old/new chunks ─► chunk_locator ─► ChunkSpan[] ┘         │
//!                                                          └─► ChunkSimilarityProvider (fallback)
//! ```
//!
//! ## Layout
//!
//! - `domain_services::*`: the four engine components
//! - `ports::services`: the impact analysis service interface
//! - `ports::registry`: linkme registries for provider auto-registration
//! - `use_cases::*`: service implementations composing the components
//!
//! ## Dependencies
//!
//! This crate depends only on `ripple-domain` and pure Rust libraries.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
