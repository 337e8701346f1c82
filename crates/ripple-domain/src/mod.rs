//! # Ripple Domain Layer
//!
//! Core types and contracts for the source change impact engine. Everything
//! here is free of I/O and runtime concerns; the application layer builds the
//! diff, alignment and severity algorithms on top of these types.
//!
//! ## Module Map
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Chunks of an ingested source document |
//! | [`value_objects`] | Diff regions, chunk spans, mappings, severity, embeddings |
//! | [`ports`] | Provider interfaces (similarity lookup, embedding generation) |
//! | [`constants`] | Thresholds the aligner and classifier were tuned against |
//! | [`error`] | Domain error type and `Result` alias |

/// Domain constants (matching and severity thresholds)
pub mod constants;
/// Domain entities
pub mod entities;
/// Error handling types
pub mod error;
/// Provider ports
pub mod ports;
/// Domain value objects
pub mod value_objects;

pub use entities::SourceChunk;
pub use error::{Error, Result};
pub use value_objects::{
    AlignmentSummary, ChunkMapping, ChunkSpan, DiffKind, DiffRegion, Embedding, ImpactReport,
    MatchConfidence, ReplacementSpan, Severity, SimilarityMatch,
};
