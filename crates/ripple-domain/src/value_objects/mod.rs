//! Domain Value Objects
//!
//! Immutable value objects produced and consumed by the impact engine.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`DiffRegion`] | Coalesced added/removed/modified span between two text versions |
//! | [`ChunkSpan`] | Character span of a chunk inside one version's full text |
//! | [`ChunkMapping`] | Correspondence between an old chunk and a new chunk |
//! | [`Severity`] | Three-tier impact classification |
//! | [`Embedding`] | Vector representation of chunk text |
//! | [`SimilarityMatch`] | Best candidate returned by a similarity lookup |
//! | [`ImpactReport`] | Full result of one impact analysis |

/// Text diff value objects
pub mod diff;
/// Semantic embedding value objects
pub mod embedding;
/// Chunk mapping value objects
pub mod mapping;
/// Impact report value objects
pub mod report;
/// Severity classification
pub mod severity;
/// Similarity lookup results
pub mod similarity;
/// Chunk span value objects
pub mod span;

pub use diff::{DiffKind, DiffRegion, ReplacementSpan};
pub use embedding::Embedding;
pub use mapping::{ChunkMapping, MatchConfidence};
pub use report::{AlignmentSummary, ImpactReport};
pub use severity::Severity;
pub use similarity::SimilarityMatch;
pub use span::ChunkSpan;
