//! Domain Services
//!
//! The engine components, leaf-first.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`compute_text_diff`] | Character-level diff reduced to coalesced regions |
//! | [`locate_chunks`] | Character spans of ordered chunks within a full text |
//! | [`ChunkAligner`] | Old-to-new chunk correspondence with similarity fallback |
//! | [`determine_severity`] | Decision table mapping impact to a severity tier |

/// Chunk alignment
pub mod chunk_aligner;
/// Chunk span reconstruction
pub mod chunk_locator;
/// Severity classification
pub mod severity;
/// Character-level text differencing
pub mod text_diff;

pub use chunk_aligner::{AlignerOptions, ChunkAligner, textual_overlap};
pub use chunk_locator::locate_chunks;
pub use severity::determine_severity;
pub use text_diff::{apply_text_diff, compute_text_diff, insertion_points};
