//! Domain layer constants
//!
//! Thresholds used by the chunk aligner and the severity classifier. They were
//! tuned against the character-presence overlap metric, so they are not
//! exposed through configuration.

// ============================================================================
// ALIGNMENT CONSTANTS
// ============================================================================

/// Textual overlap score below which the vector-similarity fallback is tried
pub const TEXTUAL_MATCH_THRESHOLD: f32 = 0.5;

/// Similarity score above which a similarity-derived match counts as confident
pub const HIGH_CONFIDENCE_SIMILARITY: f32 = 0.85;

// ============================================================================
// SEVERITY CONSTANTS
// ============================================================================

/// Affected artifact count above which a change is always major
pub const MAJOR_ARTIFACT_THRESHOLD: usize = 10;

/// Affected artifact count from which a change is at least moderate
pub const MODERATE_ARTIFACT_MIN: usize = 3;

/// Fraction of evidence chunks touched above which a change is major
pub const EVIDENCE_CHANGE_RATIO: f64 = 0.3;

