//! Severity classification
//!
//! Rules are evaluated top to bottom; the first one that fires wins.
//!
//! | # | Condition | Result |
//! |---|-----------|--------|
//! | 1 | more than 10 affected artifacts | Major |
//! | 2 | any chunk removed | Moderate |
//! | 3 | 3 to 10 affected artifacts | Moderate |
//! | 4 | more than 30% of the evidence chunks mapped | Major |
//! | 5 | under 3 artifacts and every match textual or high-confidence | Minor |
//! | 6 | anything else | Moderate |

use ripple_domain::constants::{
    EVIDENCE_CHANGE_RATIO, HIGH_CONFIDENCE_SIMILARITY, MAJOR_ARTIFACT_THRESHOLD,
    MODERATE_ARTIFACT_MIN,
};
use ripple_domain::value_objects::{ChunkMapping, DiffKind, Severity};

/// Classify the impact of a change
///
/// `total_evidence_chunks` of `None` or `Some(0)` disables the ratio rule.
pub fn determine_severity(
    affected_artifact_count: usize,
    mappings: &[ChunkMapping],
    total_evidence_chunks: Option<usize>,
) -> Severity {
    if affected_artifact_count > MAJOR_ARTIFACT_THRESHOLD {
        return Severity::Major;
    }

    if mappings
        .iter()
        .any(|mapping| mapping.diff_type() == DiffKind::Removed)
    {
        return Severity::Moderate;
    }

    if affected_artifact_count >= MODERATE_ARTIFACT_MIN {
        return Severity::Moderate;
    }

    if let Some(total) = total_evidence_chunks.filter(|&total| total > 0) {
        let changed_ratio = mappings.len() as f64 / total as f64;
        if changed_ratio > EVIDENCE_CHANGE_RATIO {
            return Severity::Major;
        }
    }

    let all_confident = mappings
        .iter()
        .filter(|mapping| mapping.diff_type() == DiffKind::Modified)
        .all(|mapping| {
            mapping
                .similarity_score()
                .is_none_or(|score| score > HIGH_CONFIDENCE_SIMILARITY)
        });
    if all_confident {
        return Severity::Minor;
    }

    Severity::Moderate
}
