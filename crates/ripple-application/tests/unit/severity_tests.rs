//! Tests for severity classification

use ripple_application::domain_services::determine_severity;
use ripple_domain::value_objects::{ChunkMapping, Severity};

fn textual() -> ChunkMapping {
    ChunkMapping::modified("o", "n", None)
}

fn scored(score: f32) -> ChunkMapping {
    ChunkMapping::modified("o", "n", Some(score))
}

#[test]
fn test_many_artifacts_is_always_major() {
    assert_eq!(determine_severity(11, &[], None), Severity::Major);
    assert_eq!(
        determine_severity(50, &[ChunkMapping::removed("o")], Some(1000)),
        Severity::Major
    );
}

#[test]
fn test_ten_artifacts_is_moderate() {
    assert_eq!(determine_severity(10, &[textual()], None), Severity::Moderate);
}

#[test]
fn test_any_removal_is_moderate() {
    for count in [0, 1, 2, 5, 10] {
        let mappings = [textual(), ChunkMapping::removed("gone")];
        assert_eq!(determine_severity(count, &mappings, None), Severity::Moderate);
    }
}

#[test]
fn test_removal_outranks_evidence_ratio() {
    // Ratio 2/2 would be major, but the removal rule fires first
    let mappings = [ChunkMapping::removed("a"), textual()];
    assert_eq!(determine_severity(1, &mappings, Some(2)), Severity::Moderate);
}

#[test]
fn test_three_to_ten_artifacts_is_moderate() {
    for count in 3..=10 {
        assert_eq!(determine_severity(count, &[textual()], Some(1)), Severity::Moderate);
    }
}

#[test]
fn test_high_evidence_ratio_is_major() {
    let mappings = [textual(), textual(), textual(), textual()];
    assert_eq!(determine_severity(1, &mappings, Some(10)), Severity::Major);
}

#[test]
fn test_ratio_at_threshold_is_not_major() {
    let mappings = [textual(), textual(), textual()];
    assert_eq!(determine_severity(1, &mappings, Some(10)), Severity::Minor);
}

#[test]
fn test_zero_or_missing_total_skips_ratio() {
    let mappings = [textual(), textual()];
    assert_eq!(determine_severity(1, &mappings, Some(0)), Severity::Minor);
    assert_eq!(determine_severity(1, &mappings, None), Severity::Minor);
}

#[test]
fn test_textual_and_confident_matches_are_minor() {
    assert_eq!(determine_severity(1, &[textual()], None), Severity::Minor);
    assert_eq!(determine_severity(2, &[scored(0.9)], None), Severity::Minor);
    assert_eq!(determine_severity(0, &[], None), Severity::Minor);
}

#[test]
fn test_weak_similarity_match_is_moderate() {
    assert_eq!(determine_severity(1, &[scored(0.85)], None), Severity::Moderate);
    assert_eq!(
        determine_severity(0, &[textual(), scored(0.4)], None),
        Severity::Moderate
    );
}

#[test]
fn test_added_mappings_do_not_lower_confidence() {
    let mappings = [ChunkMapping::added("n1"), ChunkMapping::added("n2"), textual()];
    assert_eq!(determine_severity(1, &mappings, None), Severity::Minor);
}

#[test]
fn test_severity_is_monotone_in_artifact_count() {
    let mappings = [scored(0.95)];
    let mut previous = Severity::Minor;
    for count in 0..20 {
        let severity = determine_severity(count, &mappings, None);
        assert!(severity >= previous, "count {count}: {severity} < {previous}");
        previous = severity;
    }
}
