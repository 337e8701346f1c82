//! Unit tests for impact report value objects

use ripple_domain::{AlignmentSummary, ChunkMapping, DiffRegion, ImpactReport, Severity};

#[test]
fn test_summary_counts_by_kind() {
    let mappings = vec![
        ChunkMapping::modified("a", "x", None),
        ChunkMapping::removed("b"),
        ChunkMapping::added("y"),
        ChunkMapping::added("z"),
    ];

    let summary = AlignmentSummary::from_mappings(&mappings);

    assert_eq!(summary.modified, 1);
    assert_eq!(summary.removed, 1);
    assert_eq!(summary.added, 2);
    assert_eq!(summary.total(), 4);
}

#[test]
fn test_report_serializes_severity_lowercase() {
    let report = ImpactReport::new(
        vec![DiffRegion::added(0, 1, "a")],
        vec![ChunkMapping::added("y")],
        Severity::Minor,
    );

    let json = serde_json::to_value(&report).expect("serialize");

    assert!(report.has_changes());
    assert_eq!(json["severity"], "minor");
    assert_eq!(json["summary"]["added"], 1);
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Minor < Severity::Moderate);
    assert!(Severity::Moderate < Severity::Major);
    assert_eq!(Severity::Major.to_string(), "major");
}
