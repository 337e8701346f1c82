//! Unit tests for DiffRegion and ChunkSpan value objects

use ripple_domain::{ChunkSpan, DiffKind, DiffRegion};

#[test]
fn test_modified_region_keeps_old_offsets() {
    let removed = DiffRegion::removed(4, 7, "old");
    let added = DiffRegion::added(7, 10, "new");

    let modified = DiffRegion::modified(removed, added);

    assert_eq!(modified.kind, DiffKind::Modified);
    assert_eq!((modified.start_offset, modified.end_offset), (4, 7));
    assert_eq!(modified.text, "old");
    let replacement = modified.replacement.expect("replacement");
    assert_eq!((replacement.start_offset, replacement.end_offset), (7, 10));
    assert_eq!(replacement.text, "new");
}

#[test]
fn test_region_offset_space_by_kind() {
    assert!(!DiffRegion::added(0, 1, "a").touches_old_text());
    assert!(DiffRegion::removed(0, 1, "a").touches_old_text());
    assert_eq!(DiffRegion::removed(3, 8, "hello").len(), 5);
}

#[test]
fn test_diff_kind_serializes_lowercase() {
    let json = serde_json::to_value(DiffRegion::added(0, 2, "hi")).expect("serialize");
    assert_eq!(json["kind"], "added");
    assert_eq!(json["startOffset"], 0);
    assert!(json.get("replacement").is_none());
}

#[test]
fn test_span_overlap() {
    let span = ChunkSpan::new("c", 10, 20);

    assert_eq!(span.overlap(0, 10), 0);
    assert_eq!(span.overlap(15, 25), 5);
    assert_eq!(span.overlap(12, 14), 2);
    assert_eq!(span.overlap(20, 30), 0);
}

#[test]
fn test_span_strictly_contains() {
    let span = ChunkSpan::new("c", 10, 20);

    assert!(!span.strictly_contains(10));
    assert!(span.strictly_contains(11));
    assert!(!span.strictly_contains(20));
}
