//! Unit tests for the ChunkMapping value object

use ripple_domain::{ChunkMapping, DiffKind, MatchConfidence};

#[test]
fn test_added_mapping_has_only_new_id() {
    let mapping = ChunkMapping::added("new-1");

    assert_eq!(mapping.diff_type(), DiffKind::Added);
    assert_eq!(mapping.old_chunk_id(), None);
    assert_eq!(mapping.new_chunk_id(), Some("new-1"));
    assert_eq!(mapping.similarity_score(), None);
    assert_eq!(mapping.confidence(), None);
}

#[test]
fn test_removed_mapping_has_only_old_id() {
    let mapping = ChunkMapping::removed("old-1");

    assert_eq!(mapping.diff_type(), DiffKind::Removed);
    assert_eq!(mapping.old_chunk_id(), Some("old-1"));
    assert_eq!(mapping.new_chunk_id(), None);
    assert_eq!(mapping.confidence(), None);
}

#[test]
fn test_modified_mapping_confidence_tiers() {
    let textual = ChunkMapping::modified("a", "b", None);
    let strong = ChunkMapping::modified("a", "b", Some(0.9));
    let weak = ChunkMapping::modified("a", "b", Some(0.85));

    assert_eq!(textual.confidence(), Some(MatchConfidence::Textual));
    assert_eq!(strong.confidence(), Some(MatchConfidence::Similarity));
    assert_eq!(weak.confidence(), Some(MatchConfidence::Weak));
}

#[test]
fn test_mapping_serializes_camel_case_and_skips_absent_fields() {
    let json = serde_json::to_value(ChunkMapping::removed("old-1")).expect("serialize");

    assert_eq!(json["oldChunkId"], "old-1");
    assert_eq!(json["diffType"], "removed");
    assert!(json.get("newChunkId").is_none());
    assert!(json.get("similarityScore").is_none());
}

#[test]
fn test_mapping_deserialization_roundtrip() {
    let original = ChunkMapping::modified("old-1", "new-1", Some(0.7));
    let json = serde_json::to_string(&original).expect("serialize");
    let parsed: ChunkMapping = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(parsed, original);
}

#[test]
fn test_mapping_deserialization_rejects_invalid_shape() {
    let result: Result<ChunkMapping, _> =
        serde_json::from_str(r#"{"diffType":"removed","newChunkId":"x"}"#);
    assert!(result.is_err());

    let result: Result<ChunkMapping, _> =
        serde_json::from_str(r#"{"diffType":"modified","oldChunkId":"x"}"#);
    assert!(result.is_err());
}
