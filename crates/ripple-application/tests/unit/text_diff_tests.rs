//! Tests for character-level text differencing

use ripple_application::domain_services::{apply_text_diff, compute_text_diff};
use ripple_domain::value_objects::{DiffKind, DiffRegion};

fn slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

/// Every region's text must be the slice of the version its offsets refer to
fn assert_regions_consistent(old: &str, new: &str, regions: &[DiffRegion]) {
    for region in regions {
        match region.kind {
            DiffKind::Added => {
                assert_eq!(slice(new, region.start_offset, region.end_offset), region.text);
            }
            DiffKind::Removed | DiffKind::Modified => {
                assert_eq!(slice(old, region.start_offset, region.end_offset), region.text);
            }
        }
        if let Some(replacement) = &region.replacement {
            assert_eq!(
                slice(new, replacement.start_offset, replacement.end_offset),
                replacement.text
            );
        }
        assert_eq!(region.len(), region.text.chars().count());
    }
}

#[test]
fn test_identical_texts_have_no_regions() {
    assert!(compute_text_diff("same text", "same text").is_empty());
    assert!(compute_text_diff("", "").is_empty());
}

#[test]
fn test_empty_old_text_is_one_addition() {
    let regions = compute_text_diff("", "brand new");

    assert_eq!(regions, vec![DiffRegion::added(0, 9, "brand new")]);
}

#[test]
fn test_empty_new_text_is_one_removal() {
    let regions = compute_text_diff("gone", "");

    assert_eq!(regions, vec![DiffRegion::removed(0, 4, "gone")]);
}

#[test]
fn test_appended_clause_is_added_in_new_coordinates() {
    let old = "The system shall log all errors.";
    let new = "The system shall log all errors and warnings.";

    let regions = compute_text_diff(old, new);

    assert_eq!(regions, vec![DiffRegion::added(31, 44, " and warnings")]);
}

#[test]
fn test_insertion_in_the_middle() {
    let regions = compute_text_diff("hello world", "hello brave world");

    assert_eq!(regions, vec![DiffRegion::added(6, 12, "brave ")]);
}

#[test]
fn test_in_place_substitution_is_not_merged() {
    // Removed ends at 2, Added starts at 1: not numerically adjacent
    let regions = compute_text_diff("cat", "cut");

    assert_eq!(regions.len(), 2);
    assert!(regions.contains(&DiffRegion::removed(1, 2, "a")));
    assert!(regions.contains(&DiffRegion::added(1, 2, "u")));
    assert!(regions.iter().all(|region| region.kind != DiffKind::Modified));
}

#[test]
fn test_numeric_adjacency_merges_into_modified() {
    // "XY" removed at old [0, 2), "QQ" added at new [2, 4)
    let old = "XYab";
    let new = "abQQ";

    let regions = compute_text_diff(old, new);

    assert_eq!(regions.len(), 1);
    let region = &regions[0];
    assert_eq!(region.kind, DiffKind::Modified);
    assert_eq!((region.start_offset, region.end_offset), (0, 2));
    assert_eq!(region.text, "XY");
    let replacement = region.replacement.as_ref().expect("modified carries replacement");
    assert_eq!(replacement.text, "QQ");
    assert_eq!((replacement.start_offset, replacement.end_offset), (2, 4));
    assert_eq!(apply_text_diff(old, &regions), new);
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    let old = "café au lait";
    let new = "café noir au lait";

    let regions = compute_text_diff(old, new);

    assert_eq!(regions, vec![DiffRegion::added(5, 10, "noir ")]);
}

#[test]
fn test_diff_replays_to_new_text() {
    let pairs = [
        ("", "abc"),
        ("abc", ""),
        ("cat", "cut"),
        ("pqXYrs", "ZZpqWWrs"),
        ("XYab", "abQQ"),
        ("The quick brown fox", "The quick red fox jumps"),
        (
            "Users must rotate passwords every 90 days.",
            "Admins must rotate keys every 30 days!",
        ),
        ("naïve résumé", "naive resume"),
        ("line one\nline two\n", "line zero\nline one\nline two\nline three\n"),
    ];

    for (old, new) in pairs {
        let regions = compute_text_diff(old, new);
        assert_regions_consistent(old, new, &regions);
        assert_eq!(apply_text_diff(old, &regions), new, "replay of {old:?} -> {new:?}");
    }
}

#[test]
fn test_diff_is_deterministic() {
    let old = "alpha beta gamma";
    let new = "alpha gamma delta";

    assert_eq!(compute_text_diff(old, new), compute_text_diff(old, new));
}
