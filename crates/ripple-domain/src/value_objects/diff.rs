//! Text Diff Value Objects
//!
//! A diff between two versions of a source document is reduced to a list of
//! coalesced regions. Offsets are character offsets, and their offset space
//! depends on the region kind:
//!
//! | Kind | `start_offset`/`end_offset` refer to |
//! |------|--------------------------------------|
//! | `Added` | the new text |
//! | `Removed` | the old text |
//! | `Modified` | the old text (the inserted side lives in `replacement`) |

use serde::{Deserialize, Serialize};

/// Kind of change, shared by diff regions and chunk mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Content present only in the new version
    Added,
    /// Content present only in the old version
    Removed,
    /// Content replaced between versions
    Modified,
}

impl DiffKind {
    /// Lowercase name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
        }
    }
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inserted side of a `Modified` region, in new-text coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementSpan {
    /// First character offset in the new text
    pub start_offset: usize,
    /// One past the last character offset in the new text
    pub end_offset: usize,
    /// Inserted text
    pub text: String,
}

/// Value Object: Diff Region
///
/// A contiguous span flagged as added, removed or modified between two
/// versions of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRegion {
    /// Region kind, which also selects the offset space
    pub kind: DiffKind,
    /// First character offset of the region
    pub start_offset: usize,
    /// One past the last character offset of the region
    pub end_offset: usize,
    /// Added text for `Added`, removed text for `Removed` and `Modified`
    pub text: String,
    /// Inserted side of a `Modified` region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<ReplacementSpan>,
}

impl DiffRegion {
    /// Create an `Added` region (offsets into the new text)
    pub fn added(start_offset: usize, end_offset: usize, text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Added,
            start_offset,
            end_offset,
            text: text.into(),
            replacement: None,
        }
    }

    /// Create a `Removed` region (offsets into the old text)
    pub fn removed(start_offset: usize, end_offset: usize, text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Removed,
            start_offset,
            end_offset,
            text: text.into(),
            replacement: None,
        }
    }

    /// Merge a removed region and the added region that replaces it
    pub fn modified(removed: Self, added: Self) -> Self {
        Self {
            kind: DiffKind::Modified,
            start_offset: removed.start_offset,
            end_offset: removed.end_offset,
            text: removed.text,
            replacement: Some(ReplacementSpan {
                start_offset: added.start_offset,
                end_offset: added.end_offset,
                text: added.text,
            }),
        }
    }

    /// Number of characters covered by the region
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    /// Whether the region covers no characters
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the region's offsets point into the old text
    pub fn touches_old_text(&self) -> bool {
        matches!(self.kind, DiffKind::Removed | DiffKind::Modified)
    }
}
