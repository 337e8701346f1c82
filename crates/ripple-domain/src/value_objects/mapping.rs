//! Chunk Mapping Value Objects
//!
//! A mapping records what happened to one chunk between two versions of a
//! source. Exactly one of three shapes is valid:
//!
//! | `diff_type` | `old_chunk_id` | `new_chunk_id` |
//! |-------------|----------------|----------------|
//! | `Removed` | present | absent |
//! | `Added` | absent | present |
//! | `Modified` | present | present |
//!
//! Fields are private and the constructors only build valid shapes.

use serde::{Deserialize, Serialize};

use super::diff::DiffKind;
use crate::constants::HIGH_CONFIDENCE_SIMILARITY;

/// How a `Modified` mapping's match was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    /// Chosen by textual overlap, no similarity score recorded
    Textual,
    /// Chosen by vector similarity with a score above the confidence threshold
    Similarity,
    /// Chosen by vector similarity with a score at or below the confidence threshold
    Weak,
}

/// Value Object: Chunk Mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ChunkMappingRecord")]
pub struct ChunkMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    old_chunk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_chunk_id: Option<String>,
    diff_type: DiffKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    similarity_score: Option<f32>,
}

impl ChunkMapping {
    /// A new chunk with no counterpart in the old version
    pub fn added(new_chunk_id: impl Into<String>) -> Self {
        Self {
            old_chunk_id: None,
            new_chunk_id: Some(new_chunk_id.into()),
            diff_type: DiffKind::Added,
            similarity_score: None,
        }
    }

    /// An old chunk with no counterpart in the new version
    pub fn removed(old_chunk_id: impl Into<String>) -> Self {
        Self {
            old_chunk_id: Some(old_chunk_id.into()),
            new_chunk_id: None,
            diff_type: DiffKind::Removed,
            similarity_score: None,
        }
    }

    /// An old chunk matched to a new chunk
    ///
    /// `similarity_score` is only set when the match came from the
    /// vector-similarity fallback.
    pub fn modified(
        old_chunk_id: impl Into<String>,
        new_chunk_id: impl Into<String>,
        similarity_score: Option<f32>,
    ) -> Self {
        Self {
            old_chunk_id: Some(old_chunk_id.into()),
            new_chunk_id: Some(new_chunk_id.into()),
            diff_type: DiffKind::Modified,
            similarity_score,
        }
    }

    /// Identifier of the old chunk, absent for `Added`
    pub fn old_chunk_id(&self) -> Option<&str> {
        self.old_chunk_id.as_deref()
    }

    /// Identifier of the new chunk, absent for `Removed`
    pub fn new_chunk_id(&self) -> Option<&str> {
        self.new_chunk_id.as_deref()
    }

    /// Kind of change this mapping records
    pub fn diff_type(&self) -> DiffKind {
        self.diff_type
    }

    /// Similarity score of a fallback-derived match
    pub fn similarity_score(&self) -> Option<f32> {
        self.similarity_score
    }

    /// Confidence tier of a `Modified` mapping; `None` for added or removed chunks
    pub fn confidence(&self) -> Option<MatchConfidence> {
        if self.diff_type != DiffKind::Modified {
            return None;
        }
        Some(match self.similarity_score {
            None => MatchConfidence::Textual,
            Some(score) if score > HIGH_CONFIDENCE_SIMILARITY => MatchConfidence::Similarity,
            Some(_) => MatchConfidence::Weak,
        })
    }
}

/// Unvalidated wire shape of a mapping
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChunkMappingRecord {
    old_chunk_id: Option<String>,
    new_chunk_id: Option<String>,
    diff_type: DiffKind,
    similarity_score: Option<f32>,
}

impl TryFrom<ChunkMappingRecord> for ChunkMapping {
    type Error = String;

    fn try_from(record: ChunkMappingRecord) -> Result<Self, Self::Error> {
        match (
            record.diff_type,
            record.old_chunk_id,
            record.new_chunk_id,
        ) {
            (DiffKind::Added, None, Some(new_id)) => Ok(Self::added(new_id)),
            (DiffKind::Removed, Some(old_id), None) => Ok(Self::removed(old_id)),
            (DiffKind::Modified, Some(old_id), Some(new_id)) => {
                Ok(Self::modified(old_id, new_id, record.similarity_score))
            }
            (kind, old, new) => Err(format!(
                "invalid {kind} mapping: old_chunk_id present={}, new_chunk_id present={}",
                old.is_some(),
                new.is_some()
            )),
        }
    }
}
