//! Chunk span value object

use serde::{Deserialize, Serialize};

/// Value Object: Chunk Span
///
/// Half-open `[start, end)` character span of a chunk within the full text of
/// one source version. A synthetic span was placed after the previous chunk
/// because the chunk's content could not be found verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpan {
    /// Identifier of the located chunk
    pub chunk_id: String,
    /// First character offset
    pub start: usize,
    /// One past the last character offset
    pub end: usize,
    /// Whether the span was synthesized instead of located
    pub synthetic: bool,
}

impl ChunkSpan {
    /// Create a span located verbatim in the text
    pub fn new(chunk_id: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            start,
            end,
            synthetic: false,
        }
    }

    /// Create a span for a chunk that could not be located verbatim
    pub fn synthetic(chunk_id: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            synthetic: true,
            ..Self::new(chunk_id, start, end)
        }
    }

    /// Number of characters shared with `[start, end)`
    pub fn overlap(&self, start: usize, end: usize) -> usize {
        self.end.min(end).saturating_sub(self.start.max(start))
    }

    /// Whether `offset` lies strictly inside the span
    pub fn strictly_contains(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}
