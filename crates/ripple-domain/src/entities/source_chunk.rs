//! Source chunk entity
//!
//! A chunk is a pre-segmented, independently addressable span of an ingested
//! source document. Generated artifacts cite chunks as evidence, which is why
//! the impact engine reasons about changes chunk by chunk.

use serde::{Deserialize, Serialize};

/// Entity: Source Chunk
///
/// One semantic unit of a source document version, as produced by the
/// (external) chunking pipeline.
///
/// ## Example
///
/// ```rust
/// use ripple_domain::SourceChunk;
///
/// let chunk = SourceChunk::new("chunk-1", "The system shall log all errors.", 0);
/// assert_eq!(chunk.char_len(), 32);
/// assert!(!chunk.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceChunk {
    /// Stable chunk identifier
    pub id: String,
    /// Chunk text as extracted from the full document
    pub content: String,
    /// Position of the chunk within its source version
    pub index: usize,
}

impl SourceChunk {
    /// Create a new source chunk
    pub fn new(id: impl Into<String>, content: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            index,
        }
    }

    /// Length of the content in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the chunk has no content
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
