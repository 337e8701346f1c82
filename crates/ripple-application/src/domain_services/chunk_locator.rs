//! Chunk span reconstruction
//!
//! Chunks arrive as ordered content strings without offsets. Their spans are
//! recovered by searching the full text forward from just past the previous
//! match, so repeated content resolves to successive occurrences.

use ripple_domain::entities::SourceChunk;
use ripple_domain::value_objects::ChunkSpan;

/// Locate each chunk's `[start, end)` character span within `full_text`
///
/// Chunks whose content is not found verbatim get a synthetic span of the
/// content's length starting at the search cursor, and the cursor advances
/// past it. Span starts never decrease. Never fails.
pub fn locate_chunks(chunks: &[SourceChunk], full_text: &str) -> Vec<ChunkSpan> {
    // Byte offset of every char boundary, including the end of the text
    let boundaries: Vec<usize> = full_text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(full_text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    let mut spans = Vec::with_capacity(chunks.len());
    let mut cursor = 0usize;

    for chunk in chunks {
        let len = chunk.char_len();
        let found = (cursor <= char_count)
            .then(|| full_text[boundaries[cursor]..].find(&chunk.content))
            .flatten()
            .map(|relative| {
                let byte = boundaries[cursor] + relative;
                boundaries.partition_point(|&boundary| boundary < byte)
            });

        match found {
            Some(start) => {
                spans.push(ChunkSpan::new(&chunk.id, start, start + len));
                cursor = start + 1;
            }
            None => {
                spans.push(ChunkSpan::synthetic(&chunk.id, cursor, cursor + len));
                cursor += len;
            }
        }
    }

    spans
}
