//! Chunk alignment
//!
//! Decides, for every old chunk touched by a change, which new chunk it
//! became. Matching is two-tier:
//!
//! 1. **Textual overlap** against every new chunk. The metric is a coarse
//!    character-presence ratio (see [`textual_overlap`]); the matching and
//!    severity thresholds were tuned against it, so it must stay as is.
//! 2. **Vector similarity** through a [`ChunkSimilarityProvider`], only when
//!    the best textual score is below [`TEXTUAL_MATCH_THRESHOLD`]. Lookups fan
//!    out concurrently, each bounded by a timeout, and any failure degrades to
//!    the textual result.
//!
//! New chunks never claimed by a match are reported as added.

use futures::StreamExt;
use futures::stream;
use ripple_domain::constants::TEXTUAL_MATCH_THRESHOLD;
use ripple_domain::entities::SourceChunk;
use ripple_domain::error::{Error, Result};
use ripple_domain::ports::providers::ChunkSimilarityProvider;
use ripple_domain::value_objects::{ChunkMapping, ChunkSpan, DiffRegion, SimilarityMatch};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::chunk_locator::locate_chunks;
use super::text_diff::insertion_points;

/// Default bound on a single similarity lookup
pub const DEFAULT_SIMILARITY_TIMEOUT: Duration = Duration::from_secs(2);

/// Default number of similarity lookups in flight at once
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Tuning knobs for the similarity fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignerOptions {
    /// Upper bound on a single similarity lookup
    pub similarity_timeout: Duration,
    /// Maximum number of lookups in flight at once
    pub max_concurrent_lookups: usize,
}

impl Default for AlignerOptions {
    fn default() -> Self {
        Self {
            similarity_timeout: DEFAULT_SIMILARITY_TIMEOUT,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }
}

/// Best textual candidate for one affected old chunk
struct TextualMatch {
    old_index: usize,
    best: Option<usize>,
    score: f32,
}

/// Aligns old chunks to new chunks across a source update
pub struct ChunkAligner {
    similarity: Arc<dyn ChunkSimilarityProvider>,
    options: AlignerOptions,
}

impl ChunkAligner {
    /// Create an aligner with default options
    pub fn new(similarity: Arc<dyn ChunkSimilarityProvider>) -> Self {
        Self::with_options(similarity, AlignerOptions::default())
    }

    /// Create an aligner with explicit options
    pub fn with_options(similarity: Arc<dyn ChunkSimilarityProvider>, options: AlignerOptions) -> Self {
        Self {
            similarity,
            options,
        }
    }

    /// Options in effect
    pub fn options(&self) -> AlignerOptions {
        self.options
    }

    /// Map affected old chunks to new chunks and report unclaimed new chunks
    ///
    /// Output order: one mapping per affected old chunk in ascending old index,
    /// followed by one `Added` mapping per unclaimed new chunk in new order.
    ///
    /// Fails only on structurally invalid input (duplicate chunk ids).
    pub async fn align_chunks(
        &self,
        regions: &[DiffRegion],
        old_chunks: &[SourceChunk],
        new_chunks: &[SourceChunk],
        old_text: &str,
        new_text: &str,
    ) -> Result<Vec<ChunkMapping>> {
        ensure_unique_ids(old_chunks, "old")?;
        ensure_unique_ids(new_chunks, "new")?;

        let old_spans = locate_chunks(old_chunks, old_text);
        let new_spans = locate_chunks(new_chunks, new_text);
        log_synthetic_spans(&old_spans, "old");
        log_synthetic_spans(&new_spans, "new");

        let affected = affected_old_chunks(regions, &old_spans);
        debug!(
            regions = regions.len(),
            affected = affected.len(),
            "Resolved affected old chunks"
        );

        let textual: Vec<TextualMatch> = affected
            .iter()
            .map(|&old_index| best_textual_match(old_index, &old_chunks[old_index], new_chunks))
            .collect();

        let fallbacks = self.similarity_fallbacks(&textual, old_chunks, new_chunks).await;
        let new_index_by_id: HashMap<&str, usize> = new_chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| (chunk.id.as_str(), i))
            .collect();

        let mut claimed = vec![false; new_chunks.len()];
        let mut mappings = Vec::with_capacity(textual.len() + new_chunks.len());

        for (candidate, fallback) in textual.iter().zip(fallbacks) {
            let old_id = &old_chunks[candidate.old_index].id;
            let mut best = candidate.best;
            let mut similarity_score = None;

            if let Some(found) = fallback {
                match new_index_by_id.get(found.chunk_id.as_str()) {
                    Some(&index) if found.score > candidate.score => {
                        best = Some(index);
                        similarity_score = Some(found.score);
                    }
                    Some(_) => {}
                    None => warn!(
                        chunk_id = %old_id,
                        returned = %found.chunk_id,
                        "Similarity provider returned a chunk outside the candidate set"
                    ),
                }
            }

            match best {
                Some(index) => {
                    claimed[index] = true;
                    mappings.push(ChunkMapping::modified(
                        old_id,
                        &new_chunks[index].id,
                        similarity_score,
                    ));
                }
                None => mappings.push(ChunkMapping::removed(old_id)),
            }
        }

        mappings.extend(
            new_chunks
                .iter()
                .zip(&claimed)
                .filter(|(_, claimed)| !**claimed)
                .map(|(chunk, _)| ChunkMapping::added(&chunk.id)),
        );

        Ok(mappings)
    }

    /// Run similarity lookups for weak textual matches, indexed like `textual`
    async fn similarity_fallbacks(
        &self,
        textual: &[TextualMatch],
        old_chunks: &[SourceChunk],
        new_chunks: &[SourceChunk],
    ) -> Vec<Option<SimilarityMatch>> {
        let mut results = vec![None; textual.len()];
        let pending: Vec<usize> = textual
            .iter()
            .enumerate()
            .filter(|(_, candidate)| {
                candidate.score < TEXTUAL_MATCH_THRESHOLD
                    && !old_chunks[candidate.old_index].is_empty()
            })
            .map(|(position, _)| position)
            .collect();

        if pending.is_empty() {
            return results;
        }

        let candidate_ids: Vec<String> = new_chunks.iter().map(|chunk| chunk.id.clone()).collect();
        debug!(
            lookups = pending.len(),
            candidates = candidate_ids.len(),
            provider = self.similarity.provider_name(),
            "Falling back to vector similarity"
        );

        let completed: Vec<(usize, Option<SimilarityMatch>)> = stream::iter(pending)
            .map(|position| {
                let chunk_id = old_chunks[textual[position].old_index].id.as_str();
                let candidate_ids = candidate_ids.as_slice();
                async move { (position, self.lookup(chunk_id, candidate_ids).await) }
            })
            .buffer_unordered(self.options.max_concurrent_lookups.max(1))
            .collect()
            .await;

        for (position, found) in completed {
            results[position] = found;
        }
        results
    }

    /// One bounded similarity lookup; every failure becomes `None`
    async fn lookup(&self, chunk_id: &str, candidate_ids: &[String]) -> Option<SimilarityMatch> {
        let timeout = self.options.similarity_timeout;
        match tokio::time::timeout(
            timeout,
            self.similarity.find_most_similar(chunk_id, candidate_ids),
        )
        .await
        {
            Ok(Ok(found)) => {
                if found.is_none() {
                    debug!(chunk_id, "Similarity lookup returned no match");
                }
                found
            }
            // Unindexed chunks are expected when no embeddings were seeded
            Ok(Err(e @ Error::NotFound { .. })) => {
                debug!(chunk_id, error = %e, "No stored embedding, keeping textual match");
                None
            }
            Ok(Err(e)) => {
                warn!(chunk_id, error = %e, "Similarity lookup failed, keeping textual match");
                None
            }
            Err(_) => {
                let e = Error::timeout(
                    format!("similarity lookup for chunk {chunk_id}"),
                    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                );
                warn!(chunk_id, error = %e, "Similarity lookup timed out, keeping textual match");
                None
            }
        }
    }
}

/// Character-presence overlap between two strings
///
/// Counts the characters of the shorter string whose value occurs anywhere
/// in the longer one, divided by the shorter length. Order and frequency are
/// ignored. Either string empty scores 0.
pub fn textual_overlap(a: &str, b: &str) -> f32 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer, min_len) = if a_len <= b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };
    if min_len == 0 {
        return 0.0;
    }

    let present: HashSet<char> = longer.chars().collect();
    let matches = shorter.chars().filter(|c| present.contains(c)).count();
    matches as f32 / min_len as f32
}

/// Highest-scoring new chunk; a candidate must beat the previous best strictly
fn best_textual_match(old_index: usize, old_chunk: &SourceChunk, new_chunks: &[SourceChunk]) -> TextualMatch {
    let mut best = None;
    let mut score = 0.0f32;
    for (index, new_chunk) in new_chunks.iter().enumerate() {
        let candidate = textual_overlap(&old_chunk.content, &new_chunk.content);
        if candidate > score {
            best = Some(index);
            score = candidate;
        }
    }
    TextualMatch {
        old_index,
        best,
        score,
    }
}

/// Old chunk indices touched by the diff
///
/// A chunk is affected when its span overlaps a removed or modified region,
/// or when an added region was inserted strictly inside it.
fn affected_old_chunks(regions: &[DiffRegion], old_spans: &[ChunkSpan]) -> BTreeSet<usize> {
    let mut affected = BTreeSet::new();

    for region in regions.iter().filter(|region| region.touches_old_text()) {
        for (index, span) in old_spans.iter().enumerate() {
            if span.overlap(region.start_offset, region.end_offset) > 0 {
                affected.insert(index);
            }
        }
    }

    for point in insertion_points(regions) {
        for (index, span) in old_spans.iter().enumerate() {
            if span.strictly_contains(point) {
                affected.insert(index);
            }
        }
    }

    affected
}

fn ensure_unique_ids(chunks: &[SourceChunk], side: &str) -> Result<()> {
    let mut seen = HashSet::with_capacity(chunks.len());
    for chunk in chunks {
        if !seen.insert(chunk.id.as_str()) {
            return Err(Error::invalid_argument(format!(
                "duplicate chunk id '{}' in {side} chunk list",
                chunk.id
            )));
        }
    }
    Ok(())
}

fn log_synthetic_spans(spans: &[ChunkSpan], side: &str) {
    let synthetic = spans.iter().filter(|span| span.synthetic).count();
    if synthetic > 0 {
        warn!(
            side,
            synthetic,
            total = spans.len(),
            "Chunks not found verbatim in source text; using synthetic spans"
        );
    }
}
