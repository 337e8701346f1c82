//! Character-level text differencing
//!
//! Runs a Myers edit script over the characters of two text versions and
//! reduces it to coalesced [`DiffRegion`]s. Offsets count characters, not
//! bytes. `Added` regions point into the new text; `Removed` and `Modified`
//! regions point into the old text.

use ripple_domain::value_objects::{DiffKind, DiffRegion};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Run of consecutive same-tag changes being accumulated
struct PendingRun {
    kind: DiffKind,
    start: usize,
    text: String,
}

impl PendingRun {
    fn into_region(self) -> DiffRegion {
        let end = self.start + self.text.chars().count();
        match self.kind {
            DiffKind::Added => DiffRegion::added(self.start, end, self.text),
            _ => DiffRegion::removed(self.start, end, self.text),
        }
    }
}

/// Compute the coalesced change regions between two text versions
///
/// Identical inputs produce no regions. An empty side produces a single
/// region spanning the other side. A removed run directly followed by an
/// added run whose start offset equals the removed run's end offset is
/// merged into one `Modified` region. The offsets are compared numerically
/// even though they belong to different texts.
pub fn compute_text_diff(old_text: &str, new_text: &str) -> Vec<DiffRegion> {
    if old_text == new_text {
        return Vec::new();
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(old_text, new_text);

    let mut regions = Vec::new();
    let mut pending: Option<PendingRun> = None;
    let mut old_offset = 0usize;
    let mut new_offset = 0usize;

    for change in diff.iter_all_changes() {
        let value = change.value();
        let width = value.chars().count();
        let kind = match change.tag() {
            ChangeTag::Equal => {
                if let Some(run) = pending.take() {
                    regions.push(run.into_region());
                }
                old_offset += width;
                new_offset += width;
                continue;
            }
            ChangeTag::Delete => DiffKind::Removed,
            ChangeTag::Insert => DiffKind::Added,
        };

        match pending.as_mut() {
            Some(run) if run.kind == kind => run.text.push_str(value),
            _ => {
                if let Some(run) = pending.take() {
                    regions.push(run.into_region());
                }
                let start = if kind == DiffKind::Added {
                    new_offset
                } else {
                    old_offset
                };
                pending = Some(PendingRun {
                    kind,
                    start,
                    text: value.to_string(),
                });
            }
        }

        if kind == DiffKind::Added {
            new_offset += width;
        } else {
            old_offset += width;
        }
    }

    if let Some(run) = pending.take() {
        regions.push(run.into_region());
    }

    merge_replacements(regions)
}

/// Merge `Removed` + adjacent `Added` pairs into `Modified` regions
fn merge_replacements(regions: Vec<DiffRegion>) -> Vec<DiffRegion> {
    let mut merged = Vec::with_capacity(regions.len());
    let mut iter = regions.into_iter().peekable();

    while let Some(region) = iter.next() {
        let replaces = region.kind == DiffKind::Removed
            && iter
                .peek()
                .is_some_and(|next| next.kind == DiffKind::Added && next.start_offset == region.end_offset);

        match iter.next_if(|_| replaces) {
            Some(added) => merged.push(DiffRegion::modified(region, added)),
            None => merged.push(region),
        }
    }

    merged
}

/// Old-text positions at which each `Added` region was inserted
///
/// Walks the regions in order, tracking how far the new text has drifted from
/// the old one, and returns one zero-width insertion point per `Added` region.
pub fn insertion_points(regions: &[DiffRegion]) -> Vec<usize> {
    let mut points = Vec::new();
    let mut old_cursor = 0usize;
    let mut new_cursor = 0usize;

    for region in regions {
        match region.kind {
            DiffKind::Added => {
                old_cursor += region.start_offset.saturating_sub(new_cursor);
                new_cursor = region.end_offset;
                points.push(old_cursor);
            }
            DiffKind::Removed | DiffKind::Modified => {
                new_cursor += region.start_offset.saturating_sub(old_cursor);
                old_cursor = region.end_offset;
                if let Some(replacement) = &region.replacement {
                    old_cursor += replacement.start_offset.saturating_sub(new_cursor);
                    new_cursor = replacement.end_offset;
                }
            }
        }
    }

    points
}

/// Cursor pair walking the old text while the new text is rebuilt
struct Replay {
    old: Vec<char>,
    output: String,
    old_cursor: usize,
    new_cursor: usize,
}

impl Replay {
    /// Copy unchanged old text up to `start`, then skip the old text up to `end`
    fn remove(&mut self, start: usize, end: usize) {
        let start = start.clamp(self.old_cursor, self.old.len());
        let end = end.clamp(start, self.old.len());
        self.output.extend(&self.old[self.old_cursor..start]);
        self.new_cursor += start - self.old_cursor;
        self.old_cursor = end;
    }

    /// Copy unchanged old text until the new text reaches `start`, then insert
    fn insert(&mut self, start: usize, end: usize, text: &str) {
        let gap = start.saturating_sub(self.new_cursor);
        let until = (self.old_cursor + gap).min(self.old.len());
        self.output.extend(&self.old[self.old_cursor..until]);
        self.output.push_str(text);
        self.old_cursor = until;
        self.new_cursor = end;
    }

    fn finish(mut self) -> String {
        self.output.extend(&self.old[self.old_cursor..]);
        self.output
    }
}

/// Replay a region list against the old text, producing the new text
///
/// Inserted text is placed at its own new-text offset, so a `Modified` region
/// whose halves were merged on numeric adjacency alone still replays exactly.
pub fn apply_text_diff(old_text: &str, regions: &[DiffRegion]) -> String {
    let mut replay = Replay {
        old: old_text.chars().collect(),
        output: String::with_capacity(old_text.len()),
        old_cursor: 0,
        new_cursor: 0,
    };

    for region in regions {
        match region.kind {
            DiffKind::Added => replay.insert(region.start_offset, region.end_offset, &region.text),
            DiffKind::Removed | DiffKind::Modified => {
                replay.remove(region.start_offset, region.end_offset);
                if let Some(replacement) = &region.replacement {
                    replay.insert(
                        replacement.start_offset,
                        replacement.end_offset,
                        &replacement.text,
                    );
                }
            }
        }
    }

    replay.finish()
}
