//! Impact report value objects

use serde::{Deserialize, Serialize};

use super::diff::{DiffKind, DiffRegion};
use super::mapping::ChunkMapping;
use super::severity::Severity;

/// Per-kind mapping counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    /// New chunks with no old counterpart
    pub added: usize,
    /// Old chunks with no new counterpart
    pub removed: usize,
    /// Old chunks matched to a new chunk
    pub modified: usize,
}

impl AlignmentSummary {
    /// Count mappings by kind
    pub fn from_mappings(mappings: &[ChunkMapping]) -> Self {
        mappings
            .iter()
            .fold(Self::default(), |mut summary, mapping| {
                match mapping.diff_type() {
                    DiffKind::Added => summary.added += 1,
                    DiffKind::Removed => summary.removed += 1,
                    DiffKind::Modified => summary.modified += 1,
                }
                summary
            })
    }

    /// Total number of mappings
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Result of analyzing one source update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    /// Coalesced diff regions between the two text versions
    pub regions: Vec<DiffRegion>,
    /// Chunk mappings: old-chunk mappings first, then unclaimed new chunks
    pub mappings: Vec<ChunkMapping>,
    /// Severity tier for downstream workflow
    pub severity: Severity,
    /// Mapping counts by kind
    pub summary: AlignmentSummary,
}

impl ImpactReport {
    /// Assemble a report, deriving the summary from the mappings
    pub fn new(regions: Vec<DiffRegion>, mappings: Vec<ChunkMapping>, severity: Severity) -> Self {
        let summary = AlignmentSummary::from_mappings(&mappings);
        Self {
            regions,
            mappings,
            severity,
            summary,
        }
    }

    /// Whether the two versions differ at all
    pub fn has_changes(&self) -> bool {
        !self.regions.is_empty()
    }
}
