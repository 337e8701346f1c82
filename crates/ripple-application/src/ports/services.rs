//! Application Service Port Interfaces
//!
//! Contracts for the services the application layer exposes to outer layers.

use async_trait::async_trait;
use ripple_domain::entities::SourceChunk;
use ripple_domain::error::Result;
use ripple_domain::value_objects::{ChunkMapping, ImpactReport};
use serde::{Deserialize, Serialize};

// ============================================================================
// Impact Analysis Service Interface
// ============================================================================

/// Everything needed to analyze one source update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRequest {
    /// Full text of the previous source version
    pub old_text: String,
    /// Full text of the new source version
    pub new_text: String,
    /// Chunks of the previous version, in document order
    pub old_chunks: Vec<SourceChunk>,
    /// Chunks of the new version, in document order
    pub new_chunks: Vec<SourceChunk>,
    /// Number of downstream artifacts linked to the changed chunks
    #[serde(default)]
    pub affected_artifact_count: usize,
    /// Total evidence chunks across affected artifacts, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_evidence_chunks: Option<usize>,
}

impl ImpactRequest {
    /// Create a request for two versions with no artifact information
    pub fn new(
        old_text: impl Into<String>,
        new_text: impl Into<String>,
        old_chunks: Vec<SourceChunk>,
        new_chunks: Vec<SourceChunk>,
    ) -> Self {
        Self {
            old_text: old_text.into(),
            new_text: new_text.into(),
            old_chunks,
            new_chunks,
            ..Default::default()
        }
    }

    /// Set the number of affected downstream artifacts
    pub fn with_affected_artifacts(mut self, count: usize) -> Self {
        self.affected_artifact_count = count;
        self
    }

    /// Set the total number of evidence chunks
    pub fn with_total_evidence_chunks(mut self, total: usize) -> Self {
        self.total_evidence_chunks = Some(total);
        self
    }
}

/// Source Change Impact Analysis
///
/// Diffs two versions of a source document, aligns their chunks and
/// classifies how severe the change is for derived artifacts.
#[async_trait]
pub trait ImpactAnalysisServiceInterface: Send + Sync {
    /// Run the full pipeline: diff, alignment and severity
    async fn analyze(&self, request: &ImpactRequest) -> Result<ImpactReport>;

    /// Diff and align only
    ///
    /// For callers that need the mappings to work out which artifacts are
    /// affected before classifying severity.
    async fn align(
        &self,
        old_text: &str,
        new_text: &str,
        old_chunks: &[SourceChunk],
        new_chunks: &[SourceChunk],
    ) -> Result<Vec<ChunkMapping>>;
}
