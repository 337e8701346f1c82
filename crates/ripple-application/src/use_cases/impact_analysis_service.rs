//! Impact Analysis Use Case
//!
//! Runs diff, alignment and severity classification for one source update.

use crate::domain_services::{AlignerOptions, ChunkAligner, compute_text_diff, determine_severity};
use crate::ports::services::{ImpactAnalysisServiceInterface, ImpactRequest};
use async_trait::async_trait;
use ripple_domain::entities::SourceChunk;
use ripple_domain::error::Result;
use ripple_domain::ports::providers::ChunkSimilarityProvider;
use ripple_domain::value_objects::{ChunkMapping, ImpactReport};
use std::sync::Arc;
use tracing::{debug, info};

/// Impact analysis service backed by a [`ChunkAligner`]
pub struct ImpactAnalysisServiceImpl {
    aligner: ChunkAligner,
}

impl ImpactAnalysisServiceImpl {
    /// Create the service with default aligner options
    pub fn new(similarity: Arc<dyn ChunkSimilarityProvider>) -> Self {
        Self::with_options(similarity, AlignerOptions::default())
    }

    /// Create the service with explicit aligner options
    pub fn with_options(similarity: Arc<dyn ChunkSimilarityProvider>, options: AlignerOptions) -> Self {
        Self {
            aligner: ChunkAligner::with_options(similarity, options),
        }
    }
}

#[async_trait]
impl ImpactAnalysisServiceInterface for ImpactAnalysisServiceImpl {
    async fn analyze(&self, request: &ImpactRequest) -> Result<ImpactReport> {
        let regions = compute_text_diff(&request.old_text, &request.new_text);
        debug!(regions = regions.len(), "Computed text diff");

        let mappings = self
            .aligner
            .align_chunks(
                &regions,
                &request.old_chunks,
                &request.new_chunks,
                &request.old_text,
                &request.new_text,
            )
            .await?;

        let severity = determine_severity(
            request.affected_artifact_count,
            &mappings,
            request.total_evidence_chunks,
        );
        let report = ImpactReport::new(regions, mappings, severity);

        info!(
            severity = %report.severity,
            added = report.summary.added,
            removed = report.summary.removed,
            modified = report.summary.modified,
            affected_artifacts = request.affected_artifact_count,
            "Impact analysis complete"
        );
        Ok(report)
    }

    async fn align(
        &self,
        old_text: &str,
        new_text: &str,
        old_chunks: &[SourceChunk],
        new_chunks: &[SourceChunk],
    ) -> Result<Vec<ChunkMapping>> {
        let regions = compute_text_diff(old_text, new_text);
        debug!(regions = regions.len(), "Computed text diff");

        let mappings = self
            .aligner
            .align_chunks(&regions, old_chunks, new_chunks, old_text, new_text)
            .await?;
        debug!(mappings = mappings.len(), "Aligned chunks");
        Ok(mappings)
    }
}
