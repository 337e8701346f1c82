//! Use Cases
//!
//! Service implementations composing the domain services.

/// Impact analysis use case
pub mod impact_analysis_service;

pub use impact_analysis_service::ImpactAnalysisServiceImpl;
