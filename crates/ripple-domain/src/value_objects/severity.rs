//! Severity classification

use serde::{Deserialize, Serialize};

/// How disruptive a source change is to already-generated requirements content
///
/// Ordered from least to most disruptive, so `max` picks the worse tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Safe to flag silently
    Minor,
    /// Warrants a warning
    Moderate,
    /// Blocks until a change request is raised
    Major,
}

impl Severity {
    /// Lowercase name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Major => "major",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
