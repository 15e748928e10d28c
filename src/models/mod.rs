//! Diagnosis model module
//!
//! - `types`: labels, distributions and the `DiagnosisModel` capability
//! - `linear`: the JSON softmax artifact shipped with the checker

pub mod linear;
pub mod types;

// Re-export key types for convenience
pub use linear::{LinearArtifact, LinearModel, ARTIFACT_FORMAT};
pub use types::{DiagnosisLabel, DiagnosisModel, LabelProbability, ProbabilityDistribution};
