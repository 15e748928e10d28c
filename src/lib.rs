//! DualCare v0.1.0 - Symptom Checker
//!
//! Turns yes/no symptom answers into a predicted condition, prevention
//! tips, and a probability chart using a pre-trained classifier.
//!
//! # Architecture
//!
//! - **symptoms**: fixed-order symptom set and vector encoding
//! - **models**: `DiagnosisModel` capability and the JSON artifact loader
//! - **advisor**: prevention tips per label with fallback
//! - **presenter**: all-zero guard, orchestration, chart data, submission state
//! - **cli** / **repl**: command-line shell and interactive questionnaire

pub mod errors;
pub mod symptoms;
pub mod models;
pub mod advisor;
pub mod presenter;

// Re-export commonly used types
pub use errors::{DiagnosisError, Result};
pub use advisor::AdviceCatalog;
pub use models::{DiagnosisLabel, DiagnosisModel, LinearModel, ProbabilityDistribution};
pub use presenter::{Outcome, PredictionPresenter, PredictionReport};
pub use symptoms::{Answer, Symptom, SymptomAnswers, SymptomVector};

// Terminal shell
pub mod cli;
pub mod repl;
pub mod telemetry;
