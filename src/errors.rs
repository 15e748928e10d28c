//! Error types for DualCare
//!
//! One error enum for the whole library. The binary wraps it with
//! `anyhow` context at the top level.

use thiserror::Error;

/// Main error type for the symptom checker
#[derive(Error, Debug)]
pub enum DiagnosisError {
    /// Model artifact could not be read or decoded
    #[error("Failed to load model from {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    /// Model artifact decoded but its shape is inconsistent
    #[error("Malformed model artifact: {0}")]
    ModelShape(String),

    /// Model rejected an input at prediction time
    #[error("Prediction failed: {0}")]
    Prediction(String),

    /// Advice catalog file errors
    #[error("Advice catalog error: {0}")]
    AdviceError(String),

    /// Bad symptom names or answer values
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Submission state machine misuse
    #[error("Invalid state transition from {from} on {event}")]
    InvalidTransition { from: String, event: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for symptom checker operations
pub type Result<T> = std::result::Result<T, DiagnosisError>;

impl From<anyhow::Error> for DiagnosisError {
    fn from(err: anyhow::Error) -> Self {
        DiagnosisError::Generic(err.to_string())
    }
}
