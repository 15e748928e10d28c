//! Type definitions for diagnosis models
//!
//! The model is an opaque capability: the rest of the crate only sees
//! `DiagnosisModel`, never the artifact format behind it.

use crate::errors::Result;
use crate::symptoms::SymptomVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical model output naming a condition
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosisLabel(String);

impl DiagnosisLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DiagnosisLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for DiagnosisLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// One bar of the confidence chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelProbability {
    pub label: DiagnosisLabel,
    pub probability: f64,
}

/// Model confidence per label, in the order the model reports its classes.
///
/// Values are taken as-is from the model and are not re-normalised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityDistribution(Vec<LabelProbability>);

impl ProbabilityDistribution {
    /// Pair labels with probabilities positionally.
    ///
    /// Fails if the two sequences differ in length, which means the model
    /// broke its own contract.
    pub fn from_parallel(labels: &[DiagnosisLabel], probabilities: &[f64]) -> Result<Self> {
        if labels.len() != probabilities.len() {
            return Err(crate::errors::DiagnosisError::Prediction(format!(
                "{} labels but {} probabilities",
                labels.len(),
                probabilities.len()
            )));
        }
        Ok(Self(
            labels
                .iter()
                .cloned()
                .zip(probabilities.iter().copied())
                .map(|(label, probability)| LabelProbability { label, probability })
                .collect(),
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelProbability> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn probability_of(&self, label: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.label.as_str() == label)
            .map(|entry| entry.probability)
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|entry| entry.probability).sum()
    }
}

/// Pre-trained symptom classifier
///
/// Implementations are immutable after loading, so a single instance can be
/// shared by every submission.
pub trait DiagnosisModel: Send + Sync {
    /// Known labels in model order
    fn classes(&self) -> &[DiagnosisLabel];

    /// Most likely label; deterministic for a given artifact and vector
    fn predict(&self, vector: &SymptomVector) -> Result<DiagnosisLabel>;

    /// One probability per entry of `classes()`, same order
    fn predict_distribution(&self, vector: &SymptomVector) -> Result<ProbabilityDistribution>;
}

impl<M: DiagnosisModel + ?Sized> DiagnosisModel for Box<M> {
    fn classes(&self) -> &[DiagnosisLabel] {
        (**self).classes()
    }

    fn predict(&self, vector: &SymptomVector) -> Result<DiagnosisLabel> {
        (**self).predict(vector)
    }

    fn predict_distribution(&self, vector: &SymptomVector) -> Result<ProbabilityDistribution> {
        (**self).predict_distribution(vector)
    }
}
