//! Multinomial logistic model loaded from a JSON artifact
//!
//! Artifact layout:
//!
//! ```json
//! {
//!   "format": "dualcare-linear/1",
//!   "features": ["Fever", "Cough", ...],
//!   "classes": ["Cold", "Flu", ...],
//!   "coefficients": [[...10 weights...], ...],
//!   "intercepts": [...]
//! }
//! ```
//!
//! One coefficient row and one intercept per class. Feature names must match
//! the canonical symptom order exactly.

use crate::errors::{DiagnosisError, Result};
use crate::models::types::{DiagnosisLabel, DiagnosisModel, ProbabilityDistribution};
use crate::symptoms::{Symptom, SymptomVector, SYMPTOM_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Format tag accepted by the loader
pub const ARTIFACT_FORMAT: &str = "dualcare-linear/1";

/// Serialized form of the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    pub format: String,
    pub features: Vec<String>,
    pub classes: Vec<String>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

/// Validated softmax classifier
#[derive(Debug, Clone)]
pub struct LinearModel {
    classes: Vec<DiagnosisLabel>,
    coefficients: Vec<[f64; SYMPTOM_COUNT]>,
    intercepts: Vec<f64>,
}

impl LinearModel {
    /// Load and validate an artifact from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_err = |reason: String| DiagnosisError::ModelLoad {
            path: path.display().to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let artifact: LinearArtifact =
            serde_json::from_str(&contents).map_err(|e| load_err(e.to_string()))?;

        let model = Self::from_artifact(artifact)?;
        log::info!(
            "Loaded model from {} with {} classes",
            path.display(),
            model.classes.len()
        );
        Ok(model)
    }

    /// Validate a decoded artifact
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self> {
        if artifact.format != ARTIFACT_FORMAT {
            return Err(DiagnosisError::ModelShape(format!(
                "Unsupported format '{}', expected '{}'",
                artifact.format, ARTIFACT_FORMAT
            )));
        }

        let expected: Vec<&str> = Symptom::ALL.iter().map(|s| s.name()).collect();
        if artifact.features.iter().map(String::as_str).ne(expected.iter().copied()) {
            return Err(DiagnosisError::ModelShape(format!(
                "Feature order {:?} does not match {:?}",
                artifact.features, expected
            )));
        }

        if artifact.classes.is_empty() {
            return Err(DiagnosisError::ModelShape("Model has no classes".to_string()));
        }

        {
            let mut seen = HashSet::new();
            if let Some(dup) = artifact.classes.iter().find(|c| !seen.insert(c.as_str())) {
                return Err(DiagnosisError::ModelShape(format!("Duplicate class '{}'", dup)));
            }
        }

        let n_classes = artifact.classes.len();
        if artifact.coefficients.len() != n_classes || artifact.intercepts.len() != n_classes {
            return Err(DiagnosisError::ModelShape(format!(
                "{} classes but {} coefficient rows and {} intercepts",
                n_classes,
                artifact.coefficients.len(),
                artifact.intercepts.len()
            )));
        }

        let coefficients = artifact
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, row)| {
                <[f64; SYMPTOM_COUNT]>::try_from(row.as_slice()).map_err(|_| {
                    DiagnosisError::ModelShape(format!(
                        "Coefficient row {} has {} weights, expected {}",
                        i,
                        row.len(),
                        SYMPTOM_COUNT
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if coefficients.iter().flatten().chain(&artifact.intercepts).any(|w| !w.is_finite()) {
            return Err(DiagnosisError::ModelShape("Non-finite weight".to_string()));
        }

        // worst-case score magnitude for any 0/1 input must stay finite
        if let Some(row) = coefficients
            .iter()
            .zip(&artifact.intercepts)
            .position(|(row, bias)| !(bias.abs() + row.iter().map(|w| w.abs()).sum::<f64>()).is_finite())
        {
            return Err(DiagnosisError::ModelShape(format!(
                "Weights for class '{}' overflow when summed",
                artifact.classes[row]
            )));
        }

        Ok(Self {
            classes: artifact.classes.into_iter().map(DiagnosisLabel::from).collect(),
            coefficients,
            intercepts: artifact.intercepts,
        })
    }

    /// Raw per-class scores before softmax
    fn scores(&self, vector: &SymptomVector) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, bias)| bias + row.iter().zip(vector.features()).map(|(w, x)| w * x).sum::<f64>())
            .collect()
    }

    fn softmax(scores: &[f64]) -> Vec<f64> {
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }
}

impl DiagnosisModel for LinearModel {
    fn classes(&self) -> &[DiagnosisLabel] {
        &self.classes
    }

    fn predict(&self, vector: &SymptomVector) -> Result<DiagnosisLabel> {
        let scores = self.scores(vector);
        // first maximum wins on ties
        let best = scores
            .iter()
            .enumerate()
            .fold(0, |best, (i, s)| if *s > scores[best] { i } else { best });
        Ok(self.classes[best].clone())
    }

    fn predict_distribution(&self, vector: &SymptomVector) -> Result<ProbabilityDistribution> {
        let probabilities = Self::softmax(&self.scores(vector));
        ProbabilityDistribution::from_parallel(&self.classes, &probabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn features() -> Vec<String> {
        Symptom::ALL.iter().map(|s| s.name().to_string()).collect()
    }

    fn artifact() -> LinearArtifact {
        let mut flu = vec![0.0; SYMPTOM_COUNT];
        flu[Symptom::Fever.index()] = 2.0;
        let mut cold = vec![0.0; SYMPTOM_COUNT];
        cold[Symptom::Cough.index()] = 2.0;
        LinearArtifact {
            format: ARTIFACT_FORMAT.to_string(),
            features: features(),
            classes: vec!["Flu".to_string(), "Cold".to_string()],
            coefficients: vec![flu, cold],
            intercepts: vec![0.0, 0.0],
        }
    }

    #[test]
    fn test_predict_follows_weights() {
        let model = LinearModel::from_artifact(artifact()).unwrap();
        let mut bits = [0u8; SYMPTOM_COUNT];
        bits[Symptom::Cough.index()] = 1;
        let vector = SymptomVector::from_bits(bits);
        assert_eq!(model.predict(&vector).unwrap().as_str(), "Cold");
    }

    #[test]
    fn test_distribution_sums_to_one_and_agrees_with_predict() {
        let model = LinearModel::from_artifact(artifact()).unwrap();
        let mut bits = [0u8; SYMPTOM_COUNT];
        bits[Symptom::Fever.index()] = 1;
        let vector = SymptomVector::from_bits(bits);

        let dist = model.predict_distribution(&vector).unwrap();
        assert!((dist.total() - 1.0).abs() < 1e-9);
        assert_eq!(dist.iter().next().unwrap().label.as_str(), "Flu");

        let best = dist
            .iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
            .unwrap();
        assert_eq!(best.label, model.predict(&vector).unwrap());
    }

    #[test]
    fn test_tie_picks_first_class() {
        let model = LinearModel::from_artifact(artifact()).unwrap();
        let vector = SymptomVector::from_bits([0; SYMPTOM_COUNT]);
        assert_eq!(model.predict(&vector).unwrap().as_str(), "Flu");
    }

    #[test]
    fn test_rejects_wrong_format() {
        let mut a = artifact();
        a.format = "pickle".to_string();
        assert!(matches!(LinearModel::from_artifact(a), Err(DiagnosisError::ModelShape(_))));
    }

    #[test]
    fn test_rejects_reordered_features() {
        let mut a = artifact();
        a.features.swap(0, 1);
        assert!(LinearModel::from_artifact(a).is_err());
    }

    #[test]
    fn test_rejects_shape_mismatch() {
        let mut a = artifact();
        a.intercepts.pop();
        assert!(LinearModel::from_artifact(a).is_err());

        let mut a = artifact();
        a.coefficients[1].pop();
        assert!(LinearModel::from_artifact(a).is_err());
    }

    #[test]
    fn test_rejects_weights_that_overflow_when_summed() {
        let mut a = artifact();
        a.coefficients = vec![vec![1e308; SYMPTOM_COUNT], vec![1e308; SYMPTOM_COUNT]];
        let err = LinearModel::from_artifact(a).unwrap_err();
        assert!(matches!(err, DiagnosisError::ModelShape(ref m) if m.contains("Flu")));

        let mut a = artifact();
        a.intercepts[1] = f64::MAX;
        a.coefficients[1][0] = f64::MAX;
        assert!(matches!(LinearModel::from_artifact(a), Err(DiagnosisError::ModelShape(_))));
    }

    #[test]
    fn test_large_finite_weights_give_finite_distribution() {
        let mut a = artifact();
        a.coefficients = vec![vec![1e300; SYMPTOM_COUNT], vec![-1e300; SYMPTOM_COUNT]];
        let model = LinearModel::from_artifact(a).unwrap();
        let vector = SymptomVector::from_bits([1; SYMPTOM_COUNT]);

        let dist = model.predict_distribution(&vector).unwrap();
        assert!(dist.iter().all(|e| e.probability.is_finite()));
        assert_eq!(model.predict(&vector).unwrap().as_str(), "Flu");
    }

    #[test]
    fn test_rejects_duplicate_and_empty_classes() {
        let mut a = artifact();
        a.classes = vec!["Flu".to_string(), "Flu".to_string()];
        assert!(LinearModel::from_artifact(a).is_err());

        let mut a = artifact();
        a.classes.clear();
        a.coefficients.clear();
        a.intercepts.clear();
        assert!(LinearModel::from_artifact(a).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&artifact()).unwrap()).unwrap();
        let model = LinearModel::load(file.path()).unwrap();
        assert_eq!(model.classes().len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_model_load_error() {
        let err = LinearModel::load("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, DiagnosisError::ModelLoad { .. }));
    }

    #[test]
    fn test_load_garbage_is_model_load_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            LinearModel::load(file.path()),
            Err(DiagnosisError::ModelLoad { .. })
        ));
    }
}
