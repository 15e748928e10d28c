//! Prediction presenter
//!
//! Orchestrates one submission: answers → vector → all-zero guard →
//! model → advice lookup. The model and catalog are borrowed so that a
//! single loaded instance serves every submission.

pub mod chart;
pub mod state;

pub use chart::{ChartBar, ChartData};
pub use state::{SubmissionEvent, SubmissionState};

use crate::advisor::AdviceCatalog;
use crate::errors::{DiagnosisError, Result};
use crate::models::{DiagnosisLabel, DiagnosisModel, ProbabilityDistribution};
use crate::symptoms::{SymptomAnswers, SymptomVector};
use serde::Serialize;

/// Shown when every symptom is No or unanswered
pub const NO_SYMPTOMS_WARNING: &str =
    "You have selected 'No' for all symptoms. It's unlikely that you are ill.";
pub const NO_SYMPTOMS_HINT: &str =
    "Please select at least one symptom to get a meaningful prediction.";

/// Everything the UI needs to show a diagnosis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub label: DiagnosisLabel,
    pub advice: String,
    pub distribution: ProbabilityDistribution,
}

impl PredictionReport {
    pub fn chart(&self) -> ChartData {
        ChartData::from_distribution(&self.distribution)
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Prediction(PredictionReport),
    InsufficientInput { warning: String, hint: String },
}

impl Outcome {
    fn insufficient_input() -> Self {
        Outcome::InsufficientInput {
            warning: NO_SYMPTOMS_WARNING.to_string(),
            hint: NO_SYMPTOMS_HINT.to_string(),
        }
    }

    pub fn is_prediction(&self) -> bool {
        matches!(self, Outcome::Prediction(_))
    }

    pub fn report(&self) -> Option<&PredictionReport> {
        match self {
            Outcome::Prediction(report) => Some(report),
            Outcome::InsufficientInput { .. } => None,
        }
    }
}

/// Turns answers into outcomes using an injected model and catalog
pub struct PredictionPresenter<'a, M: DiagnosisModel + ?Sized> {
    model: &'a M,
    catalog: &'a AdviceCatalog,
    strict: bool,
}

impl<'a, M: DiagnosisModel + ?Sized> PredictionPresenter<'a, M> {
    pub fn new(model: &'a M, catalog: &'a AdviceCatalog) -> Self {
        Self {
            model,
            catalog,
            strict: false,
        }
    }

    /// Reject submissions that leave any symptom unanswered
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn model(&self) -> &M {
        self.model
    }

    pub fn catalog(&self) -> &AdviceCatalog {
        self.catalog
    }

    /// Resolve one submission. Model errors propagate unchanged.
    pub fn present(&self, answers: &SymptomAnswers) -> Result<Outcome> {
        if self.strict {
            let missing = answers.unanswered();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|s| s.name()).collect();
                return Err(DiagnosisError::InvalidInput(format!(
                    "Unanswered symptoms: {}",
                    names.join(", ")
                )));
            }
        }

        let vector = SymptomVector::from_answers(answers);
        self.present_vector(&vector)
    }

    /// Resolve an already-encoded vector
    pub fn present_vector(&self, vector: &SymptomVector) -> Result<Outcome> {
        if vector.is_all_zero() {
            log::debug!("All-zero symptom vector, skipping prediction");
            return Ok(Outcome::insufficient_input());
        }

        let label = self.model.predict(vector)?;
        let distribution = self.model.predict_distribution(vector)?;
        log::debug!("Vector {:?} predicted as {}", vector.as_slice(), label);

        let advice = self.catalog.lookup(&label).to_string();
        Ok(Outcome::Prediction(PredictionReport {
            label,
            advice,
            distribution,
        }))
    }
}

/// One form on screen: tracks submission state and the last outcome
pub struct FormSession<'p, 'a, M: DiagnosisModel + ?Sized> {
    presenter: &'p PredictionPresenter<'a, M>,
    state: SubmissionState,
    outcome: Option<Outcome>,
}

impl<'p, 'a, M: DiagnosisModel + ?Sized> FormSession<'p, 'a, M> {
    pub fn new(presenter: &'p PredictionPresenter<'a, M>) -> Self {
        Self {
            presenter,
            state: SubmissionState::AwaitingSubmission,
            outcome: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Submit answers. A new submission discards the previous outcome first;
    /// on error the session is left awaiting a submission.
    pub fn submit(&mut self, answers: &SymptomAnswers) -> Result<&Outcome> {
        if self.state.is_terminal() {
            self.reset()?;
        }

        let outcome = self.presenter.present(answers)?;
        self.state = self.state.transition(SubmissionEvent::Submit)?;
        Ok(self.outcome.insert(outcome))
    }

    pub fn reset(&mut self) -> Result<()> {
        self.state = self.state.transition(SubmissionEvent::Reset)?;
        self.outcome = None;
        Ok(())
    }
}
