//! Submission state machine
//!
//! Two states per submission:
//! - `AwaitingSubmission`: form shown, nothing resolved yet
//! - `Resolved`: an outcome exists (terminal until reset)
//!
//! Valid transitions:
//! 1. AwaitingSubmission → Resolved           (on: Submit)
//! 2. Resolved           → AwaitingSubmission (on: Reset)
//!
//! A resolved form must be reset before the next submission.

use crate::errors::{DiagnosisError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    AwaitingSubmission,
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Answers submitted and an outcome produced
    Submit,
    /// Outcome cleared, form ready again
    Reset,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Resolved)
    }

    pub fn transition(&self, event: SubmissionEvent) -> Result<SubmissionState> {
        use SubmissionEvent::*;
        use SubmissionState::*;

        match (self, event) {
            (AwaitingSubmission, Submit) => Ok(Resolved),
            (Resolved, Reset) => Ok(AwaitingSubmission),
            (from, event) => Err(DiagnosisError::InvalidTransition {
                from: format!("{:?}", from),
                event: format!("{:?}", event),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_resolves() {
        let state = SubmissionState::AwaitingSubmission;
        assert_eq!(state.transition(SubmissionEvent::Submit).unwrap(), SubmissionState::Resolved);
    }

    #[test]
    fn test_submit_while_resolved_is_invalid() {
        let err = SubmissionState::Resolved
            .transition(SubmissionEvent::Submit)
            .unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidTransition { .. }));
    }

    #[test]
    fn test_reset_from_resolved() {
        let state = SubmissionState::Resolved;
        assert_eq!(
            state.transition(SubmissionEvent::Reset).unwrap(),
            SubmissionState::AwaitingSubmission
        );
    }

    #[test]
    fn test_reset_while_awaiting_is_invalid() {
        let err = SubmissionState::AwaitingSubmission
            .transition(SubmissionEvent::Reset)
            .unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidTransition { .. }));
    }

    #[test]
    fn test_terminal() {
        assert!(SubmissionState::Resolved.is_terminal());
        assert!(!SubmissionState::default().is_terminal());
    }
}
