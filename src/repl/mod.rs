//! Interactive questionnaire
//!
//! Walks the user through every symptom in feature order, submits the
//! answers to a `FormSession`, shows the outcome, and offers another round.

pub mod display;
pub mod input;

use anyhow::Result;

use crate::models::DiagnosisModel;
use crate::presenter::{FormSession, Outcome, PredictionPresenter};
use crate::symptoms::{Answer, Symptom, SymptomAnswers};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::{InputHandler, LineSource, ScriptedInput};

/// Invalid answers tolerated per question before it counts as skipped
const MAX_ATTEMPTS: usize = 3;

pub struct Questionnaire<'p, 'a, M: DiagnosisModel + ?Sized, S: LineSource> {
    session: FormSession<'p, 'a, M>,
    input: S,
    display: DisplayManager,
}

impl<'p, 'a, M: DiagnosisModel + ?Sized, S: LineSource> Questionnaire<'p, 'a, M, S> {
    pub fn new(presenter: &'p PredictionPresenter<'a, M>, input: S, display: DisplayManager) -> Self {
        Self {
            session: FormSession::new(presenter),
            input,
            display,
        }
    }

    /// Ask all ten questions. `Ok(None)` when input ends mid-form.
    pub fn collect_answers(&mut self) -> Result<Option<SymptomAnswers>> {
        let mut answers = SymptomAnswers::new();

        for symptom in Symptom::ALL {
            match self.ask(symptom)? {
                Some(answer) => answers.set(symptom, answer),
                None => return Ok(None),
            }
        }

        Ok(Some(answers))
    }

    fn ask(&mut self, symptom: Symptom) -> Result<Option<Answer>> {
        let prompt = display::question_prompt(symptom);

        for _ in 0..MAX_ATTEMPTS {
            let Some(line) = self.input.read_line(&prompt)? else {
                return Ok(None);
            };
            match line.parse::<Answer>() {
                Ok(answer) => return Ok(Some(answer)),
                Err(e) => self.display.show_warning(&e.to_string()),
            }
        }

        log::debug!("No valid answer for {}, leaving it unselected", symptom);
        Ok(Some(Answer::Unselected))
    }

    /// Run one round: collect, submit, show. Returns the outcome if the form
    /// was completed.
    pub fn run_once(&mut self) -> Result<Option<Outcome>> {
        let Some(answers) = self.collect_answers()? else {
            return Ok(None);
        };

        let outcome = self.session.submit(&answers)?.clone();
        self.display.show_outcome(&outcome);
        Ok(Some(outcome))
    }

    /// Keep running rounds until the user declines another check or input ends
    pub fn run(&mut self) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();

        loop {
            match self.run_once() {
                Ok(Some(outcome)) => outcomes.push(outcome),
                Ok(None) => break,
                Err(e) => {
                    // invalid answers keep the session awaiting a new round
                    self.display.show_error(&e.to_string());
                }
            }

            match self.input.read_line("Check again? [y/N]: ")? {
                Some(line) if matches!(line.parse::<Answer>(), Ok(Answer::Yes)) => continue,
                _ => break,
            }
        }

        Ok(outcomes)
    }

    pub fn session(&self) -> &FormSession<'p, 'a, M> {
        &self.session
    }

    pub fn into_input(self) -> S {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::AdviceCatalog;
    use crate::errors::Result as DiagnosisResult;
    use crate::models::{DiagnosisLabel, ProbabilityDistribution};
    use crate::presenter::SubmissionState;
    use crate::symptoms::SymptomVector;

    struct FixedModel {
        classes: Vec<DiagnosisLabel>,
    }

    impl DiagnosisModel for FixedModel {
        fn classes(&self) -> &[DiagnosisLabel] {
            &self.classes
        }

        fn predict(&self, _vector: &SymptomVector) -> DiagnosisResult<DiagnosisLabel> {
            Ok("Cold".into())
        }

        fn predict_distribution(&self, _vector: &SymptomVector) -> DiagnosisResult<ProbabilityDistribution> {
            ProbabilityDistribution::from_parallel(&self.classes, &[0.2, 0.8])
        }
    }

    fn model() -> FixedModel {
        FixedModel {
            classes: vec!["Flu".into(), "Cold".into()],
        }
    }

    fn display() -> DisplayManager {
        DisplayManager::new(20, false)
    }

    #[test]
    fn test_full_round_predicts() {
        let model = model();
        let catalog = AdviceCatalog::builtin();
        let presenter = PredictionPresenter::new(&model, &catalog);
        let input = ScriptedInput::new(["no", "yes", "", "", "", "", "", "", "", "", "n"]);

        let mut questionnaire = Questionnaire::new(&presenter, input, display());
        let outcomes = questionnaire.run().unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].report().unwrap().label.as_str(), "Cold");
        assert_eq!(questionnaire.session().state(), SubmissionState::Resolved);
    }

    #[test]
    fn test_invalid_answer_is_reasked() {
        let model = model();
        let catalog = AdviceCatalog::builtin();
        let presenter = PredictionPresenter::new(&model, &catalog);
        let mut lines = vec!["maybe", "yes"];
        lines.extend(std::iter::repeat("no").take(9));
        let input = ScriptedInput::new(lines);

        let mut questionnaire = Questionnaire::new(&presenter, input, display());
        let answers = questionnaire.collect_answers().unwrap().unwrap();
        assert_eq!(answers.get(Symptom::Fever), Answer::Yes);

        let input = questionnaire.into_input();
        assert_eq!(input.prompts()[0], input.prompts()[1]);
    }

    #[test]
    fn test_all_skipped_is_insufficient() {
        let model = model();
        let catalog = AdviceCatalog::builtin();
        let presenter = PredictionPresenter::new(&model, &catalog);
        let input = ScriptedInput::new(std::iter::repeat("skip").take(10));

        let mut questionnaire = Questionnaire::new(&presenter, input, display());
        let outcome = questionnaire.run_once().unwrap().unwrap();
        assert!(!outcome.is_prediction());
    }

    #[test]
    fn test_eof_mid_form_stops() {
        let model = model();
        let catalog = AdviceCatalog::builtin();
        let presenter = PredictionPresenter::new(&model, &catalog);
        let input = ScriptedInput::new(["yes", "no"]);

        let mut questionnaire = Questionnaire::new(&presenter, input, display());
        assert!(questionnaire.run().unwrap().is_empty());
        assert_eq!(questionnaire.session().state(), SubmissionState::AwaitingSubmission);
    }

    #[test]
    fn test_second_round() {
        let model = model();
        let catalog = AdviceCatalog::builtin();
        let presenter = PredictionPresenter::new(&model, &catalog);
        let mut lines: Vec<&str> = std::iter::repeat("no").take(10).collect();
        lines.push("y");
        lines.push("yes");
        lines.extend(std::iter::repeat("no").take(9));
        lines.push("n");

        let mut questionnaire = Questionnaire::new(&presenter, ScriptedInput::new(lines), display());
        let outcomes = questionnaire.run().unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_prediction());
        assert!(outcomes[1].is_prediction());
    }
}
