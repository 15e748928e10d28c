//! Answer collection and the fixed-order input vector

use super::{Answer, Symptom};
use crate::errors::{DiagnosisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of features every model artifact must accept
pub const SYMPTOM_COUNT: usize = 10;

/// Answers for one submission. Symptoms never set read as `Unselected`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomAnswers {
    answers: BTreeMap<Symptom, Answer>,
}

impl SymptomAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every symptom answered Yes
    pub fn all_yes() -> Self {
        Symptom::ALL
            .iter()
            .fold(Self::new(), |answers, s| answers.with(*s, Answer::Yes))
    }

    /// Builder-style setter
    pub fn with(mut self, symptom: Symptom, answer: Answer) -> Self {
        self.set(symptom, answer);
        self
    }

    pub fn set(&mut self, symptom: Symptom, answer: Answer) {
        self.answers.insert(symptom, answer);
    }

    /// Set an answer, rejecting a second, different answer for the same symptom
    pub fn set_once(&mut self, symptom: Symptom, answer: Answer) -> Result<()> {
        match self.answers.get(&symptom) {
            Some(existing) if *existing != answer => {
                Err(DiagnosisError::InvalidInput(format!(
                    "Conflicting answers for {}: {} and {}",
                    symptom, existing, answer
                )))
            }
            _ => {
                self.answers.insert(symptom, answer);
                Ok(())
            }
        }
    }

    pub fn get(&self, symptom: Symptom) -> Answer {
        self.answers.get(&symptom).copied().unwrap_or_default()
    }

    /// Symptoms that were never given a Yes or No
    pub fn unanswered(&self) -> Vec<Symptom> {
        Symptom::ALL
            .iter()
            .copied()
            .filter(|s| self.get(*s) == Answer::Unselected)
            .collect()
    }

    pub fn yes_count(&self) -> usize {
        Symptom::ALL
            .iter()
            .filter(|s| self.get(**s) == Answer::Yes)
            .count()
    }
}

/// Binary model input in canonical symptom order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SymptomVector([u8; SYMPTOM_COUNT]);

impl SymptomVector {
    /// Encode answers: Yes is 1, No and Unselected are 0
    pub fn from_answers(answers: &SymptomAnswers) -> Self {
        let mut bits = [0u8; SYMPTOM_COUNT];
        for symptom in Symptom::ALL {
            bits[symptom.index()] = answers.get(symptom).as_bit();
        }
        Self(bits)
    }

    /// Build directly from bits; any non-zero value is clamped to 1
    pub fn from_bits(bits: [u8; SYMPTOM_COUNT]) -> Self {
        Self(bits.map(|b| u8::from(b != 0)))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn is_all_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn count_positive(&self) -> usize {
        self.0.iter().filter(|b| **b == 1).count()
    }

    /// Feature values as floats for model arithmetic
    pub fn features(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|b| f64::from(*b))
    }

    /// Symptoms whose bit is set, in canonical order
    pub fn positives(&self) -> Vec<Symptom> {
        Symptom::ALL
            .iter()
            .copied()
            .filter(|s| self.0[s.index()] == 1)
            .collect()
    }
}
