//! Symptom definitions and answer encoding
//!
//! The ten symptoms are listed in the feature order the model was trained
//! on. Reordering `Symptom::ALL` silently breaks every artifact.

pub mod vector;

pub use vector::{SymptomAnswers, SymptomVector, SYMPTOM_COUNT};

use crate::errors::{DiagnosisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One binary feature of the model input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symptom {
    Fever,
    Cough,
    Fatigue,
    Headache,
    Nausea,
    BodyPain,
    Chills,
    LossOfSmell,
    Diarrhea,
    Vomiting,
}

impl Symptom {
    /// Canonical feature order
    pub const ALL: [Symptom; SYMPTOM_COUNT] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Fatigue,
        Symptom::Headache,
        Symptom::Nausea,
        Symptom::BodyPain,
        Symptom::Chills,
        Symptom::LossOfSmell,
        Symptom::Diarrhea,
        Symptom::Vomiting,
    ];

    /// Position of this symptom in the input vector
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name, also used as the feature name in model artifacts
    pub fn name(&self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Cough => "Cough",
            Symptom::Fatigue => "Fatigue",
            Symptom::Headache => "Headache",
            Symptom::Nausea => "Nausea",
            Symptom::BodyPain => "Body Pain",
            Symptom::Chills => "Chills",
            Symptom::LossOfSmell => "Loss of Smell",
            Symptom::Diarrhea => "Diarrhea",
            Symptom::Vomiting => "Vomiting",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Symptom::Fever => "High body temperature or chills.",
            Symptom::Cough => "Persistent dry or wet cough.",
            Symptom::Fatigue => "Tiredness or lack of energy.",
            Symptom::Headache => "Pain in head or neck.",
            Symptom::Nausea => "Sensation of vomiting.",
            Symptom::BodyPain => "Muscle/joint aches.",
            Symptom::Chills => "Cold feeling with shivering.",
            Symptom::LossOfSmell => "Anosmia or reduced smell.",
            Symptom::Diarrhea => "Loose bowel movements.",
            Symptom::Vomiting => "Expelling stomach contents.",
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses display names loosely: case, spaces, dashes and underscores are ignored,
/// so "Body Pain", "body-pain" and "BODY_PAIN" all match.
impl FromStr for Symptom {
    type Err = DiagnosisError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Symptom::ALL
            .iter()
            .copied()
            .find(|symptom| normalize(symptom.name()) == wanted)
            .ok_or_else(|| DiagnosisError::InvalidInput(format!("Unknown symptom: {}", s.trim())))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Tri-state answer collected from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Answer {
    #[default]
    Unselected,
    Yes,
    No,
}

impl Answer {
    /// Feature value: only an explicit Yes counts
    pub fn as_bit(&self) -> u8 {
        match self {
            Answer::Yes => 1,
            Answer::No | Answer::Unselected => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Unselected => "Select",
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }
}

impl FromStr for Answer {
    type Err = DiagnosisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "1" | "true" => Ok(Answer::Yes),
            "no" | "n" | "0" | "false" => Ok(Answer::No),
            "" | "-" | "select" | "unselected" | "skip" => Ok(Answer::Unselected),
            other => Err(DiagnosisError::InvalidInput(format!(
                "Invalid answer '{}': expected yes, no or skip",
                other
            ))),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
