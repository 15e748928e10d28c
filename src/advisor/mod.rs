//! Advice catalog: prevention tips per diagnosis
//!
//! Static label to text mapping used only for display. The catalog is not
//! required to cover every model class; misses fall back to a fixed message.

use crate::errors::{DiagnosisError, Result};
use crate::models::DiagnosisLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Text shown for labels without an entry
pub const FALLBACK_ADVICE: &str = "Please consult a doctor for accurate diagnosis.";

const BUILTIN_ADVICE: &[(&str, &str)] = &[
    (
        "Flu",
        "Rest: Get plenty of sleep.\n\
         Hydration: Drink lots of fluids (water, soup, herbal tea).\n\
         Medicine: Use over-the-counter meds for fever and body aches.\n\
         Avoid: Cold exposure and crowded areas if contagious.",
    ),
    (
        "Cold",
        "Stay Warm: Use a scarf or warm clothing.\n\
         Steam: Inhale steam to clear nasal blockage.\n\
         Rest: Let your body recover naturally.\n\
         Natural Remedies: Honey, ginger, and tulsi can help.",
    ),
    (
        "Migraine",
        "Avoid Bright Light: Rest in a dark, quiet room.\n\
         Pain Relievers: Use prescribed medications.\n\
         Relaxation: Try deep breathing or meditation.\n\
         Track Triggers: Keep a diary of foods/situations causing migraines.",
    ),
    (
        "Food Poisoning",
        "Hydrate: Drink ORS (oral rehydration salts) or coconut water.\n\
         Eat Light: Begin with bananas, toast, or rice.\n\
         Hygiene: Wash hands and clean utensils properly.\n\
         Consult Doctor: If vomiting/diarrhea persists for 2+ days.",
    ),
    (
        "Typhoid",
        "Antibiotics: Take the full prescribed course.\n\
         Soft Diet: Eat porridge, khichdi, or soup.\n\
         Boil Water: Only drink purified or boiled water.\n\
         Avoid Raw Food: Especially street food or cut fruits.",
    ),
    (
        "Malaria",
        "Rest & Medication: Start anti-malarial drugs early.\n\
         Mosquito Protection: Use repellents and nets.\n\
         Monitor Fever: Keep track of spikes.\n\
         Hydration: Keep fluids up to avoid weakness.",
    ),
    (
        "COVID-19",
        "Isolate: Avoid contact until negative.\n\
         Sanitize: Wash hands and disinfect surfaces.\n\
         Monitor Symptoms: Especially breathing and O2 levels.\n\
         Seek Help: For persistent fever or chest tightness.",
    ),
    (
        "Dengue",
        "Rest: Avoid exertion.\n\
         Fluids: Coconut water, ORS, and papaya leaf juice (optional).\n\
         Monitor Platelets: Get blood tests regularly.\n\
         No Aspirin: Avoid blood-thinning meds.",
    ),
];

/// On-disk form of a catalog override
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    fallback: Option<String>,
    advice: BTreeMap<String, String>,
}

/// Immutable label to advice mapping with a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceCatalog {
    entries: BTreeMap<String, String>,
    fallback: String,
}

impl AdviceCatalog {
    /// Catalog with the bundled tips
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ADVICE
                .iter()
                .map(|(label, text)| (label.to_string(), text.to_string()))
                .collect(),
            fallback: FALLBACK_ADVICE.to_string(),
        }
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            fallback: FALLBACK_ADVICE.to_string(),
        }
    }

    /// Load a TOML catalog:
    ///
    /// ```toml
    /// fallback = "optional replacement text"
    ///
    /// [advice]
    /// "Flu" = "Rest: ..."
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DiagnosisError::AdviceError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        log::info!(
            "Loaded {} advice entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| DiagnosisError::AdviceError(format!("Failed to parse catalog: {}", e)))?;

        let fallback = file.fallback.unwrap_or_else(|| FALLBACK_ADVICE.to_string());
        if fallback.trim().is_empty() {
            return Err(DiagnosisError::AdviceError(
                "fallback must not be empty".to_string(),
            ));
        }

        Ok(Self {
            entries: file.advice,
            fallback,
        })
    }

    /// Advice for `label`, or the fallback text. Never fails.
    pub fn lookup(&self, label: &DiagnosisLabel) -> &str {
        match self.entries.get(label.as_str()) {
            Some(text) => text,
            None => {
                log::warn!("No advice entry for '{}', using fallback", label);
                &self.fallback
            }
        }
    }

    pub fn contains(&self, label: &DiagnosisLabel) -> bool {
        self.entries.contains_key(label.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Labels from `classes` that would hit the fallback
    pub fn missing<'a>(&self, classes: &'a [DiagnosisLabel]) -> Vec<&'a DiagnosisLabel> {
        classes.iter().filter(|label| !self.contains(label)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AdviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
