//! Configuration management for DualCare
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.dualcare/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::errors::{DiagnosisError, Result};

/// Complete configuration for DualCare
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Model artifact location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
}

/// Optional advice catalog override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdviceConfig {
    #[serde(default)]
    pub path: Option<String>,
}

/// Answer handling
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Require an explicit yes/no for every symptom
    #[serde(default)]
    pub strict: bool,
}

/// Terminal display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_verbosity: String,
    pub color_output: bool,
    pub chart_width: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "assets/enhanced_physical_health_model.json".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            color_output: true,
            chart_width: 40,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DiagnosisError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".dualcare").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.model.path.trim().is_empty() {
            return Err(DiagnosisError::ConfigError(
                "model.path must not be empty".to_string()
            ));
        }

        if self.display.chart_width == 0 || self.display.chart_width > 200 {
            return Err(DiagnosisError::ConfigError(
                "chart_width must be between 1 and 200".to_string()
            ));
        }

        match self.display.default_verbosity.as_str() {
            "quiet" | "normal" | "verbose" | "very_verbose" => {}
            _ => return Err(DiagnosisError::ConfigError(
                format!("Invalid verbosity level: {}", self.display.default_verbosity)
            )),
        }

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    pub fn model_path(&self) -> PathBuf {
        Self::expand_path(&self.model.path)
    }

    pub fn advice_path(&self) -> Option<PathBuf> {
        self.advice.path.as_deref().map(Self::expand_path)
    }
}
