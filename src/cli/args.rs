//! Command-line argument parsing for DualCare
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::{DiagnosisError, Result};
use crate::symptoms::{Answer, Symptom, SymptomAnswers};

/// DualCare - AI health assistant symptom checker
#[derive(Parser, Debug)]
#[command(name = "dualcare")]
#[command(version)]
#[command(about = "Predict a likely condition from yes/no symptom answers", long_about = None)]
pub struct Args {
    /// Model artifact (JSON); overrides the configuration file
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,

    /// Advice catalog (TOML); overrides the configuration file
    #[arg(long, global = true)]
    pub advice: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Require an answer for every symptom
    #[arg(long, global = true)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress everything except the result)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict from answers given on the command line
    Check(CheckArgs),

    /// Answer each symptom question interactively
    Interactive,

    /// List symptoms in model feature order
    Symptoms,

    /// List model classes and whether advice exists for each
    Classes,

    /// Display current configuration
    Config,
}

/// Answers for the `check` subcommand
#[derive(clap::Args, Debug, Default)]
pub struct CheckArgs {
    /// Symptom answered Yes (repeatable, comma separated)
    #[arg(long = "yes", value_delimiter = ',')]
    pub yes: Vec<String>,

    /// Symptom answered No (repeatable, comma separated)
    #[arg(long = "no", value_delimiter = ',')]
    pub no: Vec<String>,

    /// Explicit answer as NAME=VALUE, e.g. "Body Pain=yes"
    #[arg(long = "answer")]
    pub answers: Vec<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Collect every flag into one answer set.
    ///
    /// Unknown names, bad values and contradicting answers are rejected.
    pub fn to_answers(&self) -> Result<SymptomAnswers> {
        let mut answers = SymptomAnswers::new();

        for name in &self.yes {
            answers.set_once(name.parse()?, Answer::Yes)?;
        }
        for name in &self.no {
            answers.set_once(name.parse()?, Answer::No)?;
        }
        for pair in &self.answers {
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                DiagnosisError::InvalidInput(format!("Expected NAME=VALUE, got '{}'", pair))
            })?;
            let symptom: Symptom = name.parse()?;
            answers.set_once(symptom, value.parse()?)?;
        }

        Ok(answers)
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    pub fn from_config(value: &str) -> Self {
        match value {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "very_verbose" => Verbosity::VeryVerbose,
            _ => Verbosity::Normal,
        }
    }

    /// Log filter used when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show the probability chart
    pub fn show_chart(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should echo the encoded vector
    pub fn show_vector(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["dualcare", "-q", "symptoms"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["dualcare", "symptoms"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["dualcare", "-v", "symptoms"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["dualcare", "-vv", "symptoms"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["dualcare", "classes", "--model", "m.json", "--strict"]);
        assert_eq!(args.model, Some(PathBuf::from("m.json")));
        assert!(args.strict);
        assert!(matches!(args.command, Commands::Classes));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["dualcare"]).is_err());
    }

    #[test]
    fn test_check_collects_answers() {
        let args = parse(&[
            "dualcare", "check", "--yes", "fever,cough", "--no", "chills",
            "--answer", "Body Pain=yes", "--answer", "Nausea=skip",
        ]);
        let Commands::Check(check) = args.command else {
            panic!("expected check");
        };
        let answers = check.to_answers().unwrap();
        assert_eq!(answers.get(Symptom::Fever), Answer::Yes);
        assert_eq!(answers.get(Symptom::Cough), Answer::Yes);
        assert_eq!(answers.get(Symptom::BodyPain), Answer::Yes);
        assert_eq!(answers.get(Symptom::Chills), Answer::No);
        assert_eq!(answers.get(Symptom::Nausea), Answer::Unselected);
        assert_eq!(answers.yes_count(), 3);
    }

    #[test]
    fn test_check_rejects_conflicts() {
        let check = CheckArgs {
            yes: vec!["fever".to_string()],
            no: vec!["Fever".to_string()],
            ..Default::default()
        };
        assert!(check.to_answers().is_err());
    }

    #[test]
    fn test_check_skip_and_yes_conflict_regardless_of_order() {
        for pair in [["fever=skip", "fever=yes"], ["fever=yes", "fever=skip"]] {
            let check = CheckArgs {
                answers: pair.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            };
            assert!(check.to_answers().is_err(), "{:?} accepted", pair);
        }
    }

    #[test]
    fn test_check_rejects_bad_pairs() {
        let check = CheckArgs {
            answers: vec!["fever".to_string()],
            ..Default::default()
        };
        assert!(check.to_answers().is_err());

        let check = CheckArgs {
            answers: vec!["fever=perhaps".to_string()],
            ..Default::default()
        };
        assert!(check.to_answers().is_err());
    }

    #[test]
    fn test_check_rejects_unknown_symptom() {
        let check = CheckArgs {
            yes: vec!["sneezing".to_string()],
            ..Default::default()
        };
        assert!(check.to_answers().is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_chart());
        assert!(Verbosity::Normal.show_chart());
        assert!(!Verbosity::Normal.show_vector());
        assert!(Verbosity::Verbose.show_vector());
        assert_eq!(Verbosity::VeryVerbose.log_filter(), "debug");
        assert_eq!(Verbosity::from_config("quiet"), Verbosity::Quiet);
        assert_eq!(Verbosity::from_config("bogus"), Verbosity::Normal);
    }
}
