//! Display manager for terminal output
//!
//! Formats outcomes, symptom lists and class coverage. The `render_*`
//! functions return plain lines; color is applied only when printing.

use colored::*;

use crate::advisor::AdviceCatalog;
use crate::models::DiagnosisLabel;
use crate::presenter::Outcome;
use crate::symptoms::{Symptom, SymptomVector};

pub struct DisplayManager {
    chart_width: usize,
    show_chart: bool,
}

impl DisplayManager {
    pub fn new(chart_width: usize, show_chart: bool) -> Self {
        DisplayManager {
            chart_width,
            show_chart,
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", format!("  DualCare {} - Symptom Checker", version).bold().cyan());
        println!("{}", "  Answer yes, no or skip for each symptom".dimmed());
        println!("{}\n", "=".repeat(width).cyan());
    }

    /// Print a resolved submission
    pub fn show_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Prediction(report) => {
                println!("{}", "-".repeat(64).dimmed());
                println!("{} {}", "Prediction:".bold(), report.label.to_string().green().bold());
                println!("\n{}", "Prevention Tips:".bold());
                println!("{}", report.advice);

                if self.show_chart {
                    let chart = report.chart();
                    println!("\n{}", chart.title.bold());
                    for line in chart.render_lines(self.chart_width) {
                        println!("{}", line.cyan());
                    }
                    println!("{}", format!("({}, axis max {:.1})", chart.y_label, chart.y_max).dimmed());
                }
            }
            Outcome::InsufficientInput { warning, hint } => {
                self.show_warning(warning);
                self.show_info(hint);
            }
        }
    }

    pub fn show_vector(&self, vector: &SymptomVector) {
        println!("{} {:?}", "Vector:".dimmed(), vector.as_slice());
    }

    pub fn show_symptoms(&self) {
        for line in render_symptoms() {
            println!("{}", line);
        }
    }

    pub fn show_classes(&self, classes: &[DiagnosisLabel], catalog: &AdviceCatalog) {
        for line in render_classes(classes, catalog) {
            println!("{}", line);
        }
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }
}

/// Prompt for one questionnaire step, e.g. `[1/10] Fever (High body temperature or chills.) [yes/no/skip]: `
pub fn question_prompt(symptom: Symptom) -> String {
    format!(
        "[{}/{}] {} ({}) [yes/no/skip]: ",
        symptom.index() + 1,
        Symptom::ALL.len(),
        symptom.name(),
        symptom.help_text()
    )
}

pub fn render_symptoms() -> Vec<String> {
    Symptom::ALL
        .iter()
        .map(|s| format!("{:>2}. {:<14} {}", s.index() + 1, s.name(), s.help_text()))
        .collect()
}

pub fn render_classes(classes: &[DiagnosisLabel], catalog: &AdviceCatalog) -> Vec<String> {
    classes
        .iter()
        .map(|label| {
            let coverage = if catalog.contains(label) { "advice" } else { "fallback" };
            format!("{:<20} {}", label.as_str(), coverage)
        })
        .collect()
}
