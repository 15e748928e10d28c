//! Bar chart data for the probability distribution
//!
//! Bars keep model order. Values are labelled with two decimals and the
//! axis tops out at 1.1 so a full-confidence bar still has headroom.

use crate::models::ProbabilityDistribution;
use serde::Serialize;

pub const CHART_TITLE: &str = "Prediction Probabilities";
pub const CHART_Y_LABEL: &str = "Confidence Level";
pub const CHART_Y_MAX: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    /// Value text drawn next to the bar, e.g. "0.70"
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub y_label: String,
    pub y_max: f64,
    pub bars: Vec<ChartBar>,
}

impl ChartData {
    pub fn from_distribution(distribution: &ProbabilityDistribution) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            y_label: CHART_Y_LABEL.to_string(),
            y_max: CHART_Y_MAX,
            bars: distribution
                .iter()
                .map(|entry| ChartBar {
                    label: entry.label.to_string(),
                    value: entry.probability,
                    annotation: format!("{:.2}", entry.probability),
                })
                .collect(),
        }
    }

    /// Horizontal text rendering, one line per bar.
    ///
    /// `width` is the number of cells that corresponds to `y_max`.
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let label_width = self
            .bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .max()
            .unwrap_or(0);

        self.bars
            .iter()
            .map(|bar| {
                let cells = bar_cells(bar.value, self.y_max, width);
                format!(
                    "{:<label_width$} | {}{} {}",
                    bar.label,
                    "#".repeat(cells),
                    " ".repeat(width - cells),
                    bar.annotation,
                    label_width = label_width
                )
            })
            .collect()
    }
}

/// Cells filled for `value`, clamped to `[0, width]`
pub fn bar_cells(value: f64, y_max: f64, width: usize) -> usize {
    if !value.is_finite() || value <= 0.0 || y_max <= 0.0 {
        return 0;
    }
    let cells = (value / y_max * width as f64).round() as usize;
    cells.min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiagnosisLabel;

    fn distribution() -> ProbabilityDistribution {
        let labels: Vec<DiagnosisLabel> = vec!["Flu".into(), "Food Poisoning".into()];
        ProbabilityDistribution::from_parallel(&labels, &[0.7, 0.3]).unwrap()
    }

    #[test]
    fn test_bars_keep_model_order() {
        let chart = ChartData::from_distribution(&distribution());
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Flu", "Food Poisoning"]);
        assert_eq!(chart.bars[0].annotation, "0.70");
        assert_eq!(chart.bars[1].annotation, "0.30");
        assert_eq!(chart.y_max, CHART_Y_MAX);
    }

    #[test]
    fn test_render_lines_aligned() {
        let chart = ChartData::from_distribution(&distribution());
        let lines = chart.render_lines(22);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Flu            | "));
        assert!(lines[0].ends_with("0.70"));
        // 0.7 / 1.1 * 22 = 14 cells
        assert_eq!(lines[0].matches('#').count(), 14);
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_bar_cells_clamps() {
        assert_eq!(bar_cells(5.0, 1.1, 10), 10);
        assert_eq!(bar_cells(-1.0, 1.1, 10), 0);
        assert_eq!(bar_cells(f64::NAN, 1.1, 10), 0);
        assert_eq!(bar_cells(1.1, 1.1, 10), 10);
    }
}
