//! Chart specifications for the external renderer
//!
//! The core builds fully-resolved chart specs (title, ordered labels,
//! ordered values, kind, colors) and hands them across the
//! [`ChartRenderer`] boundary. What a renderer draws with them is its
//! own business; the core never inspects the artifact.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::insights::ExpenseShare;
use crate::models::{MonthlyCategorySummary, MonthlyTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One chart, fully resolved: everything a renderer needs and nothing else
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    /// Report month stamped onto the chart, e.g. "Jan-2024"
    pub month: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Color per slice/series; renderers pick their own defaults when empty
    pub colors: Vec<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl ChartSpec {
    /// Artifact stem derived from the title: lowercased, spaces to
    /// underscores. The renderer appends its own extension.
    pub fn artifact_stem(&self) -> String {
        self.title.to_lowercase().replace(' ', "_")
    }
}

/// Renderer boundary: consumes a spec, produces a named artifact in
/// `out_dir`, returns its path.
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec, out_dir: &Path) -> Result<PathBuf>;
}

/// Build the three standard report charts.
///
/// Category breakdowns are ordered by amount, largest first, for display.
pub fn build_chart_specs(
    totals: &MonthlyTotals,
    summary: &[MonthlyCategorySummary],
    breakdown: &[ExpenseShare],
) -> Vec<ChartSpec> {
    let month = totals.month_label.clone();

    let mut by_amount = summary.to_vec();
    by_amount.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let mut expenses_by_amount = breakdown.to_vec();
    expenses_by_amount.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    vec![
        ChartSpec {
            title: "Monthly Summary".to_string(),
            kind: ChartKind::Pie,
            month: month.clone(),
            labels: vec!["Income".to_string(), "Expenses".to_string()],
            values: vec![totals.income, totals.expenses],
            colors: vec!["#32CD32".to_string(), "#FF0000".to_string()],
            x_label: None,
            y_label: None,
        },
        ChartSpec {
            title: "Expense by Category".to_string(),
            kind: ChartKind::Pie,
            month: month.clone(),
            labels: expenses_by_amount
                .iter()
                .map(|s| s.category.clone())
                .collect(),
            values: expenses_by_amount.iter().map(|s| s.amount).collect(),
            colors: Vec::new(),
            x_label: None,
            y_label: None,
        },
        ChartSpec {
            title: "Monthly Summary by category".to_string(),
            kind: ChartKind::Bar,
            month,
            labels: by_amount.iter().map(|s| s.category.clone()).collect(),
            values: by_amount.iter().map(|s| s.amount).collect(),
            colors: vec!["#6495ED".to_string()],
            x_label: Some("Category".to_string()),
            y_label: Some("Amount".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GoalTable;
    use crate::insights::InsightEngine;
    use crate::models::Transaction;
    use crate::summary::aggregate;
    use chrono::NaiveDate;

    fn specs() -> Vec<ChartSpec> {
        let tx = |day: u32, category: &str, amount: f64| {
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                category,
                amount,
            )
        };
        let summary = aggregate(&[
            tx(1, "salary", 5000.0),
            tx(5, "groceries", -300.0),
            tx(10, "rent", -1000.0),
        ])
        .unwrap();
        let goals = GoalTable::from_entries([("groceries", 10.0), ("rent", 30.0)]);
        let engine = InsightEngine::new(&summary, &goals, 2000.0);
        let breakdown = engine.expense_breakdown();
        build_chart_specs(&summary.totals, &summary.by_category, &breakdown)
    }

    #[test]
    fn test_three_charts_built() {
        let specs = specs();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].kind, ChartKind::Pie);
        assert_eq!(specs[2].kind, ChartKind::Bar);
        assert!(specs.iter().all(|s| s.month == "Jan-2024"));
    }

    #[test]
    fn test_monthly_summary_chart() {
        let specs = specs();
        assert_eq!(specs[0].labels, vec!["Income", "Expenses"]);
        assert_eq!(specs[0].values, vec![5000.0, 1300.0]);
        assert_eq!(specs[0].colors.len(), 2);
    }

    #[test]
    fn test_breakdowns_sorted_descending() {
        let specs = specs();
        // Expense by Category excludes salary, rent first
        assert_eq!(specs[1].labels, vec!["rent", "groceries"]);
        assert_eq!(specs[1].values, vec![1000.0, 300.0]);
        // Full summary keeps salary, still sorted by amount
        assert_eq!(specs[2].labels[0], "salary");
    }

    #[test]
    fn test_artifact_stem() {
        let specs = specs();
        assert_eq!(specs[0].artifact_stem(), "monthly_summary");
        assert_eq!(specs[1].artifact_stem(), "expense_by_category");
        assert_eq!(specs[2].artifact_stem(), "monthly_summary_by_category");
    }

    #[test]
    fn test_labels_and_values_stay_aligned() {
        for spec in specs() {
            assert_eq!(spec.labels.len(), spec.values.len(), "{}", spec.title);
        }
    }
}
