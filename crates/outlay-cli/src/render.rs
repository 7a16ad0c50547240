//! Stock collaborator implementations for the core's render boundaries
//!
//! The core hands fully-resolved chart specs and a report payload across
//! trait boundaries and never looks at what comes back. The stock
//! renderer writes one chart-data JSON artifact per spec for an external
//! plotting frontend; the stock builder writes a sectioned plain-text
//! report document. Both can be replaced without touching the core.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use outlay_core::charts::{ChartRenderer, ChartSpec};
use outlay_core::report::{DocumentBuilder, ReportMeta, ReportPayload};
use outlay_core::Result;

/// Writes chart specs as JSON data artifacts for an external plotter
pub struct JsonChartRenderer;

impl ChartRenderer for JsonChartRenderer {
    fn render(&self, spec: &ChartSpec, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join(format!("{}.json", spec.artifact_stem()));
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, spec)?;
        debug!(chart = %spec.title, file = %path.display(), "Chart data written");
        Ok(path)
    }
}

/// Writes the report as a sectioned plain-text document
pub struct TextReportBuilder;

impl DocumentBuilder for TextReportBuilder {
    fn build(
        &self,
        meta: &ReportMeta,
        payload: &ReportPayload,
        charts: &[PathBuf],
        out_file: &Path,
    ) -> Result<()> {
        let mut doc = String::new();
        let rule = "=".repeat(78);

        // Header
        doc.push_str(&format!("{}\n", rule));
        doc.push_str(&format!(
            "{:<50}Generated on: {}\n",
            "Outlay Expense Manager", meta.generated_on
        ));
        doc.push_str(&format!("Customer name: {}\n", meta.customer_name));
        doc.push_str(&format!("Report month: {}\n", meta.report_month));
        doc.push_str(&format!("{:^78}\n", "Monthly Expense Summary"));
        doc.push_str(&format!("{}\n\n", rule));

        // Summary section
        doc.push_str("Monthly Summary:\n");
        doc.push_str(&format!(
            "  {:<28}{} {:.2}\n",
            "Total Income", payload.currency, payload.total_income
        ));
        doc.push_str(&format!(
            "  {:<28}{} {:.2}\n",
            "Total Expenses", payload.currency, payload.total_expenses
        ));
        doc.push_str(&format!(
            "  {:<28}{:.2}%\n\n",
            "Expense to Income Ratio", payload.expense_ratio
        ));

        // Expense table
        doc.push_str("Expense Summary:\n");
        doc.push_str(&format!("  {:<24}{:>14}\n", "Expense Category", "Amount"));
        for (category, amount) in &payload.expenses {
            doc.push_str(&format!(
                "  {:<24}{:>14}\n",
                category,
                format!("{} {:.2}", payload.currency, amount)
            ));
        }
        doc.push('\n');

        // Insights
        doc.push_str("Insights and Recommendations:\n");
        for insight in &payload.insights {
            doc.push_str(&format!("  * {}\n", insight));
        }
        doc.push('\n');

        // Chart references
        doc.push_str("Charts:\n");
        for chart in charts {
            doc.push_str(&format!("  - {}\n", chart.display()));
        }

        fs::write(out_file, doc)?;
        debug!(file = %out_file.display(), "Report document written");
        Ok(())
    }
}
