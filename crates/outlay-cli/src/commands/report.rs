//! Report pipeline commands
//!
//! `cmd_report` runs the whole sequence: load, optional sort, aggregate,
//! ratio/insights, chart specs, assemble, render artifacts, build the
//! document. Either a complete report lands in the data directory or the
//! run aborts; there are no partial writes of the document itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use outlay_core::charts::ChartRenderer;
use outlay_core::report::DocumentBuilder;
use outlay_core::{
    aggregate, assemble, build_chart_specs, config, ledger, GoalTable, InsightEngine, ReportMeta,
    SortColumn,
};

use crate::render::{JsonChartRenderer, TextReportBuilder};

#[allow(clippy::too_many_arguments)]
pub fn cmd_report(
    data_dir: &Path,
    month: &str,
    file: Option<&Path>,
    sort: Option<&str>,
    savings_goal: f64,
    goals_file: Option<&Path>,
    currency: &str,
    customer: &str,
) -> Result<()> {
    let ledger_path = match file {
        Some(path) => path.to_path_buf(),
        None => data_dir.join(config::transaction_file_name(month)?),
    };
    let report_path = data_dir.join(config::report_file_name(month)?);

    let mut transactions = ledger::load_file(&ledger_path)
        .with_context(|| format!("Failed to load ledger {}", ledger_path.display()))?;

    if let Some(column) = sort {
        let column: SortColumn = column
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .context("Invalid --sort column")?;
        ledger::sort_by(&mut transactions, column);
    }

    let summary = aggregate(&transactions)?;
    let goals = GoalTable::load(goals_file)?;
    let engine = InsightEngine::new(&summary, &goals, savings_goal);

    let ratio = engine.expense_ratio();
    let percent = engine.expense_percent();
    let status = engine.savings_goal_status()?;
    let insights = engine.generate()?;
    let breakdown = engine.expense_breakdown();

    info!(month = %summary.month_label(), "Monthly summary calculated");
    info!(ratio, percent, "Expense-to-income ratio calculated");
    info!(count = insights.len(), "Insights generated");

    // Chart artifacts for the external plotting frontend
    let specs = build_chart_specs(&summary.totals, &summary.by_category, &breakdown);
    let renderer = JsonChartRenderer;
    let mut chart_files: Vec<PathBuf> = Vec::with_capacity(specs.len());
    for spec in &specs {
        let path = renderer
            .render(spec, data_dir)
            .with_context(|| format!("Failed to render chart {:?}", spec.title))?;
        chart_files.push(path);
    }

    let chart_refs: Vec<String> = chart_files
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    let pairs: Vec<(String, f64)> = breakdown
        .iter()
        .map(|s| (s.category.clone(), s.amount))
        .collect();

    let payload = assemble(
        &summary.totals,
        percent,
        currency,
        &pairs,
        &insights,
        &status,
        chart_refs,
    )?;

    let meta = ReportMeta {
        customer_name: customer.to_string(),
        report_month: summary.month_label().to_string(),
        generated_on: Local::now().format("%d/%m/%Y %H:%M").to_string(),
    };
    TextReportBuilder
        .build(&meta, &payload, &chart_files, &report_path)
        .with_context(|| format!("Failed to build report {}", report_path.display()))?;

    println!();
    println!("📄 Monthly Expense Report: {}", summary.month_label());
    println!("   ─────────────────────────────────────────────");
    println!("   Income:    {} {:.2}", currency, summary.totals.income);
    println!("   Expenses:  {} {:.2}", currency, summary.totals.expenses);
    println!("   Savings:   {} {:.2}", currency, summary.totals.savings);
    println!("   Ratio:     {:.4} [{:.2}%]", ratio, percent);
    println!();
    for insight in &payload.insights {
        println!("   * {}", insight);
    }
    println!();
    println!("   Charts:    {} data files", chart_files.len());
    println!("   Report:    {}", report_path.display());
    println!();

    Ok(())
}

pub fn cmd_summary(data_dir: &Path, month: &str, file: Option<&Path>) -> Result<()> {
    let ledger_path = match file {
        Some(path) => path.to_path_buf(),
        None => data_dir.join(config::transaction_file_name(month)?),
    };

    let transactions = ledger::load_file(&ledger_path)
        .with_context(|| format!("Failed to load ledger {}", ledger_path.display()))?;
    let summary = aggregate(&transactions)?;

    let goals = GoalTable::stock();
    let engine = InsightEngine::new(&summary, &goals, 0.0);

    println!();
    println!("📊 Monthly Summary: {}", summary.month_label());
    println!("   ─────────────────────────────────────────────");
    println!(
        "   {:<24}{:>12}",
        "Category", "Amount"
    );
    println!("   ────────────────────────┼───────────");
    for row in &summary.by_category {
        println!("   {:<24}│{:>11.2}", row.category, row.amount);
    }
    println!();
    println!("   Income:    {:.2}", summary.totals.income);
    println!("   Expenses:  {:.2}", summary.totals.expenses);
    println!("   Savings:   {:.2}", summary.totals.savings);
    println!(
        "   Ratio:     {:.4} [{:.2}%]",
        engine.expense_ratio(),
        engine.expense_percent()
    );
    println!();

    Ok(())
}
