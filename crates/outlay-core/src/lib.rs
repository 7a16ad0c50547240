//! Outlay Core Library
//!
//! Shared functionality for the outlay monthly expense reporter:
//! - Ledger loading from delimited transaction files
//! - Monthly aggregation by category with income/expense/savings totals
//! - Goal-comparison insight generation
//! - Report payload assembly for the document builder
//! - Chart-spec construction for the external renderer
//! - Expense-goal configuration with embedded defaults
//! - Currency exchange rates from the Frankfurter API
//!
//! The pipeline is a strict linear sequence: load, aggregate, compute
//! ratios and insights, assemble. Each stage is a pure function of its
//! input; re-running any stage on the same input yields the same output.

pub mod charts;
pub mod config;
pub mod error;
pub mod exchange;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod report;
pub mod summary;

pub use charts::{build_chart_specs, ChartKind, ChartRenderer, ChartSpec};
pub use config::{report_file_name, transaction_file_name, GoalTable};
pub use error::{Error, Result};
pub use exchange::{RateTable, RatesClient};
pub use insights::{ExpenseShare, Insight, InsightEngine};
pub use ledger::{load_csv, load_file, sort_by, REQUIRED_COLUMNS};
pub use models::{Month, MonthlyCategorySummary, MonthlyTotals, SortColumn, Transaction};
pub use report::{assemble, DocumentBuilder, ReportMeta, ReportPayload};
pub use summary::{aggregate, MonthlySummary};
