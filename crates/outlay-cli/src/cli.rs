//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Monthly expense reports from a transaction ledger
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Monthly expense aggregation and report generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing ledger files and receiving report artifacts
    #[arg(long, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the monthly expense report (charts + document)
    Report {
        /// Transaction month to process (MMYYYY, e.g. 012024)
        #[arg(short, long)]
        month: String,

        /// Ledger file (defaults to transaction_data_MMYYYY.csv in the data dir)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Column to sort the ledger by before aggregation
        /// (date, expense_category, amount)
        #[arg(long)]
        sort: Option<String>,

        /// Monthly savings goal amount
        #[arg(long, default_value_t = 2000.0)]
        savings_goal: f64,

        /// Expense-goal override file (TOML, merged over the stock table)
        #[arg(long)]
        goals: Option<PathBuf>,

        /// Report currency code
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Customer name shown in the report header
        #[arg(long, default_value = "John Walther")]
        customer: String,
    },

    /// Print the monthly summary without building a report
    Summary {
        /// Transaction month to process (MMYYYY)
        #[arg(short, long)]
        month: String,

        /// Ledger file (defaults to transaction_data_MMYYYY.csv in the data dir)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Look up currency exchange rates
    Rates {
        /// Base currency code
        #[arg(short, long, default_value = "USD")]
        base: String,

        /// Target currency code (all published rates if omitted)
        #[arg(short, long)]
        target: Option<String>,

        /// Historical date (YYYY-MM-DD); latest rates if omitted
        #[arg(short, long)]
        date: Option<String>,
    },
}
