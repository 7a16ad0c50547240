//! Outlay CLI - Monthly expense reports from a transaction ledger
//!
//! Usage:
//!   outlay report --month 012024      Build charts + report document
//!   outlay summary --month 012024     Print the monthly summary
//!   outlay rates --base USD --target INR   Exchange-rate lookup

mod cli;
mod commands;
mod render;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Report {
            month,
            file,
            sort,
            savings_goal,
            goals,
            currency,
            customer,
        } => commands::cmd_report(
            &cli.data_dir,
            &month,
            file.as_deref(),
            sort.as_deref(),
            savings_goal,
            goals.as_deref(),
            &currency,
            &customer,
        ),
        Commands::Summary { month, file } => {
            commands::cmd_summary(&cli.data_dir, &month, file.as_deref())
        }
        Commands::Rates { base, target, date } => {
            commands::cmd_rates(&base, target.as_deref(), date.as_deref()).await
        }
    }
}
