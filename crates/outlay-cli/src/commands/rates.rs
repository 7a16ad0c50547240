//! Exchange-rate lookup command

use anyhow::{Context, Result};
use chrono::NaiveDate;

use outlay_core::RatesClient;

pub async fn cmd_rates(base: &str, target: Option<&str>, date: Option<&str>) -> Result<()> {
    let client = RatesClient::frankfurter()?;

    let table = match date {
        Some(date) => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .context("Invalid --date format (use YYYY-MM-DD)")?;
            client.historical(date, base, target).await?
        }
        None => client.latest(base, target).await?,
    };

    println!();
    println!("💱 Exchange Rates: base {} ({})", table.base, table.date);
    println!("   ──────────────────────────");
    let mut codes: Vec<_> = table.rates.keys().collect();
    codes.sort();
    for code in codes {
        println!("   {:<8}{:>14.4}", code, table.rates[code]);
    }
    println!();

    Ok(())
}
