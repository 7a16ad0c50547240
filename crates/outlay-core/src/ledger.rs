//! Ledger loading: CSV transaction files to typed records
//!
//! The loader validates the header row, parses each field, and preserves
//! row order exactly as read. It never sorts, filters, or rewrites
//! amounts; sorting is a separate explicit operation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{SortColumn, Transaction};

/// Columns every ledger file must carry; extra columns are ignored
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "expense_category", "amount"];

/// Parse a ledger from any reader producing delimited rows with a header.
///
/// Row numbers in parse errors count the header as line 1, so the first
/// data row is row 2.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h.trim() == *c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::Schema { missing });
    }

    let col = |name: &str| headers.iter().position(|h| h.trim() == name).unwrap();
    let date_col = col("date");
    let category_col = col("expense_category");
    let amount_col = col("amount");

    let mut transactions = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 2;

        let date_str = record.get(date_col).unwrap_or_default();
        let date = parse_date(date_str).ok_or_else(|| Error::Parse {
            row,
            field: "date",
            value: date_str.to_string(),
        })?;

        let category = record.get(category_col).unwrap_or_default().trim();
        if category.is_empty() {
            return Err(Error::Parse {
                row,
                field: "expense_category",
                value: String::new(),
            });
        }

        let amount_str = record.get(amount_col).unwrap_or_default();
        let amount = parse_amount(amount_str).ok_or_else(|| Error::Parse {
            row,
            field: "amount",
            value: amount_str.to_string(),
        })?;

        transactions.push(Transaction::new(date, category, amount));
    }

    debug!("Parsed {} ledger transactions", transactions.len());
    Ok(transactions)
}

/// Load a ledger from a file on disk
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let transactions = load_csv(file)?;
    info!(
        file = %path.display(),
        count = transactions.len(),
        "Ledger load complete"
    );
    Ok(transactions)
}

/// Sort an in-memory ledger by the given column.
///
/// Stable, in place. An empty ledger is left alone with a warning.
pub fn sort_by(transactions: &mut [Transaction], column: SortColumn) {
    if transactions.is_empty() {
        warn!("Ledger is empty, skipping sort");
        return;
    }

    match column {
        SortColumn::Date => transactions.sort_by_key(|t| t.date),
        SortColumn::Category => transactions.sort_by(|a, b| a.category.cmp(&b.category)),
        SortColumn::Amount => transactions.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
    }
    debug!(column = %column, "Ledger sorted");
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    // Try common date formats, ISO first
    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%Y/%m/%d", // 2024/01/15
        "%m/%d/%Y", // 01/15/2024
        "%d-%m-%Y", // 15-01-2024
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned.parse::<f64>().ok()
}
