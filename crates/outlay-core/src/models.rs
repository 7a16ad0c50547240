//! Domain models for outlay

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single ledger row: one dated, categorized, signed amount.
///
/// Positive amounts are income, negative amounts are expenses. Created by
/// the ledger loader and immutable from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// The calendar month this transaction falls in
    pub fn month(&self) -> Month {
        Month {
            year: self.date.year(),
            month: self.date.month(),
        }
    }
}

/// A calendar month (year + month), the grouping period for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Report label in `Mon-YYYY` form, e.g. "Jan-2024"
    pub fn label(&self) -> String {
        // Day 1 always exists for a valid (year, month) pair
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b-%Y").to_string())
            .unwrap_or_else(|| format!("{:02}-{}", self.month, self.year))
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The grouped-and-summed projection of the ledger: one entry per distinct
/// (month, category) pair.
///
/// `category` is lowercased and `amount` is the absolute value of the
/// signed group sum; the sign has already been consumed by income/expense
/// classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCategorySummary {
    pub month: Month,
    pub category: String,
    pub amount: f64,
}

/// Income, expense, and savings totals for one aggregation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Report month label, e.g. "Jan-2024"
    pub month_label: String,
    pub income: f64,
    pub expenses: f64,
    /// income − expenses; negative when the month ran at a loss
    pub savings: f64,
}

/// Ledger columns that can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Date,
    Category,
    Amount,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Category => "expense_category",
            Self::Amount => "amount",
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "expense_category" | "category" => Ok(Self::Category),
            "amount" => Ok(Self::Amount),
            _ => Err(format!("Unknown sort column: {}", s)),
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        let m = Month {
            year: 2024,
            month: 1,
        };
        assert_eq!(m.label(), "Jan-2024");

        let m = Month {
            year: 2023,
            month: 12,
        };
        assert_eq!(m.label(), "Dec-2023");
    }

    #[test]
    fn test_transaction_classification() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(Transaction::new(date, "salary", 5000.0).is_income());
        assert!(Transaction::new(date, "rent", -1000.0).is_expense());

        let zero = Transaction::new(date, "noop", 0.0);
        assert!(!zero.is_income());
        assert!(!zero.is_expense());
    }

    #[test]
    fn test_sort_column_round_trip() {
        use std::str::FromStr;
        assert_eq!(SortColumn::from_str("date").unwrap(), SortColumn::Date);
        assert_eq!(
            SortColumn::from_str("expense_category").unwrap(),
            SortColumn::Category
        );
        assert_eq!(SortColumn::from_str("AMOUNT").unwrap(), SortColumn::Amount);
        assert!(SortColumn::from_str("memo").is_err());
    }
}
