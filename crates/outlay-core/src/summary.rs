//! Monthly aggregation: ledger transactions to category summaries and totals

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Month, MonthlyCategorySummary, MonthlyTotals, Transaction};

/// Output of one aggregation run: the per-category breakdown plus the
/// derived income/expense/savings totals.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub totals: MonthlyTotals,
    /// One entry per distinct (month, category) pair, ordered by month
    /// then category name. Categories are lowercased, amounts are
    /// absolute values.
    pub by_category: Vec<MonthlyCategorySummary>,
}

impl MonthlySummary {
    pub fn month_label(&self) -> &str {
        &self.totals.month_label
    }
}

/// Group transactions by (calendar month, category) and derive totals.
///
/// Categories are compared case-insensitively and lowercased in the
/// output. `income` sums the positive group sums, `expenses` is the
/// absolute value of the negative group sums, `savings` is their
/// difference.
///
/// Known limitation: when the ledger spans multiple calendar months, the
/// reported `month_label` comes from the first group only while the
/// totals still cover every group.
pub fn aggregate(transactions: &[Transaction]) -> Result<MonthlySummary> {
    if transactions.is_empty() {
        return Err(Error::EmptyLedger);
    }

    // Signed sum per (month, lowercased category) group. BTreeMap keeps
    // group order deterministic: month first, then category name.
    let mut groups: BTreeMap<(Month, String), f64> = BTreeMap::new();
    for t in transactions {
        let key = (t.month(), t.category.to_lowercase());
        *groups.entry(key).or_insert(0.0) += t.amount;
    }

    let income: f64 = groups.values().filter(|s| **s > 0.0).sum();
    let expenses: f64 = groups.values().filter(|s| **s < 0.0).sum::<f64>().abs();
    let savings = income - expenses;

    let by_category: Vec<MonthlyCategorySummary> = groups
        .iter()
        .map(|((month, category), sum)| MonthlyCategorySummary {
            month: *month,
            category: category.clone(),
            amount: sum.abs(),
        })
        .collect();

    let month_label = by_category[0].month.label();

    debug!(
        month = %month_label,
        groups = by_category.len(),
        income,
        expenses,
        "Aggregation complete"
    );

    Ok(MonthlySummary {
        totals: MonthlyTotals {
            month_label,
            income,
            expenses,
            savings,
        },
        by_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(date: (i32, u32, u32), category: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category,
            amount,
        )
    }

    fn january_ledger() -> Vec<Transaction> {
        vec![
            tx((2024, 1, 1), "salary", 5000.0),
            tx((2024, 1, 5), "groceries", -300.0),
            tx((2024, 1, 10), "rent", -1000.0),
            tx((2024, 1, 15), "utilities", -150.0),
            tx((2024, 1, 20), "entertainment", -200.0),
        ]
    }

    #[test]
    fn test_totals() {
        let summary = aggregate(&january_ledger()).unwrap();
        assert_eq!(summary.month_label(), "Jan-2024");
        assert_eq!(summary.totals.income, 5000.0);
        assert_eq!(summary.totals.expenses, 1650.0);
        assert_eq!(summary.totals.savings, 3350.0);
        assert_eq!(summary.by_category.len(), 5);
    }

    #[test]
    fn test_savings_invariant() {
        let summary = aggregate(&january_ledger()).unwrap();
        assert_eq!(
            summary.totals.savings,
            summary.totals.income - summary.totals.expenses
        );
    }

    #[test]
    fn test_categories_lowercased_and_merged() {
        let summary = aggregate(&[
            tx((2024, 1, 5), "Groceries", -100.0),
            tx((2024, 1, 6), "GROCERIES", -50.0),
            tx((2024, 1, 7), "groceries", -25.0),
        ])
        .unwrap();
        assert_eq!(summary.by_category.len(), 1);
        assert_eq!(summary.by_category[0].category, "groceries");
        assert_eq!(summary.by_category[0].amount, 175.0);
    }

    #[test]
    fn test_amounts_absolute_after_classification() {
        let summary = aggregate(&january_ledger()).unwrap();
        assert!(summary.by_category.iter().all(|s| s.amount >= 0.0));
    }

    #[test]
    fn test_empty_ledger() {
        assert!(matches!(aggregate(&[]), Err(Error::EmptyLedger)));
    }

    #[test]
    fn test_mixed_sign_group_classified_by_net() {
        // Refunds inside a category reduce the group sum before the
        // income/expense split is applied.
        let summary = aggregate(&[
            tx((2024, 1, 5), "groceries", -300.0),
            tx((2024, 1, 8), "groceries", 50.0),
        ])
        .unwrap();
        assert_eq!(summary.totals.income, 0.0);
        assert_eq!(summary.totals.expenses, 250.0);
        assert_eq!(summary.by_category[0].amount, 250.0);
    }

    #[test]
    fn test_cross_month_label_from_first_group() {
        // Totals span all months; the label only reflects the first one.
        let summary = aggregate(&[
            tx((2024, 2, 10), "rent", -1000.0),
            tx((2024, 1, 1), "salary", 5000.0),
        ])
        .unwrap();
        assert_eq!(summary.month_label(), "Jan-2024");
        assert_eq!(summary.totals.income, 5000.0);
        assert_eq!(summary.totals.expenses, 1000.0);
        assert_eq!(summary.by_category.len(), 2);
    }

    #[test]
    fn test_group_order_month_then_category() {
        let summary = aggregate(&[
            tx((2024, 1, 20), "utilities", -150.0),
            tx((2024, 1, 5), "groceries", -300.0),
            tx((2024, 1, 1), "salary", 5000.0),
        ])
        .unwrap();
        let categories: Vec<_> = summary
            .by_category
            .iter()
            .map(|s| s.category.as_str())
            .collect();
        assert_eq!(categories, vec!["groceries", "salary", "utilities"]);
    }
}
