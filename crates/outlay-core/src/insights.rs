//! Ratio calculations and goal-comparison insights
//!
//! Operates on an aggregated [`MonthlySummary`] plus an expense-goal
//! table and a savings-goal threshold. Pure: the engine never touches
//! the ledger or any external state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GoalTable;
use crate::error::{Error, Result};
use crate::summary::MonthlySummary;

/// Category excluded from expense insights; salary is income even though
/// it appears as a summary row.
const SALARY_CATEGORY: &str = "salary";

const INSIGHT_TEMPLATE: &str =
    "It is recommended to reduce {category} [{goal}%] expenses by {percent}% to meet savings goal.";

/// One non-salary summary row expressed as a share of total expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub category: String,
    pub amount: f64,
    /// Share of total expenses, rounded to whole percent
    pub percent: f64,
}

/// A per-category overspend recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: String,
    pub goal_percent: f64,
    pub actual_percent: f64,
    pub message: String,
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Computes ratios, savings-goal status, and overspend insights for one
/// aggregation run.
pub struct InsightEngine<'a> {
    summary: &'a MonthlySummary,
    goals: &'a GoalTable,
    savings_goal: f64,
}

impl<'a> InsightEngine<'a> {
    pub fn new(summary: &'a MonthlySummary, goals: &'a GoalTable, savings_goal: f64) -> Self {
        Self {
            summary,
            goals,
            savings_goal,
        }
    }

    /// Expense-to-income ratio, rounded to four decimals.
    ///
    /// Zero income yields 0 rather than an error.
    pub fn expense_ratio(&self) -> f64 {
        let totals = &self.summary.totals;
        if totals.income == 0.0 {
            return 0.0;
        }
        round_to(totals.expenses / totals.income, 4)
    }

    /// Total expenses as a percentage of income, rounded to two decimals
    pub fn expense_percent(&self) -> f64 {
        round_to(self.expense_ratio() * 100.0, 2)
    }

    /// Savings (or shortfall) as a formatted percentage string.
    ///
    /// When income covers expenses this is savings as a share of income;
    /// otherwise the shortfall as a share of expenses. Both zero fails
    /// with `DivisionByZero` rather than propagating an arithmetic fault.
    pub fn savings_percent(&self) -> Result<String> {
        let totals = &self.summary.totals;

        if totals.income >= totals.expenses {
            if totals.income == 0.0 {
                return Err(Error::DivisionByZero("savings percent calculation"));
            }
            let pct = totals.savings / totals.income * 100.0;
            Ok(format!("{:.2}%", pct))
        } else {
            let shortfall = totals.expenses - totals.income;
            let pct = shortfall / totals.expenses * 100.0;
            Ok(format!("{:.2}%", pct))
        }
    }

    /// Progress message against the configured savings goal
    pub fn savings_goal_status(&self) -> Result<String> {
        let pct = self.savings_percent()?;
        Ok(if self.summary.totals.savings >= self.savings_goal {
            format!("Monthly savings goal is achieved by {}", pct)
        } else {
            format!("Monthly expense exceeds savings goal by {}", pct)
        })
    }

    /// Non-salary summary rows as shares of total expenses, in summary
    /// order. Shares are 0 when there are no expenses to take shares of.
    pub fn expense_breakdown(&self) -> Vec<ExpenseShare> {
        let expenses = self.summary.totals.expenses;
        self.summary
            .by_category
            .iter()
            .filter(|row| row.category != SALARY_CATEGORY)
            .map(|row| ExpenseShare {
                category: row.category.clone(),
                amount: row.amount,
                percent: if expenses > 0.0 {
                    (row.amount / expenses * 100.0).round()
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// Generate overspend insights by comparing each category's expense
    /// share to its configured goal percent.
    ///
    /// Every observed category must have a goal entry; a missing entry
    /// fails with `UnknownCategory`. Insights keep the breakdown's
    /// category order, not magnitude order.
    pub fn generate(&self) -> Result<Vec<Insight>> {
        let breakdown = self.expense_breakdown();
        if self.summary.totals.expenses == 0.0 {
            debug!("No expenses this month, skipping insight generation");
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        for share in &breakdown {
            let goal = self
                .goals
                .get(&share.category)
                .ok_or_else(|| Error::UnknownCategory(share.category.clone()))?;

            if share.percent > goal {
                let diff = share.percent - goal;
                insights.push(Insight {
                    category: share.category.clone(),
                    goal_percent: goal,
                    actual_percent: share.percent,
                    message: INSIGHT_TEMPLATE
                        .replace("{category}", &share.category)
                        .replace("{goal}", &format_percent(goal))
                        .replace("{percent}", &format_percent(diff)),
                });
            }
        }

        debug!(count = insights.len(), "Insight generation complete");
        Ok(insights)
    }
}

/// Round half away from zero to the given number of decimal places
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Percent values print without a trailing `.0` but keep real fractions
fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
