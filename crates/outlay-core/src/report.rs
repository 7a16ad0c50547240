//! Report payload assembly and the document-builder boundary
//!
//! The assembler is a pure merge: a fixed list of computed values is
//! mapped positionally onto the named payload fields, with the
//! savings-goal message inserted at the head of the insights sequence.
//! A shape mismatch means an upstream programming error, not bad user
//! data.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insights::Insight;
use crate::models::MonthlyTotals;

/// Payload fields in assembly order
pub const PAYLOAD_FIELDS: [&str; 6] = [
    "total_income",
    "total_expenses",
    "expense_ratio",
    "currency",
    "expenses",
    "insights",
];

/// One computed value headed for a payload slot
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Number(f64),
    Text(String),
    Breakdown(Vec<(String, f64)>),
    Lines(Vec<String>),
}

impl PayloadValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Breakdown(_) => "breakdown",
            Self::Lines(_) => "lines",
        }
    }
}

/// The merged report structure handed to the document builder.
///
/// `expenses` and `insights` are ordered sequences; order is part of the
/// contract, not an accident of map iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Total expenses as a percent of income
    pub expense_ratio: f64,
    pub currency: String,
    /// Category to amount, salary excluded, in breakdown order
    pub expenses: Vec<(String, f64)>,
    /// Savings-goal status first, then the per-category insights
    pub insights: Vec<String>,
    /// Artifact names the renderer produced for this run
    pub chart_references: Vec<String>,
}

impl ReportPayload {
    /// Positional mapping of computed values onto the payload fields.
    ///
    /// Fails with `ShapeMismatch` when the value count or a slot's value
    /// kind disagrees with [`PAYLOAD_FIELDS`].
    pub fn from_values(values: Vec<PayloadValue>, chart_references: Vec<String>) -> Result<Self> {
        if values.len() != PAYLOAD_FIELDS.len() {
            return Err(Error::ShapeMismatch {
                expected: PAYLOAD_FIELDS.len(),
                got: values.len(),
            });
        }

        let mut values = values.into_iter();
        let mut take_number = |slot: usize| match values.next() {
            Some(PayloadValue::Number(n)) => Ok(n),
            Some(other) => Err(shape_error(slot, "number", other.kind())),
            None => unreachable!("length checked above"),
        };

        let total_income = take_number(0)?;
        let total_expenses = take_number(1)?;
        let expense_ratio = take_number(2)?;

        let currency = match values.next() {
            Some(PayloadValue::Text(s)) => s,
            Some(other) => return Err(shape_error(3, "text", other.kind())),
            None => unreachable!(),
        };
        let expenses = match values.next() {
            Some(PayloadValue::Breakdown(b)) => b,
            Some(other) => return Err(shape_error(4, "breakdown", other.kind())),
            None => unreachable!(),
        };
        let insights = match values.next() {
            Some(PayloadValue::Lines(l)) => l,
            Some(other) => return Err(shape_error(5, "lines", other.kind())),
            None => unreachable!(),
        };

        Ok(Self {
            total_income,
            total_expenses,
            expense_ratio,
            currency,
            expenses,
            insights,
            chart_references,
        })
    }
}

fn shape_error(slot: usize, expected: &str, got: &str) -> Error {
    Error::Assembly(format!(
        "payload field {:?} expects a {} value, got {}",
        PAYLOAD_FIELDS[slot], expected, got
    ))
}

/// Merge the pipeline's computed outputs into one [`ReportPayload`].
///
/// Pure; no recomputation happens here. `savings_goal_message` becomes
/// the first insight line.
pub fn assemble(
    totals: &MonthlyTotals,
    ratio_percent: f64,
    currency: &str,
    breakdown: &[(String, f64)],
    insights: &[Insight],
    savings_goal_message: &str,
    chart_references: Vec<String>,
) -> Result<ReportPayload> {
    let mut lines = Vec::with_capacity(insights.len() + 1);
    lines.push(savings_goal_message.to_string());
    lines.extend(insights.iter().map(|i| i.message.clone()));

    ReportPayload::from_values(
        vec![
            PayloadValue::Number(totals.income),
            PayloadValue::Number(totals.expenses),
            PayloadValue::Number(ratio_percent),
            PayloadValue::Text(currency.to_string()),
            PayloadValue::Breakdown(breakdown.to_vec()),
            PayloadValue::Lines(lines),
        ],
        chart_references,
    )
}

/// Presentation metadata for the document header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub customer_name: String,
    /// e.g. "Jan-2024"
    pub report_month: String,
    /// Generation timestamp, `%d/%m/%Y %H:%M`
    pub generated_on: String,
}

/// Document-builder boundary: consumes the payload plus metadata and
/// chart artifact paths, produces a single report document at `out_file`.
/// Layout and styling belong to the builder, not the core.
pub trait DocumentBuilder {
    fn build(
        &self,
        meta: &ReportMeta,
        payload: &ReportPayload,
        charts: &[PathBuf],
        out_file: &Path,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> MonthlyTotals {
        MonthlyTotals {
            month_label: "Jan-2024".to_string(),
            income: 5000.0,
            expenses: 1650.0,
            savings: 3350.0,
        }
    }

    fn insight(category: &str) -> Insight {
        Insight {
            category: category.to_string(),
            goal_percent: 10.0,
            actual_percent: 18.0,
            message: format!("It is recommended to reduce {} expenses.", category),
        }
    }

    #[test]
    fn test_assemble() {
        let breakdown = vec![
            ("groceries".to_string(), 300.0),
            ("rent".to_string(), 1000.0),
        ];
        let payload = assemble(
            &totals(),
            33.0,
            "USD",
            &breakdown,
            &[insight("groceries")],
            "Monthly savings goal is achieved by 67.00%",
            vec!["monthly_summary.json".to_string()],
        )
        .unwrap();

        assert_eq!(payload.total_income, 5000.0);
        assert_eq!(payload.total_expenses, 1650.0);
        assert_eq!(payload.expense_ratio, 33.0);
        assert_eq!(payload.currency, "USD");
        assert_eq!(payload.expenses, breakdown);
        assert_eq!(payload.insights.len(), 2);
        assert!(payload.insights[0].contains("achieved"));
        assert!(payload.insights[1].contains("groceries"));
        assert_eq!(payload.chart_references, vec!["monthly_summary.json"]);
    }

    #[test]
    fn test_shape_mismatch_on_count() {
        let err = ReportPayload::from_values(vec![PayloadValue::Number(1.0)], vec![]).unwrap_err();
        match err {
            Error::ShapeMismatch { expected, got } => {
                assert_eq!(expected, 6);
                assert_eq!(got, 1);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_mismatch_on_kind() {
        let values = vec![
            PayloadValue::Number(5000.0),
            PayloadValue::Number(1650.0),
            PayloadValue::Text("33.0".to_string()),
            PayloadValue::Text("USD".to_string()),
            PayloadValue::Breakdown(vec![]),
            PayloadValue::Lines(vec![]),
        ];
        assert!(ReportPayload::from_values(values, vec![]).is_err());
    }

    #[test]
    fn test_payload_serializes_stably() {
        let payload = assemble(&totals(), 33.0, "USD", &[], &[], "goal status", vec![]).unwrap();
        let a = serde_json::to_string(&payload).unwrap();
        let b = serde_json::to_string(&payload).unwrap();
        assert_eq!(a, b);
    }
}
