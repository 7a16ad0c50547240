//! Goal configuration and run conventions
//!
//! The expense-goal table maps category names to their target share of
//! total monthly expenses (percent, 0-100). Resolution is two-layer:
//! stock defaults compiled into the binary, optionally merged with a
//! user-supplied TOML file (last write wins per category). The table is
//! an explicit immutable value handed to the insight engine, never
//! process-wide state.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Stock goal table (compiled into the binary)
const DEFAULT_GOALS: &str = include_str!("../../../config/goals.toml");

#[derive(Debug, Deserialize)]
struct GoalsFile {
    goals: HashMap<String, f64>,
}

/// Category name to target percent-of-total-expense
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalTable {
    targets: HashMap<String, f64>,
}

impl GoalTable {
    /// The stock goal table shipped with the binary
    pub fn stock() -> Self {
        Self::from_toml_str(DEFAULT_GOALS).unwrap_or_default()
    }

    /// Parse a goal table from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: GoalsFile = toml::from_str(text)?;
        let table = Self {
            targets: file.goals,
        };
        table.validate()?;
        Ok(table)
    }

    /// Load a goal table from a TOML file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Stock defaults merged with an optional override file.
    ///
    /// Override entries replace stock entries per category.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let mut table = Self::stock();
        if let Some(path) = override_path {
            let overrides = Self::from_file(path)?;
            debug!(
                file = %path.display(),
                entries = overrides.len(),
                "Merging goal overrides"
            );
            table.merge(overrides);
        }
        Ok(table)
    }

    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self {
            targets: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Goal percent for a category, if configured
    pub fn get(&self, category: &str) -> Option<f64> {
        self.targets.get(category).copied()
    }

    /// Merge another table into this one; duplicate categories take the
    /// incoming value.
    pub fn merge(&mut self, other: GoalTable) {
        self.targets.extend(other.targets);
    }

    pub fn insert(&mut self, category: impl Into<String>, percent: f64) {
        self.targets.insert(category.into(), percent);
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (category, percent) in &self.targets {
            if !(0.0..=100.0).contains(percent) {
                return Err(Error::Config(format!(
                    "goal percent for {:?} must be within 0-100, got {}",
                    category, percent
                )));
            }
        }
        Ok(())
    }
}

/// Ledger file name for a `MMYYYY` month token
pub fn transaction_file_name(month: &str) -> Result<String> {
    validate_month_token(month)?;
    Ok(format!("transaction_data_{}.csv", month))
}

/// Report document name for a `MMYYYY` month token
pub fn report_file_name(month: &str) -> Result<String> {
    validate_month_token(month)?;
    Ok(format!("monthly_expense_report_{}.txt", month))
}

fn validate_month_token(token: &str) -> Result<()> {
    let valid = token.len() == 6
        && token.chars().all(|c| c.is_ascii_digit())
        && matches!(token[..2].parse::<u32>(), Ok(1..=12));
    if valid {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "month must be MMYYYY (e.g. 012024), got {:?}",
            token
        )))
    }
}
