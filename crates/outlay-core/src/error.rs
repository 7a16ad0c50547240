//! Error types for outlay

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("ledger is missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("row {row}: unable to parse {field} value {value:?}")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("ledger contains no transactions")]
    EmptyLedger,

    #[error("no expense goal configured for category {0:?}")]
    UnknownCategory(String),

    #[error("division by zero in {0}")]
    DivisionByZero(&'static str),

    #[error("report payload expects {expected} values, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("report assembly error: {0}")]
    Assembly(String),

    #[error("unsupported currency: {0}")]
    Currency(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
