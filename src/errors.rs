use std::io;

use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failures raised while loading, saving or validating [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Rejects NaN, infinities and negative values for a named amount field.
pub(crate) fn ensure_amount(field: &str, value: f64) -> LedgerResult<()> {
    if !value.is_finite() {
        return Err(LedgerError::Validation(format!(
            "{field} must be a finite number (got {value})"
        )));
    }
    if value < 0.0 {
        return Err(LedgerError::Validation(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}
