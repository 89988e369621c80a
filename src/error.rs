//! Error types for rate-table loading
//!
//! Ambiguous determinations and incomplete input are *not* errors: they are
//! first-class result states (`Unavailable`, `IncomeDependent`, `MoreInfo`).
//! Only genuine defects surface here, such as a rate-table file missing a
//! required constant.

use thiserror::Error;

/// Problems encountered while loading a rate table from an external source.
#[derive(Debug, Error)]
pub enum RateTableError {
    /// A required constant was absent from the source.
    #[error("rate table is missing required constant '{0}'")]
    MissingConstant(String),

    /// A constant was present but could not be parsed as a number.
    #[error("rate table constant '{key}' has invalid value '{value}'")]
    InvalidConstant { key: String, value: String },

    /// The effective date row was absent or malformed.
    #[error("rate table has no valid effective date")]
    MissingEffectiveDate,

    /// Underlying CSV read failure.
    #[error("failed to read rate table: {0}")]
    Csv(#[from] csv::Error),
}
