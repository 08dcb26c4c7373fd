//! Error types for the financial model library

use thiserror::Error;

/// Errors produced at the model boundary.
///
/// Numeric edge cases (zero denominators, non-convergent IRR) are not
/// errors; they resolve to fail-soft values with advisory flags. Only
/// malformed input reaches these variants.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Projection horizon must cover at least one year
    #[error("projection horizon must be at least 1 year, got {0}")]
    InvalidHorizon(u32),

    /// An assumption field holds NaN or infinity
    #[error("assumption `{0}` must be a finite number")]
    NonFiniteAssumption(&'static str),

    /// IRR requires at least the initial outflow element
    #[error("cash flow sequence must contain at least one element")]
    EmptyCashflows,

    /// Assumption override file could not be read
    #[error("failed to read assumptions file: {0}")]
    Io(#[from] std::io::Error),

    /// Assumption override file could not be parsed as CSV
    #[error("failed to parse assumptions file: {0}")]
    Csv(#[from] csv::Error),

    /// Assumption override row held a non-numeric value
    #[error("assumption `{key}` has non-numeric value `{value}`")]
    InvalidOverride { key: String, value: String },

    /// Assumption override key does not name a known field
    #[error("unknown assumption key `{0}`")]
    UnknownKey(String),

    /// Model snapshot could not be serialized
    #[error("failed to serialize model snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
