//! Error types for effect size analysis
//!
//! Provides a unified error type for all effect-stats crates. Every variant
//! carries a message meant to be shown to the user as-is.

use thiserror::Error;

/// Core error type for effect size operations
#[derive(Error, Debug)]
pub enum Error {
    /// Too few non-missing observations, overall or within a required subgroup
    #[error("Insufficient data for {context}: expected at least {expected} observations, got {actual}")]
    InsufficientData {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A column has no variance where variance is required
    #[error("Degenerate column '{column}': {reason}")]
    DegenerateColumn { column: String, reason: String },

    /// The classified kinds of the two columns have no defined metric
    #[error("Unsupported pairing: {0}")]
    UnsupportedPairing(String),

    /// A contingency table marginal is zero
    #[error("Zero variance: {0}")]
    ZeroVariance(String),

    /// Requested plot style is not valid for the selected metric
    #[error("Invalid plot style '{style}': {reason}")]
    InvalidPlotStyle { style: String, reason: String },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Action attempted out of order in an analysis session
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration could not be decoded
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for too few observations
    pub fn insufficient(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InsufficientData {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create an error for a column without variance
    pub fn degenerate(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DegenerateColumn {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for columns of different lengths
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::InvalidInput(format!(
            "Columns must have the same number of rows: {left} vs {right}"
        ))
    }
}
