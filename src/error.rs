//! Error types for csvtool operations.
//!
//! Every failure is fatal for the invoking operation: there is no partial
//! or degraded output mode. The binary prints the message on stderr and
//! exits non-zero.

use std::io;

/// Errors raised while parsing input, resolving columns, compiling a
/// search pattern, or reading/writing text.
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// Malformed structure in the input text.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A column name was used but the input has no header row.
    #[error("Cannot use column name '{0}' without headers")]
    NameWithoutHeaders(String),

    /// A column name was not found in the header row.
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// A numeric column reference below 1. Column indices are 1-based.
    #[error("Column index '{0}' is invalid: indices start at 1")]
    InvalidIndex(String),

    /// The search pattern is not a valid regular expression.
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading the input source or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
