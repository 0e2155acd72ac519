//! Error types for gridcalc.
//!
//! Only structural failures surface as errors: file IO and malformed sheet
//! files. Formula-level failures (bad arithmetic, unknown references,
//! cycles) are display-value sentinels and never raise.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
