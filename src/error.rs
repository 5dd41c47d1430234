//! Error type shared by every module of the crate.

use std::io;

/// Errors produced while loading data, fitting normalizers or training models.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dataset or matrix with zero samples was supplied.
    #[error("dataset is empty: {0}")]
    EmptyDataset(&'static str),

    /// Two shapes that must agree did not.
    #[error("dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A classification label outside `{0, 1}`.
    #[error("invalid label {label} at sample {index}: expected 0 or 1")]
    InvalidLabel { index: usize, label: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot parse {token:?} as a number (line {line}, column {column})")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },
}

impl Error {
    pub(crate) fn mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        Error::DimensionMismatch {
            what,
            expected,
            got,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
