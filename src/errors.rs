use std::fmt::Display;

use thiserror::Error;

/// Contract violations of the splitting API.
///
/// Offending values are kept pre-formatted so one error type serves every
/// coordinate width.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("chunk count must be positive")]
    ZeroCount,
    #[error("interval end {end} lies before its begin {begin}")]
    InvertedInterval { begin: String, end: String },
    #[error("index {index} out of range, last valid index is {last}")]
    IndexOutOfRange { index: String, last: String },
    #[error("{what} must not be negative, got {value}")]
    NegativeInput { what: &'static str, value: String },
}

impl SplitError {
    pub(crate) fn inverted(begin: impl Display, end: impl Display) -> Self {
        SplitError::InvertedInterval {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    pub(crate) fn out_of_range(index: impl Display, last: impl Display) -> Self {
        SplitError::IndexOutOfRange {
            index: index.to_string(),
            last: last.to_string(),
        }
    }

    pub(crate) fn negative(what: &'static str, value: impl Display) -> Self {
        SplitError::NegativeInput {
            what,
            value: value.to_string(),
        }
    }
}
