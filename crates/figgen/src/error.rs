//! Error types used across the crate.

use std::fmt;

/// Errors reported by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unknown or unsupported connectivity selection.
    Connectivity(String),
    /// Figure size outside the supported range.
    Size(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connectivity(msg) | Error::Size(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
