//! Error type of `velotrans`
use thiserror::Error;

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading, transforming or plotting a case
#[derive(Error, Debug)]
pub enum Error {
    /// Case file could not be read
    #[error("unable to read {path}: {source}")]
    Io {
        /// File that failed
        path: String,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// Malformed header or data line
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the case file
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Case parameter outside its admissible range
    #[error("invalid case parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Parsed value
        value: f64,
        /// Violated condition
        reason: &'static str,
    },

    /// Input arrays of a transform differ in length
    #[error("shape mismatch in {context}: {name} has length {found}, expected {expected}")]
    ShapeMismatch {
        /// Operation that checked the shapes
        context: &'static str,
        /// Offending array
        name: &'static str,
        /// Length of the reference array
        expected: usize,
        /// Length of the offending array
        found: usize,
    },

    /// Transform called without any samples
    #[error("empty profile passed to {0}")]
    EmptyProfile(&'static str),

    /// Precondition on the profile values is violated
    #[error("domain error in {context} at index {index}: {message}")]
    Domain {
        /// Operation that failed
        context: &'static str,
        /// Sample index
        index: usize,
        /// What went wrong
        message: String,
    },

    /// Drawing backend failed
    #[error("plotting failed: {0}")]
    Plot(String),
}

impl Error {
    pub(crate) fn domain<M: Into<String>>(context: &'static str, index: usize, message: M) -> Self {
        Error::Domain {
            context,
            index,
            message: message.into(),
        }
    }

    pub(crate) fn parse<M: Into<String>>(line: usize, message: M) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
