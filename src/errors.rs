//! Defines the custom error types for the application.
//!
//! Every failure is fatal for the conversion it occurs in; nothing here is
//! retried or recovered from.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O Error: {1} - {0}")]
    Io(#[source] std::io::Error, String),

    #[error(
        "Malformed line {line} in {}: expected {expected} colon-separated fields, found {found}",
        .path.display()
    )]
    MalformedLine {
        path: PathBuf,
        line: usize,
        expected: FieldCount,
        found: usize,
    },

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

/// How many fields a data line must split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCount {
    Exactly(usize),
    AtLeast(usize),
}

impl FieldCount {
    pub fn accepts(&self, found: usize) -> bool {
        match *self {
            FieldCount::Exactly(n) => found == n,
            FieldCount::AtLeast(n) => found >= n,
        }
    }
}

impl std::fmt::Display for FieldCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldCount::Exactly(n) => write!(f, "exactly {}", n),
            FieldCount::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}
