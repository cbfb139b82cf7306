//! Top-level error type of the analyzer.
//!
//! Every failure of a run ends up as an [AnalyzerError]. Errors fall into
//! three [categories](ErrorCategory), which is all a caller needs to decide
//! how to report them; all of them are fatal to the run.

use crate::model::TreeError;
use crate::parser::ParsingError;
use std::collections::TryReserveError;
use thiserror::Error;

/// Coarse classification of an [AnalyzerError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Wrong arguments, reported before any input is read
    Usage,
    /// Unreadable, malformed or non-tree input, or query vertex not in tree
    Input,
    /// Memory for the tree or a result could not be reserved
    Allocation,
}

/// Error raised while parsing, validating, or analyzing a tree.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Invalid invocation (e.g. non-numeric query vertex).
    #[error("Usage error: {0}")]
    Usage(String),

    /// The input text is malformed.
    #[error("Invalid input: {0}")]
    Parsing(#[from] ParsingError),

    /// The input is well-formed but does not describe a rooted tree,
    /// or a query refers to a vertex that is not part of it.
    #[error("Invalid input: {0}")]
    Tree(#[from] TreeError),

    /// Memory reservation failed.
    #[error("Allocation error: {0}")]
    Allocation(#[from] TryReserveError),
}

impl AnalyzerError {
    /// Returns the [ErrorCategory] of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::Usage(_) => ErrorCategory::Usage,
            AnalyzerError::Parsing(_) | AnalyzerError::Tree(_) => ErrorCategory::Input,
            AnalyzerError::Allocation(_) => ErrorCategory::Allocation,
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::Parsing(err.into())
    }
}
