//! Error types for adjacency list parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting malformed input, that is, everything that is wrong with the
//! text itself before (or while) a tree is assembled from it.

use thiserror::Error;

/// Maximum number of characters of the offending line kept as context
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while parsing an adjacency list.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Input is empty, expected the vertex count on the first line")]
    EmptyInput,
    #[error("Invalid vertex count '{0}', expected a positive integer")]
    InvalidVertexCount(String),
    #[error("Unexpected token '{0}' after the vertex count")]
    TrailingToken(String),
    #[error("Invalid vertex token '{0}', expected an unsigned integer")]
    InvalidToken(String),
    #[error("Vertex {vertex} out of range for a tree with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
    #[error("Line of {length} bytes exceeds the maximum of {max} bytes")]
    LineTooLong { length: usize, max: usize },
    #[error("More vertex lines than the {num_vertices} declared vertices")]
    TooManyLines { num_vertices: usize },
    #[error("Expected {expected} vertex lines, found {found}")]
    LineCountMismatch { expected: usize, found: usize },
    #[error("Expected {expected} edges, found {found}")]
    EdgeCountMismatch { expected: usize, found: usize },
    #[error("Builder not initialized")]
    BuilderNotInitialized,
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line number and line content).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}{}", location_suffix(.line, .context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    line: Option<usize>,
    context: String,
}

fn location_suffix(line: &Option<usize>, context: &str) -> String {
    match line {
        Some(line) if context.is_empty() => format!(" at line {line}"),
        Some(line) => format!(" at line {line}\n  Context: {context}"),
        None => String::new(),
    }
}

impl ParsingError {
    /// Create a ParsingError for the given (1-based) line and its content.
    pub fn at_line(kind: ParsingErrorType, line: usize, content: &str) -> Self {
        Self {
            kind,
            line: Some(line),
            context: content.chars().take(DEFAULT_CONTEXT_LENGTH).collect(),
        }
    }

    /// Create a ParsingError without line context (for builder errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self { kind, line: None, context: String::new() }
    }

    /// Convenience constructor for EmptyInput
    pub fn empty_input() -> Self {
        Self::without_context(ParsingErrorType::EmptyInput)
    }

    /// Convenience constructor for InvalidToken
    pub fn invalid_token(token: &str, line: usize, content: &str) -> Self {
        Self::at_line(ParsingErrorType::InvalidToken(token.to_string()), line, content)
    }

    /// Convenience constructor for VertexOutOfRange
    pub fn vertex_out_of_range(vertex: usize, num_vertices: usize, line: usize, content: &str) -> Self {
        Self::at_line(ParsingErrorType::VertexOutOfRange { vertex, num_vertices }, line, content)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the (1-based) line where the error occurred, if known
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        Self::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line_and_context() {
        let err = ParsingError::invalid_token("x", 3, "1 x 2");
        assert_eq!(
            err.to_string(),
            "Invalid vertex token 'x', expected an unsigned integer at line 3\n  Context: 1 x 2"
        );
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_display_without_context() {
        let err = ParsingError::without_context(ParsingErrorType::LineCountMismatch {
            expected: 3,
            found: 2,
        });
        assert_eq!(err.to_string(), "Expected 3 vertex lines, found 2");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_context_is_truncated() {
        let long_line = "7 ".repeat(100);
        let err = ParsingError::at_line(ParsingErrorType::InvalidToken("7".into()), 2, &long_line);
        assert_eq!(err.context.chars().count(), DEFAULT_CONTEXT_LENGTH);
    }
}
