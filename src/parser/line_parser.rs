//! Line-by-line tokenizer for adjacency list input.
//!
//! This module provides [LineParser], which walks over the lines of an input
//! and turns them into vertex identifiers. It knows about the two kinds
//! of lines in the format:
//! - the header line holding the vertex count `N`, and
//! - vertex lines listing children, optionally cut short by [END_OF_LINE_TOKEN].
//!
//! Input is handled as raw bytes. Only tokens that are actually read must be
//! ASCII digits, so arbitrary bytes after [END_OF_LINE_TOKEN] are accepted.
//!
//! It does not know anything about trees; linking vertices is left to a
//! [TreeBuilder](crate::model::TreeBuilder).

use crate::model::VertexIndex;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use std::borrow::Cow;

/// Bytes separating tokens within a line
pub const DELIMITERS: [u8; 4] = [b' ', b'\t', b'\r', b'\n'];

/// Token marking the end of a child list; anything after it is ignored
pub const END_OF_LINE_TOKEN: &str = "-";

/// Parses a token as an unsigned decimal integer.
///
/// Only ASCII digits are accepted, so signs (`+3`, `-3`) and empty tokens are
/// rejected, as are values that overflow `usize`.
///
/// # Examples
/// ```
/// # use tree_analyzer::parser::line_parser::parse_unsigned;
/// assert_eq!(parse_unsigned("42"), Some(42));
/// assert_eq!(parse_unsigned("007"), Some(7));
/// assert_eq!(parse_unsigned(b"12"), Some(12));
/// assert_eq!(parse_unsigned("+3"), None);
/// assert_eq!(parse_unsigned("-3"), None);
/// assert_eq!(parse_unsigned("4x"), None);
/// assert_eq!(parse_unsigned(""), None);
/// ```
pub fn parse_unsigned<T: AsRef<[u8]>>(token: T) -> Option<usize> {
    let token = token.as_ref();
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0usize, |value, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        value.checked_mul(10)?.checked_add(usize::from(b - b'0'))
    })
}

// =#========================================================================#=
// LINE PARSER
// =#========================================================================#=
/// Tokenizer over the lines of an adjacency list.
///
/// Lines are split on `\n` (a trailing `\r` is dropped); a final newline does
/// not produce an extra empty line. Use [for_bytes](LineParser::for_bytes) for
/// input that is not known to be valid UTF-8.
///
/// # Example
/// ```
/// use tree_analyzer::parser::LineParser;
///
/// let mut parser = LineParser::for_str("3\n1 2\n-\n-\n");
/// let num_vertices = parser.parse_vertex_count()?;
/// assert_eq!(num_vertices, 3);
/// assert_eq!(parser.parse_children(num_vertices)?, Some(vec![1, 2]));
/// assert_eq!(parser.parse_children(num_vertices)?, Some(vec![]));
/// assert_eq!(parser.parse_children(num_vertices)?, Some(vec![]));
/// assert_eq!(parser.parse_children(num_vertices)?, None);
/// # Ok::<(), tree_analyzer::parser::ParsingError>(())
/// ```
pub struct LineParser<'a> {
    /// Input not consumed yet
    rest: &'a [u8],
    /// Number of lines consumed so far (1-based number of the last line)
    line_number: usize,
    max_line_length: Option<usize>,
}

impl<'a> LineParser<'a> {
    /// Creates a new `LineParser` over the given text.
    pub fn for_str(input: &'a str) -> Self {
        Self::for_bytes(input.as_bytes())
    }

    /// Creates a new `LineParser` over the given raw bytes.
    pub fn for_bytes(input: &'a [u8]) -> Self {
        Self {
            rest: input,
            line_number: 0,
            max_line_length: None,
        }
    }

    /// Rejects lines longer than `max` bytes (excluding the line break).
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    /// Returns the (1-based) number of the line consumed last, `0` if none.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consumes the next line, checking its length.
    fn next_line(&mut self) -> Result<Option<&'a [u8]>, ParsingError> {
        if self.rest.is_empty() {
            return Ok(None);
        }
        let mut line = match self.rest.iter().position(|&b| b == b'\n') {
            Some(end) => {
                let line = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        if let [head @ .., b'\r'] = line {
            line = head;
        }
        self.line_number += 1;

        match self.max_line_length {
            Some(max) if line.len() > max => {
                return Err(ParsingError::at_line(
                    ParsingErrorType::LineTooLong { length: line.len(), max },
                    self.line_number,
                    &lossy(line),
                ));
            }
            _ => {}
        }

        Ok(Some(line))
    }

    /// Parses the header line, which must hold exactly one positive integer.
    ///
    /// # Errors
    /// * [ParsingErrorType::EmptyInput] if there is no line at all
    /// * [ParsingErrorType::InvalidVertexCount] if the token is missing, not
    ///   an unsigned integer, or zero
    /// * [ParsingErrorType::TrailingToken] if anything follows the count
    pub fn parse_vertex_count(&mut self) -> Result<usize, ParsingError> {
        let line = self.next_line()?.ok_or_else(ParsingError::empty_input)?;
        let mut tokens = tokenize(line);

        let token = tokens.next().unwrap_or_default();
        let num_vertices = match parse_unsigned(token) {
            Some(n) if n > 0 => n,
            _ => {
                return Err(ParsingError::at_line(
                    ParsingErrorType::InvalidVertexCount(lossy(token).into_owned()),
                    self.line_number,
                    &lossy(line),
                ));
            }
        };

        if let Some(extra) = tokens.next() {
            return Err(ParsingError::at_line(
                ParsingErrorType::TrailingToken(lossy(extra).into_owned()),
                self.line_number,
                &lossy(line),
            ));
        }

        Ok(num_vertices)
    }

    /// Parses the next vertex line into the list of declared children.
    ///
    /// Tokens after [END_OF_LINE_TOKEN] are skipped without validation.
    ///
    /// # Returns
    /// * `Ok(Some(children))` - children of the next vertex (possibly empty)
    /// * `Ok(None)` - no more lines
    ///
    /// # Errors
    /// * [ParsingErrorType::InvalidToken] for a non-numeric token
    /// * [ParsingErrorType::VertexOutOfRange] for a token `>= num_vertices`
    pub fn parse_children(&mut self, num_vertices: usize) -> Result<Option<Vec<VertexIndex>>, ParsingError> {
        let Some(line) = self.next_line()? else {
            return Ok(None);
        };

        let mut children = Vec::new();
        for token in tokenize(line).take_while(|&t| t != END_OF_LINE_TOKEN.as_bytes()) {
            let vertex = parse_unsigned(token)
                .ok_or_else(|| ParsingError::invalid_token(&lossy(token), self.line_number, &lossy(line)))?;
            if vertex >= num_vertices {
                return Err(ParsingError::vertex_out_of_range(
                    vertex,
                    num_vertices,
                    self.line_number,
                    &lossy(line),
                ));
            }
            children.push(vertex);
        }

        Ok(Some(children))
    }
}

fn tokenize(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(|b| DELIMITERS.contains(b)).filter(|t| !t.is_empty())
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
