//! Adjacency list format parser and writer for rooted trees.
//!
//! This module provides [AdjacencyParser] to parse adjacency lists into
//! tree structures. The parser uses a [TreeBuilder](crate::model::TreeBuilder)
//! internally, which links and validates the vertices.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_file`] - parses a file into a validated [Tree]
//! * [`parse_str`] - parses a string into a validated [Tree]
//!
//! # Format
//! * Line 1: the number of vertices `N` (positive integer, nothing else)
//! * Lines 2 to `N+1`: line `i` lists the children of vertex `i-2`,
//!   separated by whitespace, each in `0..N`
//! * A `-` token ends a child list early; the rest of the line is ignored
//!
//! For example, a root `0` with two leaves `1` and `2`:
//! ```text
//! 3
//! 1 2
//! -
//! -
//! ```

pub mod parser;
pub mod writer;

pub use parser::AdjacencyParser;
pub use writer::{to_adjacency_string, write_adjacency_file};

use crate::error::AnalyzerError;
use crate::model::Tree;
use crate::parser::ParsingError;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses an adjacency list file into a validated [Tree].
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Errors
/// * [AnalyzerError::Parsing] - If reading fails or the format is invalid
/// * [AnalyzerError::Tree] - If the input does not describe a rooted tree
/// * [AnalyzerError::Allocation] - If the tree cannot be allocated
///
/// # Example
/// ```no_run
/// use tree_analyzer::adjacency::parse_file;
///
/// let tree = parse_file("tree.txt")?;
/// println!("Parsed tree with {} vertices", tree.num_vertices());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Tree, AnalyzerError> {
    let input = std::fs::read(path).map_err(ParsingError::from)?;
    AdjacencyParser::new_arena_defaults().parse_bytes(&input)
}

/// Parses an adjacency list string into a validated [Tree].
///
/// # Example
/// ```
/// use tree_analyzer::adjacency::parse_str;
///
/// let tree = parse_str("3\n1 2\n-\n-\n")?;
/// assert_eq!(tree.root_index(), Some(0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(input: S) -> Result<Tree, AnalyzerError> {
    AdjacencyParser::new_arena_defaults().parse_str(input.as_ref())
}
