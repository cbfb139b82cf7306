//! Tree analyzer is a library to validate and measure rooted trees given
//! as adjacency lists.
//!
//! Core functionality provided:
//! - Adjacency lists: Parse (and write) the line-oriented format in which
//!   each line lists the children of one vertex. See [crate::adjacency].
//! - Validation: The parsed graph must be a rooted tree, i.e. have a single
//!   root, one parent per vertex, `N-1` edges, and all vertices connected.
//! - Tree model: [Tree] uses the arena pattern, so vertices refer to each
//!   other only by index. See [crate::model].
//! - Analytics: Root, vertex and edge counts, shortest and longest
//!   root-to-leaf branch, diameter, and the shortest path between two
//!   vertices. See [crate::analysis] and [crate::traversal].
//! - Configurability: Line length limit and choice of
//!   [diameter algorithm](DiameterStrategy), see [AnalyzerBuilder].
//!
//! # Usage patterns
//! 1. [analyze_file] and [analyze_str] run a complete analysis with
//!    default settings.
//! 2. Configure an [Analyzer] through [Analyzer::builder] for full control.
//!
//! ## Example Default Configuration
//! ```
//! use tree_analyzer::analyze_str;
//!
//! let report = analyze_str("4\n1 2\n3\n-\n-\n", 3, 2)?;
//! assert_eq!(report.root, 0);
//! assert_eq!(report.min_branch, 1);
//! assert_eq!(report.max_branch, 2);
//! assert_eq!(report.diameter, 3);
//! assert_eq!(report.shortest_path, vec![3, 1, 0, 2]);
//! # Ok::<(), tree_analyzer::AnalyzerError>(())
//! ```
//!
//! ## Example Analyzer Configuration
//! ```no_run
//! use tree_analyzer::{Analyzer, DiameterStrategy};
//!
//! let analyzer = Analyzer::builder()
//!     .with_max_line_length(1024)
//!     .with_diameter_strategy(DiameterStrategy::TwoPass)
//!     .build()?;
//!
//! let report = analyzer.analyze_file("tree.txt", 0, 5)?;
//! print!("{report}");
//! # Ok::<(), tree_analyzer::AnalyzerError>(())
//! ```

pub mod adjacency;
pub mod analysis;
pub mod analyzer;
pub mod error;
pub mod model;
pub mod parser;
pub mod traversal;

pub use crate::analysis::TreeReport;
pub use crate::analyzer::{Analyzer, AnalyzerBuilder, DiameterStrategy};
pub use crate::error::{AnalyzerError, ErrorCategory};
pub use crate::model::Tree;

use crate::model::VertexIndex;
use std::path::Path;

// ============================================================================
// Quick Analysis API
// ============================================================================
/// Analyzes the adjacency list file at `path` using default settings.
///
/// See [`Analyzer::analyze_file`] for full documentation.
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    first: VertexIndex,
    second: VertexIndex,
) -> Result<TreeReport, AnalyzerError> {
    Analyzer::default().analyze_file(path, first, second)
}

/// Analyzes an adjacency list string using default settings.
///
/// See [`Analyzer::analyze_str`] for full documentation.
pub fn analyze_str<S: AsRef<str>>(input: S, first: VertexIndex, second: VertexIndex) -> Result<TreeReport, AnalyzerError> {
    Analyzer::default().analyze_str(input.as_ref(), first, second)
}
