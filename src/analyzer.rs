//! Configurable end-to-end analysis: parse, validate, and measure a tree.
//!
//! An [Analyzer] is set up once through an [AnalyzerBuilder] and can then
//! analyze any number of inputs. Each run produces a [TreeReport].
//!
//! # Example
//! ```
//! use tree_analyzer::{Analyzer, DiameterStrategy};
//!
//! let analyzer = Analyzer::builder()
//!     .with_max_line_length(1024)
//!     .with_diameter_strategy(DiameterStrategy::TwoPass)
//!     .build()?;
//!
//! let report = analyzer.analyze_str("3\n1 2\n-\n-\n", 1, 2)?;
//! assert_eq!(report.diameter, 2);
//! assert_eq!(report.shortest_path, vec![1, 0, 2]);
//! # Ok::<(), tree_analyzer::AnalyzerError>(())
//! ```

use crate::adjacency::AdjacencyParser;
use crate::analysis::{self, BranchLengths, TreeReport};
use crate::error::AnalyzerError;
use crate::model::{Tree, TreeError, VertexIndex};
use crate::parser::ParsingError;
use crate::traversal::bfs;
use std::path::Path;
use tracing::{info, instrument, warn};

// =#========================================================================#=
// DIAMETER STRATEGY
// =#========================================================================#=
/// Algorithm used to compute the diameter. All strategies yield the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiameterStrategy {
    /// One BFS per vertex, `O(N^2)` ([analysis::diameter]).
    #[default]
    Exhaustive,
    /// Two BFS runs, `O(N)` ([analysis::diameter_two_pass]).
    TwoPass,
    /// One BFS per vertex, spread over a thread pool.
    ///
    /// Requires the `parallel` feature; without it, runs [Exhaustive](DiameterStrategy::Exhaustive).
    Parallel,
}

impl DiameterStrategy {
    fn diameter(self, tree: &Tree, root_max_branch: usize) -> usize {
        match self {
            DiameterStrategy::Exhaustive => analysis::diameter(tree, root_max_branch),
            DiameterStrategy::TwoPass => analysis::diameter_two_pass(tree),
            #[cfg(feature = "parallel")]
            DiameterStrategy::Parallel => analysis::par_diameter(tree, root_max_branch),
            #[cfg(not(feature = "parallel"))]
            DiameterStrategy::Parallel => {
                warn!("Built without the `parallel` feature, computing diameter sequentially");
                analysis::diameter(tree, root_max_branch)
            }
        }
    }
}

// =#========================================================================#=
// ANALYZER BUILDER
// =#========================================================================#=
/// Builder for [Analyzer]s.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerBuilder {
    max_line_length: Option<usize>,
    diameter_strategy: DiameterStrategy,
}

impl AnalyzerBuilder {
    /// Creates a builder with default settings: no line length limit and
    /// [DiameterStrategy::Exhaustive].
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects input lines longer than `max` bytes (excluding the line break).
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    /// Sets the algorithm used for the diameter.
    pub fn with_diameter_strategy(mut self, strategy: DiameterStrategy) -> Self {
        self.diameter_strategy = strategy;
        self
    }

    /// Builds the [Analyzer] with the configured settings.
    ///
    /// # Errors
    /// Returns [AnalyzerError::Usage] if the maximal line length is `0`.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        if self.max_line_length == Some(0) {
            return Err(AnalyzerError::Usage("Maximal line length must be positive".to_string()));
        }
        Ok(Analyzer {
            max_line_length: self.max_line_length,
            diameter_strategy: self.diameter_strategy,
        })
    }
}

// =#========================================================================#=
// ANALYZER
// =#========================================================================#=
/// Parses adjacency lists and computes their [TreeReport].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    max_line_length: Option<usize>,
    diameter_strategy: DiameterStrategy,
}

impl Analyzer {
    /// Returns a new [AnalyzerBuilder].
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the configured diameter strategy.
    pub fn diameter_strategy(&self) -> DiameterStrategy {
        self.diameter_strategy
    }

    /// Parses and validates an adjacency list with this analyzer's settings.
    ///
    /// Accepts text as well as raw bytes; bytes after the end-of-line token
    /// `-` need not be valid UTF-8.
    pub fn parse_tree<I: AsRef<[u8]>>(&self, input: I) -> Result<Tree, AnalyzerError> {
        let mut parser = AdjacencyParser::new_arena_defaults();
        if let Some(max) = self.max_line_length {
            parser = parser.with_max_line_length(max);
        }
        parser.parse_bytes(input.as_ref())
    }

    /// Reads the adjacency list at `path` and analyzes it.
    ///
    /// # Errors
    /// Besides the errors of [analyze_str](Analyzer::analyze_str), returns
    /// [AnalyzerError::Parsing] if the file cannot be read.
    pub fn analyze_file<P: AsRef<Path>>(
        &self,
        path: P,
        first: VertexIndex,
        second: VertexIndex,
    ) -> Result<TreeReport, AnalyzerError> {
        let input = std::fs::read(path).map_err(ParsingError::from)?;
        self.analyze_bytes(&input, first, second)
    }

    /// Parses an adjacency list and analyzes it.
    ///
    /// # Errors
    /// * [AnalyzerError::Parsing] - If the input is malformed
    /// * [AnalyzerError::Tree] - If the input is no rooted tree, or a query
    ///   vertex does not occur in it
    /// * [AnalyzerError::Allocation] - If memory cannot be reserved
    pub fn analyze_str(&self, input: &str, first: VertexIndex, second: VertexIndex) -> Result<TreeReport, AnalyzerError> {
        self.analyze_bytes(input.as_bytes(), first, second)
    }

    /// Same as [analyze_str](Analyzer::analyze_str) for raw bytes, e.g. file content.
    pub fn analyze_bytes(&self, input: &[u8], first: VertexIndex, second: VertexIndex) -> Result<TreeReport, AnalyzerError> {
        let tree = self.parse_tree(input)?;
        self.analyze_tree(&tree, first, second)
    }

    /// Analyzes a tree, checking its structure first if it was not validated.
    ///
    /// Both query vertices must occur in the tree, i.e. be its root, a
    /// declared child, or a vertex with children (see [Tree::contains_vertex]).
    #[instrument(level = "debug", skip(self, tree), fields(num_vertices = tree.num_vertices()))]
    pub fn analyze_tree(&self, tree: &Tree, first: VertexIndex, second: VertexIndex) -> Result<TreeReport, AnalyzerError> {
        let root = match tree.root_index() {
            Some(root) => root,
            None => tree.check_structure()?,
        };

        for query in [first, second] {
            if query != root && !tree.contains_vertex(query) {
                warn!(query, "Query vertex not in tree");
                return Err(TreeError::UnknownVertex(query).into());
            }
        }

        let BranchLengths { min, max } = analysis::branch_lengths(tree, &bfs(tree, root));
        let diameter = self.diameter_strategy.diameter(tree, max);
        let shortest_path = analysis::shortest_path(tree, first, second)?;

        info!(root, min_branch = min, max_branch = max, diameter, "Analyzed tree");
        Ok(TreeReport {
            root,
            num_vertices: tree.num_vertices(),
            num_edges: tree.num_edges(),
            min_branch: min,
            max_branch: max,
            diameter,
            first,
            second,
            shortest_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    const SAMPLE: &str = "6\n1 2\n3\n4\n-\n5\n-\n";

    #[test]
    fn test_default_analysis() {
        let report = Analyzer::default().analyze_str(SAMPLE, 3, 5).unwrap();
        assert_eq!(report.root, 0);
        assert_eq!(report.num_vertices, 6);
        assert_eq!(report.num_edges, 5);
        assert_eq!(report.min_branch, 2);
        assert_eq!(report.max_branch, 3);
        assert_eq!(report.diameter, 5);
        assert_eq!(report.shortest_path, vec![3, 1, 0, 2, 4, 5]);
    }

    #[test]
    fn test_strategies_agree() {
        for strategy in [DiameterStrategy::Exhaustive, DiameterStrategy::TwoPass, DiameterStrategy::Parallel] {
            let analyzer = Analyzer::builder().with_diameter_strategy(strategy).build().unwrap();
            assert_eq!(analyzer.diameter_strategy(), strategy);
            assert_eq!(analyzer.analyze_str(SAMPLE, 0, 0).unwrap().diameter, 5);
        }
    }

    #[test]
    fn test_zero_line_length_rejected() {
        let err = Analyzer::builder().with_max_line_length(0).build().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Usage);
    }

    #[test]
    fn test_line_length_limit_applies() {
        let analyzer = Analyzer::builder().with_max_line_length(2).build().unwrap();
        assert!(analyzer.analyze_str("3\n1 2\n-\n-\n", 1, 2).is_err());
        assert!(analyzer.analyze_str("2\n1\n-\n", 0, 1).is_ok());
    }

    #[test]
    fn test_file_with_invalid_utf8_after_end_marker() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"2\n1 - \xff\xfe\n-\n").unwrap();
        let report = Analyzer::default().analyze_file(file.path(), 0, 1).unwrap();
        assert_eq!(report.root, 0);
        assert_eq!(report.shortest_path, vec![0, 1]);
    }

    #[test]
    fn test_invalid_utf8_token_is_format_error() {
        let err = Analyzer::default().analyze_bytes(b"2\n\xff\n-\n", 0, 1).unwrap_err();
        match err {
            AnalyzerError::Parsing(e) => {
                assert_eq!(e.kind(), &crate::parser::ParsingErrorType::InvalidToken("\u{FFFD}".into()));
                assert_eq!(e.line(), Some(2));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_query_vertex_out_of_range() {
        let err = Analyzer::default().analyze_str(SAMPLE, 0, 6).unwrap_err();
        assert!(matches!(err, AnalyzerError::Tree(TreeError::UnknownVertex(6))));
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_unvalidated_tree() {
        let mut tree = Tree::new(3).unwrap();
        tree.add_child(2, 0).unwrap();
        tree.add_child(2, 1).unwrap();
        let report = Analyzer::default().analyze_tree(&tree, 0, 1).unwrap();
        assert_eq!(report.root, 2);
        assert_eq!(report.shortest_path, vec![0, 2, 1]);
    }

    #[test]
    fn test_query_vertex_with_children_only() {
        // Vertex 2 never appears as a declared child, only as a parent
        let mut tree = Tree::new(4).unwrap();
        tree.add_child(2, 0).unwrap();
        tree.add_child(0, 1).unwrap();
        tree.add_child(2, 3).unwrap();
        assert!(tree.contains_vertex(2));
        let report = Analyzer::default().analyze_tree(&tree, 1, 2).unwrap();
        assert_eq!(report.shortest_path, vec![1, 0, 2]);
    }
}
