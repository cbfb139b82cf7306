//! Parser turning adjacency list text into trees.

use crate::error::AnalyzerError;
use crate::model::tree_builder::TreeBuilder;
use crate::model::ArenaTreeBuilder;
use crate::parser::{LineParser, ParsingError, ParsingErrorType};
use tracing::debug;

// =#========================================================================#=
// ADJACENCY PARSER
// =#========================================================================#=
/// Parser for adjacency lists, generic over the [TreeBuilder] it feeds.
///
/// The parser reads the vertex count, initializes the builder, and hands
/// each vertex line's children to [TreeBuilder::add_children], aborting on
/// the first error. Lines beyond the declared number of vertices are
/// rejected as soon as they are encountered.
///
/// # Example
/// ```
/// use tree_analyzer::adjacency::AdjacencyParser;
///
/// let mut parser = AdjacencyParser::new_arena_defaults();
/// let tree = parser.parse_str("3\n1 2\n-\n-\n")?;
/// assert_eq!(tree.root_index(), Some(0));
/// # Ok::<(), tree_analyzer::AnalyzerError>(())
/// ```
pub struct AdjacencyParser<T: TreeBuilder> {
    tree_builder: T,
    max_line_length: Option<usize>,
}

impl AdjacencyParser<ArenaTreeBuilder> {
    /// Creates a parser building [Tree](crate::model::Tree)s with default settings.
    pub fn new_arena_defaults() -> Self {
        Self::new(ArenaTreeBuilder::new())
    }
}

impl<T: TreeBuilder> AdjacencyParser<T> {
    /// Creates a parser feeding the given builder.
    pub fn new(tree_builder: T) -> Self {
        Self {
            tree_builder,
            max_line_length: None,
        }
    }

    /// Rejects lines longer than `max` bytes.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    /// Returns the builder, e.g. to inspect custom builder state.
    pub fn into_tree_builder(self) -> T {
        self.tree_builder
    }

    /// Parses a complete adjacency list.
    ///
    /// # Errors
    /// Returns the first [ParsingError] of the input, or whatever the builder
    /// rejects (structural errors, failed allocation).
    pub fn parse_str(&mut self, input: &str) -> Result<T::Tree, AnalyzerError> {
        self.parse_bytes(input.as_bytes())
    }

    /// Parses a complete adjacency list given as raw bytes, e.g. file content.
    ///
    /// Bytes after the end-of-line token `-` are not inspected, so they need
    /// not be valid UTF-8.
    ///
    /// On any error the builder is [reset](TreeBuilder::reset), releasing a
    /// partially built tree right away.
    ///
    /// # Errors
    /// Same as [parse_str](AdjacencyParser::parse_str).
    pub fn parse_bytes(&mut self, input: &[u8]) -> Result<T::Tree, AnalyzerError> {
        let result = self.build_tree(input);
        if result.is_err() {
            self.tree_builder.reset();
        }
        result
    }

    fn build_tree(&mut self, input: &[u8]) -> Result<T::Tree, AnalyzerError> {
        let mut line_parser = LineParser::for_bytes(input);
        if let Some(max) = self.max_line_length {
            line_parser = line_parser.with_max_line_length(max);
        }

        let num_vertices = line_parser.parse_vertex_count()?;
        debug!(num_vertices, "Parsed vertex count");
        self.tree_builder.init_next(num_vertices)?;

        let mut parent = 0;
        while let Some(children) = line_parser.parse_children(num_vertices)? {
            if parent >= num_vertices {
                return Err(ParsingError::at_line(
                    ParsingErrorType::TooManyLines { num_vertices },
                    line_parser.line_number(),
                    "",
                )
                .into());
            }
            self.tree_builder.add_children(parent, &children)?;
            parent += 1;
        }
        debug!(num_lines = line_parser.line_number(), "Consumed input");

        self.tree_builder.finish_tree()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VertexIndex;

    /// Builder that only records the calls it receives
    #[derive(Default)]
    struct RecordingBuilder {
        num_vertices: usize,
        lines: Vec<(VertexIndex, Vec<VertexIndex>)>,
    }

    impl TreeBuilder for RecordingBuilder {
        type Tree = Vec<(VertexIndex, Vec<VertexIndex>)>;

        fn init_next(&mut self, num_vertices: usize) -> Result<(), AnalyzerError> {
            self.num_vertices = num_vertices;
            Ok(())
        }

        fn add_children(&mut self, parent: VertexIndex, children: &[VertexIndex]) -> Result<(), AnalyzerError> {
            self.lines.push((parent, children.to_vec()));
            Ok(())
        }

        fn finish_tree(&mut self) -> Result<Self::Tree, AnalyzerError> {
            Ok(std::mem::take(&mut self.lines))
        }
    }

    #[test]
    fn test_custom_builder_receives_every_line() {
        let mut parser = AdjacencyParser::new(RecordingBuilder::default());
        let lines = parser.parse_str("3\n\n2 - 1\n-\n").unwrap();
        assert_eq!(lines, vec![(0, vec![]), (1, vec![2]), (2, vec![])]);
        assert_eq!(parser.into_tree_builder().num_vertices, 3);
    }

    #[test]
    fn test_builder_reset_after_parsing_error() {
        for input in ["3\n1 x\n-\n-\n", "2\n1\n-\n-\n", "3\n1 2\n-\n"] {
            let mut parser = AdjacencyParser::new_arena_defaults();
            assert!(parser.parse_str(input).is_err(), "{input:?} parsed");
            assert!(!parser.into_tree_builder().is_building(), "{input:?} kept a partial tree");
        }
    }

    #[test]
    fn test_bytes_after_end_marker_need_not_be_utf8() {
        let mut parser = AdjacencyParser::new_arena_defaults();
        let tree = parser.parse_bytes(b"2\n1 - \xff\xfe\n-\n").unwrap();
        assert_eq!(tree.root_index(), Some(0));
    }

    #[test]
    fn test_too_many_lines() {
        let mut parser = AdjacencyParser::new_arena_defaults();
        let err = parser.parse_str("2\n1\n-\n-\n").unwrap_err();
        match err {
            AnalyzerError::Parsing(e) => {
                assert_eq!(e.kind(), &ParsingErrorType::TooManyLines { num_vertices: 2 });
                assert_eq!(e.line(), Some(4));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
