//! Provides [TreeBuilder] implementation struct for [Tree].

use crate::error::AnalyzerError;
use crate::model::tree_builder::TreeBuilder;
use crate::model::{Tree, VertexIndex};
use crate::parser::{ParsingError, ParsingErrorType};
use tracing::{debug, warn};

/// Builder that constructs validated [Tree] instances.
///
/// [ArenaTreeBuilder] allocates the arena for all vertices in
/// [init_next](TreeBuilder::init_next) and links children as they are
/// declared, rejecting a second parent for any vertex right away. It counts
/// lines and edges on the fly; [finish_tree](TreeBuilder::finish_tree)
/// checks both counts and then [validates](Tree::validate) the tree, so any
/// returned tree has its root set.
///
/// # Example
/// ```
/// use tree_analyzer::model::{ArenaTreeBuilder, TreeBuilder};
///
/// let mut builder = ArenaTreeBuilder::new();
/// builder.init_next(3)?;
/// builder.add_children(0, &[1, 2])?;
/// builder.add_children(1, &[])?;
/// builder.add_children(2, &[])?;
/// let tree = builder.finish_tree()?;
/// assert_eq!(tree.root_index(), Some(0));
/// # Ok::<(), tree_analyzer::AnalyzerError>(())
/// ```
pub struct ArenaTreeBuilder {
    current_tree: Option<Tree>,
    num_lines: usize,
    num_edges: usize,
}

impl ArenaTreeBuilder {
    /// Creates a new builder in the empty state.
    pub fn new() -> Self {
        Self {
            current_tree: None,
            num_lines: 0,
            num_edges: 0,
        }
    }

    /// Returns `true` while a tree is under construction, i.e. between
    /// [init_next](TreeBuilder::init_next) and the end of construction.
    pub fn is_building(&self) -> bool {
        self.current_tree.is_some()
    }

    fn not_initialized() -> AnalyzerError {
        ParsingError::without_context(ParsingErrorType::BuilderNotInitialized).into()
    }
}

impl Default for ArenaTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder for ArenaTreeBuilder {
    type Tree = Tree;

    fn init_next(&mut self, num_vertices: usize) -> Result<(), AnalyzerError> {
        self.current_tree = Some(Tree::new(num_vertices)?);
        self.num_lines = 0;
        self.num_edges = 0;
        Ok(())
    }

    fn add_children(&mut self, parent: VertexIndex, children: &[VertexIndex]) -> Result<(), AnalyzerError> {
        let tree = self.current_tree.as_mut().ok_or_else(Self::not_initialized)?;

        for &child in children {
            if let Err(err) = tree.add_child(parent, child) {
                warn!("Rejecting child {child} of vertex {parent}: {err}");
                self.current_tree = None;
                return Err(err.into());
            }
            self.num_edges += 1;
        }
        self.num_lines += 1;

        Ok(())
    }

    fn finish_tree(&mut self) -> Result<Tree, AnalyzerError> {
        let mut tree = self.current_tree.take().ok_or_else(Self::not_initialized)?;
        let num_vertices = tree.num_vertices();
        debug!(num_vertices, num_lines = self.num_lines, num_edges = self.num_edges, "Finishing tree");

        if self.num_lines != num_vertices {
            return Err(ParsingError::without_context(ParsingErrorType::LineCountMismatch {
                expected: num_vertices,
                found: self.num_lines,
            })
            .into());
        }

        if self.num_edges + 1 != num_vertices {
            return Err(ParsingError::without_context(ParsingErrorType::EdgeCountMismatch {
                expected: num_vertices.saturating_sub(1),
                found: self.num_edges,
            })
            .into());
        }

        tree.validate()?;
        Ok(tree)
    }

    fn reset(&mut self) {
        if self.current_tree.take().is_some() {
            debug!(num_lines = self.num_lines, "Discarding partial tree");
        }
        self.num_lines = 0;
        self.num_edges = 0;
    }
}
