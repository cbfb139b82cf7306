//! Vertex module for rooted tree representation.

use crate::model::tree::VertexIndex;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) of a rooted tree stored in a [Tree](crate::model::Tree) arena.
///
/// A vertex only refers to other vertices by [VertexIndex]; the arena owns
/// all of them. Depending on its links, a vertex acts as
/// - **Root**: no parent
/// - **Internal**: parent and at least one child
/// - **Leaf**: no children
///
/// A single-vertex tree has a vertex that is both root and leaf.
///
/// # Invariants
/// - `index` is index in arena
/// - `parent` is set at most once during construction
/// - `children` keeps insertion order, which fixes traversal order
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Vertex {
    /// Index of this vertex in the tree arena
    index: VertexIndex,
    /// Index of the parent vertex, `None` for the root (or during construction)
    parent: Option<VertexIndex>,
    /// Indices of the child vertices in declaration order
    children: Vec<VertexIndex>,
}

impl Vertex {
    /// Creates a new vertex without parent and children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    pub fn new(index: VertexIndex) -> Self {
        Vertex {
            index,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the index of the parent, or `None` if no parent is set.
    pub fn parent_index(&self) -> Option<VertexIndex> {
        self.parent
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the children in declaration order.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this vertex has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this vertex has no parent.
    ///
    /// Only meaningful for a validated tree, where exactly one vertex has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Sets the parent, returning the previously set parent if there was one
    /// (in which case the parent is left unchanged).
    pub(crate) fn set_parent(&mut self, parent: VertexIndex) -> Result<(), VertexIndex> {
        match self.parent {
            Some(existing) => Err(existing),
            None => {
                self.parent = Some(parent);
                Ok(())
            }
        }
    }

    pub(crate) fn push_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}
