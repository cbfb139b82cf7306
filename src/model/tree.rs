//! Tree module for rooted tree representation.
//!
//! This module provides the core data structure [Tree], which stores all
//! [Vertex] records of a run in one arena, and [VertexIndex] used to
//! reference them.

use crate::model::tree_error::TreeError;
use crate::model::vertex::Vertex;
use std::collections::TryReserveError;
use std::fmt;
use tracing::warn;

/// Index of a vertex in a tree (arena); equals the vertex identifier of the input.
pub type VertexIndex = usize;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A rooted tree of arbitrary degree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by [VertexIndex],
/// so parent and child links are plain indices and never ownership. Dropping
/// the tree releases all vertices at once.
///
/// # Structure
/// - Vertices are the dense range `0..num_vertices`, allocated upfront
/// - Each vertex has at most one parent; children keep insertion order
/// - Index of root is known only after [Tree::validate] succeeded
///
/// # Construction
/// Create a tree with a fixed number of vertices, then link children to
/// parents with [Tree::add_child]. Finally call [Tree::validate].
///
/// # Example
/// ```
/// use tree_analyzer::model::Tree;
///
/// let mut tree = Tree::new(3)?;
/// tree.add_child(0, 1)?;
/// tree.add_child(0, 2)?;
/// assert_eq!(tree.validate()?, 0);
/// assert_eq!(tree.num_edges(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree, set by validation
    root_index: Option<VertexIndex>,
}

// ============================================================================
// New, Construction, Validation (pub)
// ============================================================================
impl Tree {
    /// Creates a new tree with `num_vertices` unlinked vertices.
    ///
    /// # Errors
    /// Returns [TryReserveError] if the arena cannot be allocated.
    pub fn new(num_vertices: usize) -> Result<Self, TryReserveError> {
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(num_vertices)?;
        vertices.extend((0..num_vertices).map(Vertex::new));

        Ok(Tree {
            vertices,
            root_index: None,
        })
    }

    /// Links `child` to `parent`, appending it to the parent's children.
    ///
    /// # Errors
    /// * [TreeError::VertexOutOfRange] if either index is not in the tree
    /// * [TreeError::MultipleParents] if `child` already has a parent
    pub fn add_child(&mut self, parent: VertexIndex, child: VertexIndex) -> Result<(), TreeError> {
        let num_vertices = self.num_vertices();
        for vertex in [parent, child] {
            if vertex >= num_vertices {
                return Err(TreeError::VertexOutOfRange { vertex, num_vertices });
            }
        }

        self.vertices[child]
            .set_parent(parent)
            .map_err(|existing| TreeError::MultipleParents {
                vertex: child,
                parent: existing,
                new_parent: parent,
            })?;
        self.vertices[parent].push_child(child);
        self.root_index = None;

        Ok(())
    }

    /// Validates the tree structure and determines the root.
    ///
    /// Checks:
    /// - Exactly one vertex has no parent (the root)
    /// - Number of edges (sum of child counts) is `num_vertices - 1`
    /// - Every vertex is reachable from the root
    ///
    /// # Returns
    /// Index of the root on success, which is then also stored in the tree.
    pub fn validate(&mut self) -> Result<VertexIndex, TreeError> {
        let root = self.check_structure().inspect_err(|err| warn!("Tree validation failed: {err}"))?;
        self.root_index = Some(root);
        Ok(root)
    }

    /// Returns `true` if [Tree::validate] would succeed.
    pub fn is_valid(&self) -> bool {
        self.check_structure().is_ok()
    }

    pub(crate) fn check_structure(&self) -> Result<VertexIndex, TreeError> {
        let num_vertices = self.num_vertices();

        let mut roots = self.vertices.iter().filter(|v| v.is_root());
        let root = roots.next().ok_or(TreeError::NoRoot)?.index();
        let extra_roots = roots.count();
        if extra_roots > 0 {
            return Err(TreeError::MultipleRoots { count: extra_roots + 1 });
        }

        let expected = num_vertices - 1;
        let found = self.num_edges();
        if found != expected {
            return Err(TreeError::EdgeCountMismatch { expected, found });
        }

        // With one root and n-1 edges, only cycles detached from the root remain
        let reachable = PreOrderIter::starting_at(self, root).count();
        if reachable != num_vertices {
            return Err(TreeError::Disconnected { reachable, num_vertices });
        }

        Ok(root)
    }
}

// ============================================================================
// Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Returns the index of the root, or `None` if the tree has not been validated.
    pub fn root_index(&self) -> Option<VertexIndex> {
        self.root_index
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the tree has not been validated yet.
    pub fn root(&self) -> &Vertex {
        let index = self.root_index.expect("root not set, validate tree first");
        &self[index]
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges, i.e. parent-child links, in this tree.
    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(Vertex::num_children).sum()
    }

    /// Returns the number of leaves (vertices without children).
    pub fn num_leaves(&self) -> usize {
        self.leaves().count()
    }

    /// Returns an iterator over the indices of all leaves, in index order.
    pub fn leaves(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices.iter().filter(|v| v.is_leaf()).map(Vertex::index)
    }

    /// Returns whether `index` occurs in the input this tree was built from,
    /// that is, as the root, as a declared child, or as a parent.
    pub fn contains_vertex(&self, index: VertexIndex) -> bool {
        self.vertices.get(index).is_some_and(|v| {
            self.root_index == Some(index) || v.has_parent() || !v.is_leaf()
        })
    }

    /// Returns the undirected neighbours of a vertex:
    /// its children in declaration order, then its parent.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn neighbors(&self, index: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        let vertex = &self[index];
        vertex.children().iter().copied().chain(vertex.parent_index())
    }

    /// Returns the depth of a vertex, i.e. the number of edges to the root,
    /// found by following parent links.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn depth_of(&self, index: VertexIndex) -> usize {
        let mut depth = 0;
        let mut current = &self[index];
        // Bounded by the number of vertices so that an invalid tree cannot loop
        while let Some(parent) = current.parent_index() {
            if depth >= self.num_vertices() {
                break;
            }
            depth += 1;
            current = &self[parent];
        }
        depth
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Yields nothing if the tree has not been validated.
    ///
    /// # Example
    /// ```
    /// use tree_analyzer::model::Tree;
    ///
    /// let mut tree = Tree::new(4)?;
    /// tree.add_child(2, 0)?;
    /// tree.add_child(2, 3)?;
    /// tree.add_child(0, 1)?;
    /// tree.validate()?;
    ///
    /// let indices: Vec<_> = tree.pre_order_iter().map(|v| v.index()).collect();
    /// assert_eq!(indices, vec![2, 0, 1, 3]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        match self.root_index {
            Some(root) => PreOrderIter::starting_at(self, root),
            None => PreOrderIter { tree: self, stack: Vec::new() },
        }
    }
}

impl std::ops::Index<VertexIndex> for Tree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
/// Renders the tree structure, e.g.:
/// ```text
/// Tree with 5 vertices (4 edges):
/// [0]
///   ├─ [1]
///   │  └─ [3]
///   ├─ [2]
///   └─ [4]
/// ```
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree with {} vertices ({} edges):", self.num_vertices(), self.num_edges())?;

        let Some(root) = self.root_index else {
            return writeln!(f, "(No root set)");
        };

        // (index, prefix, is_last); explicit stack as paths can be very deep
        let mut stack = vec![(root, String::new(), true)];
        while let Some((index, prefix, is_last)) = stack.pop() {
            let is_root = index == root;
            let connector = if is_root { "" } else if is_last { "└─ " } else { "├─ " };
            writeln!(f, "{prefix}{connector}[{index}]")?;

            let child_prefix = if is_root {
                "  ".to_string()
            } else {
                format!("{}{}  ", prefix, if is_last { " " } else { "│" })
            };

            let children = self[index].children();
            for (i, &child) in children.iter().enumerate().rev() {
                stack.push((child, child_prefix.clone(), i + 1 == children.len()));
            }
        }

        Ok(())
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited before any of its descendants, children in declaration order.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn starting_at(tree: &'a Tree, start: VertexIndex) -> Self {
        PreOrderIter { tree, stack: vec![start] }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Push children in reverse, so first child is processed first
        self.stack.extend(vertex.children().iter().rev());

        Some(vertex)
    }
}
