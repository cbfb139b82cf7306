//! Structural errors of a [Tree](crate::model::Tree).

use crate::model::VertexIndex;
use thiserror::Error;

/// Reasons why a set of vertices and parent links is not a rooted tree,
/// or why a vertex is not part of it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Vertex {vertex} out of range for a tree with {num_vertices} vertices")]
    VertexOutOfRange { vertex: VertexIndex, num_vertices: usize },

    /// A vertex was declared as child of two vertices, which implies a cycle.
    #[error("Vertex {vertex} already has parent {parent}, cannot attach it to {new_parent}")]
    MultipleParents {
        vertex: VertexIndex,
        parent: VertexIndex,
        new_parent: VertexIndex,
    },

    #[error("No root found, every vertex has a parent")]
    NoRoot,

    #[error("Found {count} vertices without parent, expected exactly one root")]
    MultipleRoots { count: usize },

    #[error("Tree with {expected} edges expected, found {found}")]
    EdgeCountMismatch { expected: usize, found: usize },

    /// Some vertices form a cycle detached from the root.
    #[error("Only {reachable} of {num_vertices} vertices are reachable from the root")]
    Disconnected { reachable: usize, num_vertices: usize },

    #[error("Vertex {0} does not occur in the tree")]
    UnknownVertex(VertexIndex),
}
