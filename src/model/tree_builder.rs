//! Trait for constructing trees while parsing adjacency lists.
//!
//! The [`TreeBuilder`] trait decouples the
//! [AdjacencyParser](crate::adjacency::AdjacencyParser) from concrete tree
//! representations. The parser calls builder methods line by line, and the
//! builder assembles whatever structure it wants and decides which
//! structural violations to reject.
//!
//! # Built-in implementations
//! * [`ArenaTreeBuilder`] - Builds a validated [`Tree`]
//!
//! # Builder lifecycle
//! A builder can construct multiple trees sequentially:
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ add_children()* ──→ finish_tree() ──→ Empty
//!   ↑                            │                                              │
//!   ├───────── reset() ←─────────┘ (on error)                                   │
//!   └───────────────────────────────────────────────────────────────────────────┘
//! ```
// Imports for doc links
#[allow(unused_imports)]
use crate::model::{ArenaTreeBuilder, Tree};

use crate::error::AnalyzerError;
use crate::model::VertexIndex;

// =#========================================================================#=
// TREE BUILDER (trait)
// =#========================================================================#=
/// Abstraction for constructing trees during parsing.
///
/// The parser is generic over this trait, calling its methods as it
/// encounters the vertex count and the child lists in the input. This allows
/// the same parser to build different tree representations, or none at all
/// (e.g. to only gather statistics).
///
/// # Implementing this trait
/// The parser drives the lifecycle:
///
/// 1. [`init_next`](Self::init_next) -> prepare for a tree with `N` vertices
/// 2. [`add_children`](Self::add_children) -> once per vertex line, in
///    vertex order, also for lines without children
/// 3. [`finish_tree`](Self::finish_tree) -> check and return the tree
///
/// After `finish_tree`, the builder returns to an empty state,
/// ready for `init_next` again. Any error aborts construction: the parser
/// calls [`reset`](Self::reset) and does not call the builder again for
/// that input.
pub trait TreeBuilder {
    /// The tree type produced by this builder.
    type Tree;

    /// Prepares the builder for constructing a new tree with `num_vertices`
    /// vertices, identified by `0..num_vertices`.
    ///
    /// # Errors
    /// Implementations that allocate upfront report failed allocation here.
    fn init_next(&mut self, num_vertices: usize) -> Result<(), AnalyzerError>;

    /// Declares `children` (in order) as the children of `parent`.
    ///
    /// # Errors
    /// Implementations reject children that already have a parent.
    fn add_children(&mut self, parent: VertexIndex, children: &[VertexIndex]) -> Result<(), AnalyzerError>;

    /// Finalizes the building process and returns the resulting tree.
    ///
    /// Transitions builder from a "construction" state to an "empty" state.
    ///
    /// # Errors
    /// Implementations reject trees with missing lines or edges or an
    /// invalid structure.
    fn finish_tree(&mut self) -> Result<Self::Tree, AnalyzerError>;

    /// Discards any partially built tree and returns to the empty state.
    ///
    /// Called by the parser whenever parsing fails. The default does nothing,
    /// for builders that hold no per-tree state.
    fn reset(&mut self) {}
}
