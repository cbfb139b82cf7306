//! Data model for rooted trees.
//!
//! # Tree representation
//! Trees are represented by [Tree], which uses the arena pattern to store
//! [Vertex] records, referenced by [VertexIndex]. A vertex knows its parent
//! (if any) and its children in declaration order; neither link owns
//! anything, so the arena can be released in one go.
//!
//! # Building trees
//! Trees are typically constructed during parsing via the [TreeBuilder]
//! trait, which decouples the parser from the concrete tree type:
//!
//! - [ArenaTreeBuilder] → [Tree] (validated)
//!
//! Structural violations are reported as [TreeError].

pub mod arena_tree_builder;
pub mod tree;
pub mod tree_builder;
pub mod tree_error;
pub mod vertex;

pub use arena_tree_builder::ArenaTreeBuilder;
pub use tree::{PreOrderIter, Tree, VertexIndex};
pub use tree_builder::TreeBuilder;
pub use tree_error::TreeError;
pub use vertex::Vertex;
