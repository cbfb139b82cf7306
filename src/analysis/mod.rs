//! Structural analytics of rooted trees.
//!
//! All measures count edges:
//! * [`branch_lengths`] - shortest and longest root-to-leaf branch
//! * [`eccentricity`] - largest distance from a vertex to any leaf
//! * [`diameter`] - largest eccentricity over all vertices, by one BFS per vertex
//! * [`diameter_two_pass`] - same value with two BFS runs
//! * [`shortest_path`] - vertex sequence between two vertices
//!
//! A leaf is a vertex without children. The root of a tree with a single
//! child is therefore not a leaf, but the maximum over all eccentricities
//! still equals the longest path in the tree, as at least one end of a
//! longest path is a leaf and the root's own eccentricity is considered.

pub mod report;

pub use report::TreeReport;

use crate::error::AnalyzerError;
use crate::model::{Tree, TreeError, VertexIndex};
use crate::traversal::{Traversal, bfs, bfs_until};
use tracing::{debug, instrument};

/// Shortest and longest branch (leaf distance) of a [Traversal].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchLengths {
    /// Minimal distance of a leaf
    pub min: usize,
    /// Maximal distance of a leaf
    pub max: usize,
}

/// Returns the minimal and maximal distance from the traversal's seed to
/// any visited leaf.
///
/// Seeded at the root, these are the shortest and longest root-to-leaf
/// branches. A single-vertex tree has both equal to `0`.
pub fn branch_lengths(tree: &Tree, traversal: &Traversal) -> BranchLengths {
    let mut leaf_distances = tree.leaves().filter_map(|leaf| traversal.distance(leaf));
    let first = leaf_distances.next().unwrap_or(0);
    let (min, max) = leaf_distances.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    BranchLengths { min, max }
}

/// Returns the largest distance from `index` to any leaf.
///
/// # Panics
/// Panics if `index` is not a vertex of `tree`.
pub fn eccentricity(tree: &Tree, index: VertexIndex) -> usize {
    branch_lengths(tree, &bfs(tree, index)).max
}

/// Returns the diameter as the maximal [eccentricity] over all vertices,
/// running one full BFS per vertex (`O(N^2)`).
///
/// # Arguments
/// * `root_max_branch` - The root's longest branch, used as starting value
#[instrument(level = "debug", skip(tree))]
pub fn diameter(tree: &Tree, root_max_branch: usize) -> usize {
    (0..tree.num_vertices())
        .map(|index| eccentricity(tree, index))
        .fold(root_max_branch, usize::max)
}

/// Same as [diameter], with the BFS runs spread over the rayon thread pool.
#[cfg(feature = "parallel")]
#[instrument(level = "debug", skip(tree))]
pub fn par_diameter(tree: &Tree, root_max_branch: usize) -> usize {
    use rayon::prelude::*;

    (0..tree.num_vertices())
        .into_par_iter()
        .map(|index| eccentricity(tree, index))
        .reduce(|| root_max_branch, usize::max)
}

/// Returns the diameter with two BFS runs (`O(N)`): the vertex farthest
/// from an arbitrary start is an end of a longest path, and the largest
/// distance from it is the diameter.
///
/// Agrees with [diameter] on every tree.
///
/// # Panics
/// Panics if the tree has no vertices.
pub fn diameter_two_pass(tree: &Tree) -> usize {
    let start = tree.root_index().unwrap_or(0);
    let (end, _) = bfs(tree, start).farthest();
    bfs(tree, end).farthest().1
}

/// Returns the vertices on the path from `source` to `target`, both included.
///
/// Runs a [bounded BFS](bfs_until) from `source` and walks the predecessors
/// back from `target`. The path has `distance(target) + 1` vertices.
///
/// # Errors
/// * [TreeError::UnknownVertex] if an endpoint is not part of the tree
/// * [TreeError::Disconnected] if `target` cannot be reached (invalid tree)
/// * [AnalyzerError::Allocation] if the path cannot be allocated
///
/// # Example
/// ```
/// use tree_analyzer::adjacency::parse_str;
/// use tree_analyzer::analysis::shortest_path;
///
/// let tree = parse_str("3\n1 2\n-\n-\n")?;
/// assert_eq!(shortest_path(&tree, 1, 2)?, vec![1, 0, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(level = "debug", skip(tree))]
pub fn shortest_path(tree: &Tree, source: VertexIndex, target: VertexIndex) -> Result<Vec<VertexIndex>, AnalyzerError> {
    for vertex in [source, target] {
        if vertex >= tree.num_vertices() {
            return Err(TreeError::UnknownVertex(vertex).into());
        }
    }

    let traversal = bfs_until(tree, source, target);
    let distance = traversal.distance(target).ok_or_else(|| TreeError::Disconnected {
        reachable: traversal.distances().iter().flatten().count(),
        num_vertices: tree.num_vertices(),
    })?;

    let mut path = Vec::new();
    path.try_reserve_exact(distance + 1)?;
    path.push(target);
    let mut current = target;
    while let Some(previous) = traversal.predecessor(current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    debug!(length = path.len(), "Reconstructed path");

    Ok(path)
}
