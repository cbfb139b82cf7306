//! Breadth-first search over rooted trees, treating them as undirected.
//!
//! A traversal moves from a vertex to its children and to its parent alike.
//! Each call returns a fresh [Traversal] holding distances and predecessors,
//! so the [Tree] itself is only read and independent traversals can run side
//! by side.
//!
//! Two variants are provided:
//! * [`bfs`] - visits every vertex reachable from the seed
//! * [`bfs_until`] - stops once the target has been dequeued

use crate::model::{Tree, VertexIndex};
use std::collections::VecDeque;
use tracing::trace;

// =#========================================================================#=
// TRAVERSAL
// =#========================================================================#=
/// Result of a breadth-first search from a single seed vertex.
///
/// Unvisited vertices have neither a distance nor a predecessor; the seed
/// has distance `0` and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    seed: VertexIndex,
    distances: Vec<Option<usize>>,
    predecessors: Vec<Option<VertexIndex>>,
}

impl Traversal {
    /// Returns the vertex this traversal started from.
    pub fn seed(&self) -> VertexIndex {
        self.seed
    }

    /// Returns the number of edges between the seed and `index`,
    /// or `None` if `index` was not visited.
    pub fn distance(&self, index: VertexIndex) -> Option<usize> {
        self.distances.get(index).copied().flatten()
    }

    /// Returns the vertex from which `index` was discovered,
    /// or `None` for the seed and unvisited vertices.
    pub fn predecessor(&self, index: VertexIndex) -> Option<VertexIndex> {
        self.predecessors.get(index).copied().flatten()
    }

    /// Returns `true` if `index` was visited.
    pub fn is_visited(&self, index: VertexIndex) -> bool {
        self.distance(index).is_some()
    }

    /// Returns the distances of all vertices, indexed by vertex.
    pub fn distances(&self) -> &[Option<usize>] {
        &self.distances
    }

    /// Returns a visited vertex with maximal distance from the seed together
    /// with that distance; the vertex with the smallest index wins ties.
    pub fn farthest(&self) -> (VertexIndex, usize) {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(index, distance)| distance.map(|d| (index, d)))
            .fold((self.seed, 0), |best, candidate| if candidate.1 > best.1 { candidate } else { best })
    }
}

/// Runs a full breadth-first search from `seed`.
///
/// Neighbours are visited children first (in declaration order), then the
/// parent. The work queue is strictly FIFO, so vertices are dequeued in
/// non-decreasing distance.
///
/// # Panics
/// Panics if `seed` is not a vertex of `tree`.
///
/// # Example
/// ```
/// use tree_analyzer::adjacency::parse_str;
/// use tree_analyzer::traversal::bfs;
///
/// let tree = parse_str("4\n1\n2 3\n-\n-\n")?;
/// let traversal = bfs(&tree, 3);
/// assert_eq!(traversal.distance(1), Some(1));
/// assert_eq!(traversal.distance(0), Some(2));
/// assert_eq!(traversal.distance(2), Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn bfs(tree: &Tree, seed: VertexIndex) -> Traversal {
    run(tree, seed, None)
}

/// Runs a breadth-first search from `source` that stops as soon as `target`
/// is dequeued.
///
/// The neighbours of `target` are still discovered before stopping; vertices
/// further away may remain unvisited. Predecessors lead from `target` back to
/// `source` along the unique path between them.
///
/// # Panics
/// Panics if `source` or `target` is not a vertex of `tree`.
pub fn bfs_until(tree: &Tree, source: VertexIndex, target: VertexIndex) -> Traversal {
    assert!(target < tree.num_vertices(), "target {target} not in tree");
    run(tree, source, Some(target))
}

fn run(tree: &Tree, seed: VertexIndex, target: Option<VertexIndex>) -> Traversal {
    let num_vertices = tree.num_vertices();
    assert!(seed < num_vertices, "seed {seed} not in tree");

    let mut distances = vec![None; num_vertices];
    let mut predecessors = vec![None; num_vertices];
    let mut queue = VecDeque::new();

    distances[seed] = Some(0);
    queue.push_back((seed, 0));

    while let Some((current, distance)) = queue.pop_front() {
        for neighbor in tree.neighbors(current) {
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(distance + 1);
                predecessors[neighbor] = Some(current);
                queue.push_back((neighbor, distance + 1));
            }
        }

        if target == Some(current) {
            break;
        }
    }
    trace!(seed, ?target, remaining = queue.len(), "BFS finished");

    Traversal {
        seed,
        distances,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::parse_str;

    // 0 ── 1 ── 3
    //  └── 2 ── 4 ── 5
    const SAMPLE: &str = "6\n1 2\n3\n4\n-\n5\n-\n";

    #[test]
    fn test_bfs_from_root() {
        let tree = parse_str(SAMPLE).unwrap();
        let traversal = bfs(&tree, 0);
        let distances: Vec<_> = (0..6).map(|v| traversal.distance(v).unwrap()).collect();
        assert_eq!(distances, vec![0, 1, 1, 2, 2, 3]);
        assert_eq!(traversal.predecessor(0), None);
        assert_eq!(traversal.predecessor(5), Some(4));
    }

    #[test]
    fn test_bfs_walks_up_to_parents() {
        let tree = parse_str(SAMPLE).unwrap();
        let traversal = bfs(&tree, 3);
        assert_eq!(traversal.distance(5), Some(5));
        assert_eq!(traversal.predecessor(0), Some(1));
        assert_eq!(traversal.farthest(), (5, 5));
    }

    #[test]
    fn test_bfs_until_stops_early() {
        let tree = parse_str(SAMPLE).unwrap();
        let traversal = bfs_until(&tree, 0, 1);
        // 1 dequeued right after 0, so its neighbour 3 is discovered ...
        assert_eq!(traversal.distance(3), Some(2));
        // ... but 2's children are never reached
        assert!(!traversal.is_visited(4));
        assert!(!traversal.is_visited(5));
    }

    #[test]
    fn test_bfs_until_seed_is_target() {
        let tree = parse_str(SAMPLE).unwrap();
        let traversal = bfs_until(&tree, 4, 4);
        assert_eq!(traversal.distance(4), Some(0));
        assert_eq!(traversal.distance(2), Some(1));
        assert!(!traversal.is_visited(0));
    }

    #[test]
    #[should_panic]
    fn test_bfs_seed_out_of_range() {
        let tree = parse_str(SAMPLE).unwrap();
        bfs(&tree, 6);
    }
}
