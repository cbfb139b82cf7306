//! Result record of a complete tree analysis.

use crate::model::VertexIndex;
use std::fmt;

/// Structural properties of a tree and the path between two query vertices.
///
/// Displayed in the line-oriented format of the command line tool:
/// ```text
/// Root Vertex: 0
/// Vertices Count: 3
/// Edges Count: 2
/// Length of Minimal Branch: 1
/// Length of Maximal Branch: 1
/// Diameter Length: 2
/// Shortest Path Between 1 and 2: 1 0 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeReport {
    /// Index of the root vertex
    pub root: VertexIndex,
    /// Number of vertices
    pub num_vertices: usize,
    /// Number of edges, always `num_vertices - 1`
    pub num_edges: usize,
    /// Length of the shortest root-to-leaf branch
    pub min_branch: usize,
    /// Length of the longest root-to-leaf branch
    pub max_branch: usize,
    /// Length of the longest path in the tree
    pub diameter: usize,
    /// First query vertex, start of `shortest_path`
    pub first: VertexIndex,
    /// Second query vertex, end of `shortest_path`
    pub second: VertexIndex,
    /// Vertices on the path from `first` to `second`, both included
    pub shortest_path: Vec<VertexIndex>,
}

impl TreeReport {
    /// Returns the number of edges on the shortest path between the query vertices.
    pub fn path_length(&self) -> usize {
        self.shortest_path.len().saturating_sub(1)
    }
}

impl fmt::Display for TreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root Vertex: {}", self.root)?;
        writeln!(f, "Vertices Count: {}", self.num_vertices)?;
        writeln!(f, "Edges Count: {}", self.num_edges)?;
        writeln!(f, "Length of Minimal Branch: {}", self.min_branch)?;
        writeln!(f, "Length of Maximal Branch: {}", self.max_branch)?;
        writeln!(f, "Diameter Length: {}", self.diameter)?;

        let path: Vec<String> = self.shortest_path.iter().map(ToString::to_string).collect();
        writeln!(f, "Shortest Path Between {} and {}: {}", self.first, self.second, path.join(" "))
    }
}
