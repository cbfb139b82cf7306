//! Adjacency list writing for [Tree]s.

use crate::model::Tree;
use crate::parser::line_parser::END_OF_LINE_TOKEN;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Writes the given tree to a file in adjacency list format.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_adjacency_file(file: File, tree: &Tree) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(to_adjacency_string(tree).as_bytes())?;
    writer.flush()
}

/// Returns the adjacency list representation of a tree.
///
/// The first line holds the number of vertices, followed by one line per
/// vertex listing its children separated by spaces; vertices without
/// children get a line holding only `-`. Parsing the result yields the
/// same tree.
///
/// # Example
/// ```
/// use tree_analyzer::adjacency::to_adjacency_string;
/// use tree_analyzer::model::Tree;
///
/// let mut tree = Tree::new(3)?;
/// tree.add_child(0, 2)?;
/// tree.add_child(0, 1)?;
/// assert_eq!(to_adjacency_string(&tree), "3\n2 1\n-\n-\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn to_adjacency_string(tree: &Tree) -> String {
    // Rough estimate: a few digits per vertex id plus separators
    let mut adjacency = String::with_capacity(8 * (tree.num_vertices() + 1));
    adjacency.push_str(&tree.num_vertices().to_string());
    adjacency.push('\n');

    for index in 0..tree.num_vertices() {
        let children = tree[index].children();
        if children.is_empty() {
            adjacency.push_str(END_OF_LINE_TOKEN);
        } else {
            let line: Vec<String> = children.iter().map(ToString::to_string).collect();
            adjacency.push_str(&line.join(" "));
        }
        adjacency.push('\n');
    }

    adjacency
}
