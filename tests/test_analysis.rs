use proptest::prelude::*;
use tree_analyzer::adjacency::{parse_file, parse_str, to_adjacency_string, write_adjacency_file};
use tree_analyzer::analysis::{branch_lengths, diameter, diameter_two_pass, eccentricity, shortest_path};
use tree_analyzer::model::{Tree, TreeError};
use tree_analyzer::traversal::{bfs, bfs_until};
use tree_analyzer::{Analyzer, AnalyzerError, DiameterStrategy, ErrorCategory, analyze_file, analyze_str};

// --- SCENARIOS ---
#[test]
fn test_root_with_two_leaves() {
    let report = analyze_str("3\n1 2\n-\n-\n", 1, 2).unwrap();
    assert_eq!(report.root, 0);
    assert_eq!(report.num_vertices, 3);
    assert_eq!(report.num_edges, 2);
    assert_eq!(report.min_branch, 1);
    assert_eq!(report.max_branch, 1);
    assert_eq!(report.diameter, 2);
    assert_eq!(report.shortest_path, vec![1, 0, 2]);
}

#[test]
fn test_vertex_with_two_parents() {
    let err = analyze_str("3\n1 2\n2\n-\n", 0, 1).unwrap_err();
    assert!(matches!(err, AnalyzerError::Tree(TreeError::MultipleParents { vertex: 2, .. })));
    assert_eq!(err.category(), ErrorCategory::Input);
}

#[test]
fn test_non_positive_vertex_count() {
    for input in ["0\n", "-3\n1\n"] {
        let err = analyze_str(input, 0, 0).unwrap_err();
        assert!(matches!(err, AnalyzerError::Parsing(_)), "{input:?} gave {err:?}");
    }
}

#[test]
fn test_one_edge_short() {
    // Four vertices, two edges
    let err = analyze_str("4\n1\n2\n-\n-\n", 0, 2).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
    assert!(err.to_string().contains("Expected 3 edges, found 2"));
}

#[test]
fn test_path_from_root_to_leaf() {
    // 0 ── 1 ── 2 ── 3
    //  └── 4
    let tree = parse_str("5\n1 4\n2\n3\n-\n-\n").unwrap();
    let report = Analyzer::default().analyze_tree(&tree, 0, 3).unwrap();
    assert_eq!(report.shortest_path, vec![0, 1, 2, 3]);
    assert_eq!(report.path_length(), tree.depth_of(3));
    assert_eq!(report.min_branch, 1);
    assert_eq!(report.max_branch, 3);
    assert_eq!(report.diameter, 4);
}

#[test]
fn test_query_vertex_is_root_and_only_vertex() {
    let report = analyze_str("1\n-\n", 0, 0).unwrap();
    assert_eq!(report.num_edges, 0);
    assert_eq!(report.diameter, 0);
    assert_eq!(report.shortest_path, vec![0]);
}

#[test]
fn test_query_vertex_not_in_tree() {
    let err = analyze_str("2\n1\n-\n", 1, 7).unwrap_err();
    assert!(matches!(err, AnalyzerError::Tree(TreeError::UnknownVertex(7))));
}

#[test]
fn test_output_format() {
    let report = analyze_str("4\n-\n0 3\n-\n2\n", 0, 2).unwrap();
    let expected = "Root Vertex: 1\n\
                    Vertices Count: 4\n\
                    Edges Count: 3\n\
                    Length of Minimal Branch: 1\n\
                    Length of Maximal Branch: 2\n\
                    Diameter Length: 3\n\
                    Shortest Path Between 0 and 2: 0 1 3 2\n";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn test_eccentricity_of_inner_vertex() {
    let tree = parse_str("6\n1 2\n3\n4\n-\n5\n-\n").unwrap();
    // From 2: leaf 5 at distance 2, leaf 3 at distance 3
    assert_eq!(eccentricity(&tree, 2), 3);
}

#[test]
fn test_file_round_trip() {
    let tree = parse_str("5\n-\n0 3\n-\n2 4\n-\n").unwrap();
    let file = tempfile::NamedTempFile::new().unwrap();
    write_adjacency_file(file.reopen().unwrap(), &tree).unwrap();

    assert_eq!(parse_file(file.path()).unwrap(), tree);
    let report = analyze_file(file.path(), 0, 4).unwrap();
    assert_eq!(report.root, 1);
    assert_eq!(report.shortest_path, vec![0, 1, 3, 4]);
}

#[test]
fn test_missing_file() {
    let err = analyze_file("does/not/exist.txt", 0, 0).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Input);
    assert!(err.to_string().contains("IO error"));
}

// --- PROPERTIES ---
/// Random valid trees with shuffled labels, so the root is not always 0.
fn arb_tree() -> impl Strategy<Value = Tree> {
    (1usize..48)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(any::<usize>(), n - 1),
                Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            )
        })
        .prop_map(|(raw_parents, labels)| {
            let mut tree = Tree::new(labels.len()).unwrap();
            for (i, raw) in raw_parents.iter().enumerate() {
                let child = i + 1;
                tree.add_child(labels[raw % child], labels[child]).unwrap();
            }
            tree.validate().unwrap();
            tree
        })
}

fn arb_tree_with_queries() -> impl Strategy<Value = (Tree, usize, usize)> {
    arb_tree().prop_flat_map(|tree| {
        let n = tree.num_vertices();
        (Just(tree), 0..n, 0..n)
    })
}

proptest! {
    #[test]
    fn prop_tree_invariants(tree in arb_tree()) {
        let roots = (0..tree.num_vertices()).filter(|&v| tree[v].is_root()).count();
        prop_assert_eq!(roots, 1);
        prop_assert_eq!(tree.num_edges() + 1, tree.num_vertices());
        prop_assert_eq!(tree.pre_order_iter().count(), tree.num_vertices());
    }

    #[test]
    fn prop_bfs_is_deterministic(tree in arb_tree()) {
        let root = tree.root_index().unwrap();
        let first = bfs(&tree, root);
        prop_assert_eq!(&first, &bfs(&tree, root));
        for v in 0..tree.num_vertices() {
            prop_assert_eq!(first.distance(v), Some(tree.depth_of(v)));
        }
    }

    #[test]
    fn prop_diameter_bounds(tree in arb_tree()) {
        let root = tree.root_index().unwrap();
        let lengths = branch_lengths(&tree, &bfs(&tree, root));
        let exhaustive = diameter(&tree, lengths.max);
        prop_assert!(lengths.min <= lengths.max);
        prop_assert!(exhaustive >= lengths.max);
        prop_assert_eq!(exhaustive, diameter_two_pass(&tree));
    }

    #[test]
    fn prop_shortest_path((tree, source, target) in arb_tree_with_queries()) {
        let path = shortest_path(&tree, source, target).unwrap();
        let distance = bfs(&tree, source).distance(target).unwrap();
        prop_assert_eq!(path.len(), distance + 1);
        prop_assert_eq!(path.first(), Some(&source));
        prop_assert_eq!(path.last(), Some(&target));
        for pair in path.windows(2) {
            prop_assert!(tree.neighbors(pair[0]).any(|n| n == pair[1]));
        }
        // The bounded search agrees with the full one on the target
        prop_assert_eq!(bfs_until(&tree, source, target).distance(target), Some(distance));
    }

    #[test]
    fn prop_round_trip((tree, first, second) in arb_tree_with_queries()) {
        let adjacency = to_adjacency_string(&tree);
        let reparsed = parse_str(&adjacency).unwrap();
        prop_assert_eq!(&reparsed, &tree);

        let analyzer = Analyzer::builder()
            .with_diameter_strategy(DiameterStrategy::TwoPass)
            .build()
            .unwrap();
        let from_text = analyzer.analyze_str(&adjacency, first, second).unwrap();
        let from_tree = Analyzer::default().analyze_tree(&tree, first, second).unwrap();
        prop_assert_eq!(from_text, from_tree);
    }
}
