use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tree_analyzer::adjacency::{parse_str, to_adjacency_string};
use tree_analyzer::analysis::{diameter, diameter_two_pass};
use tree_analyzer::model::Tree;

const SIZES: &[usize] = &[100, 1_000];

/// Spine `0 - 1 - ... - n/2-1`, each spine vertex with one leaf attached.
fn caterpillar(num_vertices: usize) -> Tree {
    let spine = num_vertices / 2;
    let mut tree = Tree::new(num_vertices).unwrap();
    for i in 1..spine {
        tree.add_child(i - 1, i).unwrap();
    }
    for leaf in spine..num_vertices {
        tree.add_child((leaf - spine).min(spine - 1), leaf).unwrap();
    }
    tree.validate().unwrap();
    tree
}

/// Complete binary tree in heap order.
fn balanced(num_vertices: usize) -> Tree {
    let mut tree = Tree::new(num_vertices).unwrap();
    for child in 1..num_vertices {
        tree.add_child((child - 1) / 2, child).unwrap();
    }
    tree.validate().unwrap();
    tree
}

fn adjacency_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &n in SIZES {
        let input = to_adjacency_string(&balanced(n * 10));
        group.bench_with_input(BenchmarkId::from_parameter(n * 10), &input, |b, input| {
            b.iter(|| parse_str(black_box(input)).unwrap());
        });
    }
    group.finish();
}

fn diameter_strategies(c: &mut Criterion) {
    for (shape, build) in [("caterpillar", caterpillar as fn(usize) -> Tree), ("balanced", balanced)] {
        let mut group = c.benchmark_group(format!("diameter/{shape}"));
        for &n in SIZES {
            let tree = build(n);
            group.bench_with_input(BenchmarkId::new("exhaustive", n), &tree, |b, tree| {
                b.iter(|| diameter(black_box(tree), 0));
            });
            group.bench_with_input(BenchmarkId::new("two_pass", n), &tree, |b, tree| {
                b.iter(|| diameter_two_pass(black_box(tree)));
            });
        }
        group.finish();
    }
}

criterion_group!(regression, adjacency_parsing);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = diameter_strategies
}
criterion_main!(regression, reporting);
