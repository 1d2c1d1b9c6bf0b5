use std::io::Cursor;

use mgraphs::{algo::*, gens::*, io::*, prelude::*};

fn read(data: &str) -> MultiGraph {
    MultiGraph::try_read_matrix(Cursor::new(data.as_bytes())).unwrap()
}

/// Runs the spanning tree program on `data` and returns its output
fn spanning_trees(data: &str) -> String {
    let census = read(data).spanning_tree_census();

    let mut out = format!("{}\n", census.count).into_bytes();
    census.witness.try_write_matrix(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn four_cycle_has_four_spanning_trees() {
    let data = "4\n\n0 1 0 1\n1 0 1 0\n0 1 0 1\n1 0 1 0\n";
    let output = spanning_trees(data);

    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("4"));

    let witness = read(&format!("4\n\n{}\n", lines.collect::<Vec<_>>().join("\n")));
    assert_eq!(witness.number_of_edges(), 3);
    assert!(witness.is_spanning_tree_of(&read(data)));
}

#[test]
fn triangle_has_three_spanning_trees() {
    let output = spanning_trees("3\n\n0 1 1\n1 0 1\n1 1 0\n");
    assert_eq!(output.lines().next(), Some("3"));
    assert_eq!(output.lines().count(), 4);
}

#[test]
fn isolated_vertices_have_no_spanning_tree() {
    assert_eq!(spanning_trees("2\n\n0 0\n0 0\n"), "0\n");
}

#[test]
fn parallel_edges_count_separately() {
    let output = spanning_trees("3\n\n1 2 1\n2 0 1\n1 1 0\n");
    assert_eq!(output.lines().next(), Some("5"));
}

#[test]
fn settings_agree() {
    let graph = read("5\n\n0 2 1 0 1\n2 0 1 1 0\n1 1 2 1 1\n0 1 1 0 3\n1 0 1 3 0\n");
    let reference = graph.number_of_spanning_trees();

    for shortcuts in [false, true] {
        for memoize in [false, true] {
            let counter = SpanningTreeCounter::new()
                .use_shortcuts(shortcuts)
                .memoize(memoize);
            assert_eq!(counter.count(&graph), reference);
        }
    }
}

#[test]
fn odd_cycle_is_not_class_one() {
    let graph = read("5\n\n0 1 0 0 1\n1 0 1 0 0\n0 1 0 1 0\n0 0 1 0 1\n1 0 0 1 0\n");
    assert_eq!(graph, MultiGraph::cycle(5));
    assert!(!graph.is_class_one());
    assert!(!EdgeColorSearch::new().use_shortcuts(false).is_class_one(&graph));
}

#[test]
fn even_complete_graph_is_class_one() {
    let graph = read("4\n\n0 1 1 1\n1 0 1 1\n1 1 0 1\n1 1 1 0\n");
    assert!(graph.is_class_one());

    let coloring = EdgeColorSearch::new()
        .use_shortcuts(false)
        .find_coloring(&graph)
        .unwrap();
    assert_eq!(coloring.number_of_colors(), 3);
    assert!(coloring.is_proper_for(&graph));
}

#[test]
fn malformed_input_is_rejected() {
    for data in ["", "3\n\n0 1 1\n1 0 1\n", "2\n\n0 1\n0 0\n"] {
        assert!(MultiGraph::try_read_matrix(Cursor::new(data.as_bytes())).is_err());
    }
}
