//! Integration tests running the algorithms and measures over every backend.

use graphkit::algo::{components, dijkstra, is_connected, number_of_components, shortest_path};
use graphkit::graph::{
    DirectedListGraph, DirectedMatrixGraph, GraphStore, ListGraph, MatrixGraph,
    WeightedGraphStore, WeightedListGraph,
};
use graphkit::measures::{average_neighbor_degree, degree, density};

/// Three components: {0,1,2,3}, {4,5}, {6,7}.
const COMPONENT_EDGES: [(u32, u32); 5] = [(0, 1), (1, 2), (0, 3), (4, 5), (6, 7)];

fn check_components<G: GraphStore<u32>>(graph: &mut G) {
    graph.add_edges(&COMPONENT_EDGES);

    assert_eq!(number_of_components(graph).unwrap(), 3);
    assert!(!is_connected(graph).unwrap());

    let mut sizes: Vec<usize> = components(graph)
        .unwrap()
        .iter()
        .map(|component| component.len())
        .collect();
    sizes.sort();
    assert_eq!(sizes, vec![2, 2, 4]);

    // Bridging two components merges them.
    graph.add_edge(3, 4);
    assert_eq!(number_of_components(graph).unwrap(), 2);
}

#[test]
fn components_on_every_backend() {
    check_components(&mut ListGraph::new());
    check_components(&mut MatrixGraph::new());
    check_components(&mut DirectedListGraph::new());
    check_components(&mut DirectedMatrixGraph::new());
    check_components(&mut WeightedListGraph::new());
}

#[test]
fn directed_components_are_weak() {
    // No path from 2 back to 0, yet one weak component.
    let mut graph = DirectedListGraph::new();
    graph.add_edges(&[(0u32, 1), (2, 1)]);

    assert!(is_connected(&graph).unwrap());
}

#[test]
fn unweighted_shortest_path_is_fewest_hops() {
    let mut graph = ListGraph::new();
    graph.add_edges(&[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]);

    let path = shortest_path(&graph, &"a", &"c").unwrap().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], "a");
    assert_eq!(path[2], "c");
}

#[test]
fn weighted_shortest_path_follows_weights() {
    let mut graph = WeightedListGraph::new();
    graph.add_weighted_edges(&[
        (1u32, 2, 1.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (1, 4, 10.0),
    ]);

    // Three cheap hops beat the heavy direct edge.
    assert_eq!(shortest_path(&graph, &1, &4).unwrap(), Some(vec![1, 2, 3, 4]));

    graph.set_weight(&1, &4, 0.5).unwrap();
    assert_eq!(shortest_path(&graph, &1, &4).unwrap(), Some(vec![1, 4]));
}

#[test]
fn dijkstra_tree_spans_reachable_nodes() {
    let mut graph = ListGraph::new();
    graph.add_edges(&COMPONENT_EDGES);

    let tree = dijkstra(&graph, &0).unwrap();

    // One tree edge per reached node; the other components stay out.
    assert_eq!(tree.len(), 3);
    for (_, child) in &tree {
        assert!([1, 2, 3].contains(child));
    }
}

#[test]
fn dijkstra_on_directed_backends_ignores_orientation() {
    // The traversal runs on the plain neighbor view, which on directed
    // backends is the union of both directions.
    let mut graph = DirectedMatrixGraph::new();
    graph.add_edges(&[(1u32, 2), (2, 3)]);

    assert_eq!(dijkstra(&graph, &1).unwrap().len(), 2);
    assert_eq!(dijkstra(&graph, &3).unwrap().len(), 2);
}

#[test]
fn star_graph_degrees() {
    let mut graph = MatrixGraph::new();
    graph.add_edges(&[("hub", "a"), ("hub", "b"), ("hub", "c"), ("hub", "d")]);

    assert_eq!(degree(&graph, &"hub").unwrap(), 4);
    assert_eq!(degree(&graph, &"a").unwrap(), 1);
    assert!(degree(&graph, &"missing").is_err());

    // Degrees 4, 1, 1, 1, 1 over five nodes.
    assert_eq!(average_neighbor_degree(&graph), Some(8.0 / 5.0));
}

#[test]
fn density_extremes() {
    let mut empty: ListGraph<u32> = ListGraph::new();
    empty.add_node(1);
    empty.add_node(2);
    assert_eq!(density(&empty), 0.0);

    // Complete graph on three nodes.
    let mut complete = ListGraph::new();
    complete.add_edges(&[(1u32, 2), (2, 3), (1, 3)]);
    assert_eq!(density(&complete), 1.0);

    // One of two possible edges.
    let mut half = DirectedListGraph::new();
    half.add_edge(1u32, 2);
    assert_eq!(density(&half), 0.5);
}
