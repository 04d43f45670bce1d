//! Integration tests for DIMACS serialization, including file round-trips.

use std::fs;

use graphkit::graph::{GraphStore, ListGraph, WeightedGraphStore, WeightedListGraph};
use graphkit::io::{
    load_dimacs, load_dimacs_weighted, read_dimacs_file, save_dimacs_file,
    save_dimacs_file_weighted, DimacsError, ParsedGraph,
};

const FIXTURE: &str = "tests/graphs/dimacs/valid.dimacs";

#[test]
fn loads_the_fixture() {
    let mut graph: ListGraph<u32> = ListGraph::new();
    let file = fs::File::open(FIXTURE).unwrap();
    load_dimacs(&mut graph, std::io::BufReader::new(file)).unwrap();

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.has_edge(&1, &2));
    assert!(graph.has_edge(&2, &4));
    assert!(!graph.has_edge(&1, &3));
}

#[test]
fn reads_the_fixture_file() {
    let parsed: ParsedGraph<u32> = read_dimacs_file(FIXTURE).unwrap();

    assert_eq!(parsed.declared_nodes, 5);
    assert_eq!(parsed.edges.len(), 6);
    assert!(!parsed.is_weighted());
}

#[test]
fn missing_file_is_an_io_error() {
    let result = read_dimacs_file::<u32, _>("tests/graphs/dimacs/no_such_file.dimacs");
    assert!(matches!(result, Err(DimacsError::Io(_))));
}

#[test]
fn file_round_trip() {
    let mut graph: ListGraph<String> = ListGraph::new();
    graph.add_edges(&[
        ("alpha".to_owned(), "beta".to_owned()),
        ("beta".to_owned(), "gamma".to_owned()),
    ]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.dimacs");
    save_dimacs_file(&graph, &path).unwrap();

    let mut restored: ListGraph<String> = ListGraph::new();
    let file = fs::File::open(&path).unwrap();
    load_dimacs(&mut restored, std::io::BufReader::new(file)).unwrap();

    assert_eq!(restored.nodes(), graph.nodes());
    assert_eq!(restored.edges(), graph.edges());
}

#[test]
fn weighted_file_round_trip() {
    let mut graph: WeightedListGraph<u32> = WeightedListGraph::new();
    graph.add_weighted_edges(&[(1, 2, 0.25), (2, 3, 8.0), (3, 1, 1.5)]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weighted.dimacs");
    save_dimacs_file_weighted(&graph, &path).unwrap();

    let mut restored: WeightedListGraph<u32> = WeightedListGraph::new();
    let file = fs::File::open(&path).unwrap();
    load_dimacs_weighted(&mut restored, std::io::BufReader::new(file)).unwrap();

    assert_eq!(restored.edge_count(), 3);
    assert_eq!(restored.weight(&1, &2), Some(0.25));
    assert_eq!(restored.weight(&2, &3), Some(8.0));
    assert_eq!(restored.weight(&3, &1), Some(1.5));
}

#[test]
fn string_names_round_trip_through_text() {
    let text = "p edge 3 2\ne alpha beta\ne beta gamma\n";
    let mut graph: ListGraph<String> = ListGraph::new();
    load_dimacs(&mut graph, text.as_bytes()).unwrap();

    assert_eq!(
        graph.nodes(),
        vec!["alpha".to_owned(), "beta".to_owned(), "gamma".to_owned()]
    );
}

#[test]
fn parse_errors_carry_the_offending_line() {
    let text = "p edge 2 1\ne 1\n";
    let err = graphkit::io::parse_dimacs::<u32, _>(text.as_bytes()).unwrap_err();

    match err {
        DimacsError::MalformedEdge { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "e 1");
        }
        other => panic!("unexpected error: {other}"),
    }
}
