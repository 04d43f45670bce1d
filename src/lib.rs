//! Graphkit
//!
//! An embeddable, in-memory graph toolkit offering interchangeable storage
//! backends behind one polymorphic contract:
//!
//! - adjacency-list and adjacency-matrix storage,
//! - directed and undirected variants,
//! - an undirected weighted-list variant,
//!
//! plus backend-agnostic algorithms (connected components, Dijkstra),
//! descriptive measures (degree, density) and DIMACS serialization.
//!
//! # Architecture
//!
//! Every backend owns a [`NameMap`](graph::NameMap) translating arbitrary
//! node names to dense zero-based indices. Algorithms and measures consume
//! only the index-level primitives of the [`GraphStore`](graph::GraphStore)
//! trait, so they run unchanged over any backend. The DIMACS adapter is a
//! thin text layer over the same contract.
//!
//! # Example
//!
//! ```
//! use graphkit::algo;
//! use graphkit::graph::{GraphStore, ListGraph};
//!
//! let mut graph: ListGraph<u32> = ListGraph::new();
//! graph.add_edges(&[(1, 2), (2, 3), (4, 5)]);
//!
//! assert_eq!(graph.node_count(), 5);
//! assert_eq!(graph.edge_count(), 3);
//! assert!(!algo::is_connected(&graph).unwrap());
//! ```

pub mod algo;
pub mod graph;
pub mod io;
pub mod measures;

// Re-export main types
pub use graph::{
    DirectedGraphStore, DirectedListGraph, DirectedMatrixGraph, GraphError, GraphResult,
    GraphStore, ListGraph, MatrixGraph, NameMap, NodeName, WeightedGraphStore, WeightedListGraph,
};
pub use io::dimacs::{DimacsError, ParsedGraph};
