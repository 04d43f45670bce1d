//! Graph storage layer
//!
//! This module implements the node-name/index mapping and the interchangeable
//! storage backends:
//! - [`ListGraph`]: undirected adjacency list, sparse-friendly
//! - [`MatrixGraph`]: undirected adjacency matrix, O(1) edge lookup
//! - [`DirectedListGraph`] / [`DirectedMatrixGraph`]: directed counterparts
//! - [`WeightedListGraph`]: undirected adjacency list with per-edge weights
//!
//! All backends implement the [`GraphStore`] contract over indices handed out
//! by a [`NameMap`] they exclusively own.

pub mod directed_list;
pub mod directed_matrix;
pub mod error;
pub mod list;
pub mod matrix;
pub mod name_map;
pub mod store;
pub mod weighted_list;

// Re-export main types
pub use directed_list::DirectedListGraph;
pub use directed_matrix::DirectedMatrixGraph;
pub use error::{GraphError, GraphResult};
pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use name_map::{NameMap, NodeName};
pub use store::{DirectedGraphStore, GraphStore, WeightedGraphStore};
pub use weighted_list::{WeightedListGraph, DEFAULT_WEIGHT};
