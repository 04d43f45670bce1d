//! Backend-agnostic graph algorithms.
//!
//! Algorithms are free functions over the [`GraphStore`](crate::graph::GraphStore)
//! contract and consume only its index-level primitives, so any backend can
//! be plugged in. They take a read-only view; no mutation may happen
//! concurrently with a traversal.

pub mod components;
pub mod shortest_path;

pub use components::{component_of, components, is_connected, number_of_components};
pub use shortest_path::{dijkstra, shortest_path};
