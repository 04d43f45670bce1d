//! Descriptive graph measures.
//!
//! Pure read-only aggregations over the storage contract; no state beyond
//! the graph itself.

use crate::graph::{GraphResult, GraphStore, NodeName};

/// Number of neighbors of `node` (union of both directions on directed
/// backends).
pub fn degree<N, G>(graph: &G, node: &N) -> GraphResult<usize>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    Ok(graph.neighbors(node)?.len())
}

/// Mean degree over all nodes; `None` for the empty graph, where the mean
/// is undefined.
pub fn average_neighbor_degree<N, G>(graph: &G) -> Option<f64>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let node_count = graph.node_count();
    if node_count == 0 {
        return None;
    }

    let mut total = 0.0;
    for index in 0..node_count {
        total += graph.neighbor_indices(index).ok()?.len() as f64;
    }
    Some(total / node_count as f64)
}

/// Ratio of present edges to possible edges.
///
/// `m / (n·(n-1))`, doubled for undirected graphs since their edge count is
/// one per unordered pair while the denominator counts ordered pairs.
/// Returns 0.0 when there are no edges or fewer than two nodes.
pub fn density<N, G>(graph: &G) -> f64
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let edge_count = graph.edge_count() as f64;
    let node_count = graph.node_count() as f64;
    if edge_count == 0.0 || node_count <= 1.0 {
        return 0.0;
    }

    let mut density = edge_count / (node_count * (node_count - 1.0));
    if !graph.is_directed() {
        density *= 2.0;
    }
    density
}
