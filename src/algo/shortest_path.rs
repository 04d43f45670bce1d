//! Single-source shortest paths (Dijkstra).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{GraphResult, GraphStore, NodeName};

/// Heap entry ordered by cost, reversed for a min-heap.
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    index: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tentative-distance relaxation from `source`; returns the predecessor of
/// every reached index. Distances are working state only.
fn relax_from<N, G>(graph: &G, source: usize) -> GraphResult<Vec<Option<usize>>>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut previous: Vec<Option<usize>> = vec![None; node_count];
    let mut heap = BinaryHeap::new();

    distances[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        index: source,
    });

    while let Some(State { cost, index }) = heap.pop() {
        // Lazy deletion: stale entries carry an outdated, larger cost.
        if cost > distances[index] {
            continue;
        }

        for (neighbor, weight) in graph.weighted_neighbor_indices(index)? {
            debug_assert!(weight >= 0.0, "Dijkstra requires non-negative weights");

            let candidate = cost + weight;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                previous[neighbor] = Some(index);
                heap.push(State {
                    cost: candidate,
                    index: neighbor,
                });
            }
        }
    }
    Ok(previous)
}

/// Shortest-path tree from `source`, as `(predecessor, node)` name pairs in
/// index order. Unreachable nodes and the source itself carry no entry.
///
/// Unweighted backends contribute weight 1.0 per edge, so the tree degrades
/// to breadth-first distances. All weights must be non-negative; negative
/// weights are an unchecked precondition and leave the result undefined
/// (asserted in debug builds).
pub fn dijkstra<N, G>(graph: &G, source: &N) -> GraphResult<Vec<(N, N)>>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let source_index = graph.name_map().index_of(source)?;
    let previous = relax_from(graph, source_index)?;

    let map = graph.name_map();
    let mut tree = Vec::new();
    for (node, predecessor) in previous.iter().enumerate() {
        if let Some(predecessor) = predecessor {
            tree.push((map.name_of(*predecessor)?.clone(), map.name_of(node)?.clone()));
        }
    }
    Ok(tree)
}

/// One shortest path from `source` to `target`, reconstructed from the
/// predecessor chain. `None` when `target` is unreachable.
pub fn shortest_path<N, G>(graph: &G, source: &N, target: &N) -> GraphResult<Option<Vec<N>>>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let source_index = graph.name_map().index_of(source)?;
    let target_index = graph.name_map().index_of(target)?;

    if source_index == target_index {
        return Ok(Some(vec![source.clone()]));
    }

    let previous = relax_from(graph, source_index)?;
    if previous[target_index].is_none() {
        return Ok(None);
    }

    let mut indices = vec![target_index];
    let mut current = target_index;
    while let Some(predecessor) = previous[current] {
        indices.push(predecessor);
        current = predecessor;
    }
    indices.reverse();

    Ok(Some(graph.name_map().names_of(&indices)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphStore, ListGraph, WeightedGraphStore, WeightedListGraph};

    #[test]
    fn weighted_tree_prefers_cheap_detour() {
        let mut graph = WeightedListGraph::new();
        // Direct 1-3 costs 50, the detour over 2 costs 15.
        graph.add_weighted_edges(&[(1, 2, 10.0), (2, 3, 5.0), (1, 3, 50.0)]);

        let tree = dijkstra(&graph, &1).unwrap();

        assert!(tree.contains(&(1, 2)));
        assert!(tree.contains(&(2, 3)));
        assert!(!tree.contains(&(1, 3)));
    }

    #[test]
    fn unreachable_nodes_have_no_tree_entry() {
        let mut graph = ListGraph::new();
        graph.add_edge("a", "b");
        graph.add_node("lonely");

        let tree = dijkstra(&graph, &"a").unwrap();

        assert_eq!(tree, vec![("a", "b")]);
    }

    #[test]
    fn path_reconstruction() {
        let mut graph = WeightedListGraph::new();
        graph.add_weighted_edges(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0), (3, 4, 1.0)]);

        let path = shortest_path(&graph, &1, &4).unwrap();
        assert_eq!(path, Some(vec![1, 2, 3, 4]));

        assert_eq!(shortest_path(&graph, &1, &1).unwrap(), Some(vec![1]));
    }

    #[test]
    fn unreachable_target_yields_none() {
        let mut graph = ListGraph::new();
        graph.add_edge(1, 2);
        graph.add_node(9);

        assert_eq!(shortest_path(&graph, &1, &9).unwrap(), None);
    }

    #[test]
    fn unknown_source_fails() {
        let graph: ListGraph<u32> = ListGraph::new();
        assert!(dijkstra(&graph, &7).is_err());
    }
}
