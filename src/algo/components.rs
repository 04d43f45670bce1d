//! Connected components over the index space.

use crate::graph::{GraphResult, GraphStore, NodeName};

/// Collects the component containing `start`, marking everything it visits.
///
/// Iterative depth-first traversal with an explicit stack; recursion would
/// hit stack-depth limits on large graphs.
fn collect_component<N, G>(graph: &G, start: usize, visited: &mut [bool]) -> GraphResult<Vec<usize>>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let mut component = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        component.push(node);

        for neighbor in graph.neighbor_indices(node)? {
            if !visited[neighbor] {
                stack.push(neighbor);
            }
        }
    }
    Ok(component)
}

/// All connected components, as node names in first-visit order.
///
/// Components start at unvisited indices in index order. Edge direction is
/// ignored: the traversal runs on the plain neighbor view, so a directed
/// graph yields its weakly connected components. An empty graph has zero
/// components.
pub fn components<N, G>(graph: &G) -> GraphResult<Vec<Vec<N>>>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut result = Vec::new();

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        let component = collect_component(graph, start, &mut visited)?;
        result.push(graph.name_map().names_of(&component)?);
    }
    Ok(result)
}

/// The component containing `node`, as names in first-visit order.
pub fn component_of<N, G>(graph: &G, node: &N) -> GraphResult<Vec<N>>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    let start = graph.name_map().index_of(node)?;
    let mut visited = vec![false; graph.node_count()];

    let component = collect_component(graph, start, &mut visited)?;
    graph.name_map().names_of(&component)
}

pub fn number_of_components<N, G>(graph: &G) -> GraphResult<usize>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    Ok(components(graph)?.len())
}

/// Whether the graph consists of exactly one component. False for the empty
/// graph, which has zero components.
pub fn is_connected<N, G>(graph: &G) -> GraphResult<bool>
where
    N: NodeName,
    G: GraphStore<N> + ?Sized,
{
    Ok(number_of_components(graph)? == 1)
}
