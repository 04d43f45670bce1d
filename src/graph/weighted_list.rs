//! Undirected weighted adjacency-list backend.

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};
use super::name_map::{NameMap, NodeName};
use super::store::{GraphStore, WeightedGraphStore};

/// Weight applied when an edge is inserted without one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Undirected weighted graph backed by per-node `(neighbor, weight)` lists.
///
/// Each edge is stored symmetrically with its weight on both copies;
/// `weight(u, v) == weight(v, u)` holds at all times. Unweighted insertion
/// through [`GraphStore::add_edge`] applies [`DEFAULT_WEIGHT`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightedListGraph<N: NodeName> {
    map: NameMap<N>,
    adjacency: Vec<Vec<(usize, f64)>>,
    edge_count: usize,
}

impl<N: NodeName> WeightedListGraph<N> {
    pub fn new() -> Self {
        Self {
            map: NameMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph pre-populated with the given nodes and no edges.
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// The one primitive every weighted insertion funnels into: inserts the
    /// edge with `weight` unless already present. Returns whether an
    /// insertion happened; an existing edge keeps its weight.
    fn insert_edge_if_absent(&mut self, u: usize, v: usize, weight: f64) -> bool {
        if self.adjacency[u].iter().any(|&(n, _)| n == v) {
            return false;
        }
        self.adjacency[u].push((v, weight));
        if u != v {
            self.adjacency[v].push((u, weight));
        }
        self.edge_count += 1;
        true
    }
}

impl<N: NodeName> GraphStore<N> for WeightedListGraph<N> {
    fn clear(&mut self) {
        self.map = NameMap::new();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn is_weighted(&self) -> bool {
        true
    }

    fn add_node(&mut self, name: N) {
        if self.map.insert(name) {
            self.adjacency.push(Vec::new());
        }
    }

    fn remove_node(&mut self, name: &N) {
        let Some(index) = self.map.remove(name) else {
            return;
        };

        self.edge_count -= self.adjacency[index].len();
        self.adjacency.remove(index);

        for row in &mut self.adjacency {
            row.retain(|&(neighbor, _)| neighbor != index);
            for (neighbor, _) in row.iter_mut() {
                if *neighbor > index {
                    *neighbor -= 1;
                }
            }
        }
    }

    fn add_edge(&mut self, from: N, to: N) {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT);
    }

    fn add_edges(&mut self, edges: &[(N, N)]) {
        self.add_edges_with_weight(edges, DEFAULT_WEIGHT);
    }

    fn remove_edge(&mut self, from: &N, to: &N) {
        let Ok((u, v)) = self.map.edge_to_indices(from, to) else {
            return;
        };

        if let Some(position) = self.adjacency[u].iter().position(|&(n, _)| n == v) {
            self.adjacency[u].remove(position);
            if u != v {
                if let Some(position) = self.adjacency[v].iter().position(|&(n, _)| n == u) {
                    self.adjacency[v].remove(position);
                }
            }
            self.edge_count -= 1;
        }
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges(&self) -> Vec<(N, N)> {
        let names = self.map.names();
        let mut result = Vec::with_capacity(self.edge_count);

        for (i, row) in self.adjacency.iter().enumerate() {
            for &(j, _) in row {
                if i <= j {
                    result.push((names[i].clone(), names[j].clone()));
                }
            }
        }
        result
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        match self.map.edge_to_indices(from, to) {
            Ok((u, v)) => self.adjacency[u].iter().any(|&(n, _)| n == v),
            Err(_) => false,
        }
    }

    fn name_map(&self) -> &NameMap<N> {
        &self.map
    }

    fn neighbor_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        let row = self
            .adjacency
            .get(index)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.adjacency.len(),
            })?;

        Ok(row.iter().map(|&(neighbor, _)| neighbor).collect())
    }

    fn weighted_neighbor_indices(&self, index: usize) -> GraphResult<Vec<(usize, f64)>> {
        self.adjacency
            .get(index)
            .cloned()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.adjacency.len(),
            })
    }
}

impl<N: NodeName> WeightedGraphStore<N> for WeightedListGraph<N> {
    fn add_weighted_edge(&mut self, from: N, to: N, weight: f64) {
        self.add_node(from.clone());
        self.add_node(to.clone());

        let Ok((u, v)) = self.map.edge_to_indices(&from, &to) else {
            return;
        };

        self.insert_edge_if_absent(u, v, weight);
    }

    fn set_weight(&mut self, from: &N, to: &N, weight: f64) -> GraphResult<()> {
        let (u, v) = self.map.edge_to_indices(from, to)?;

        let forward = self.adjacency[u].iter().position(|&(n, _)| n == v);
        let Some(position) = forward else {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        // Both stored copies must carry the new weight to keep the symmetry
        // invariant.
        self.adjacency[u][position].1 = weight;
        if u != v {
            if let Some(position) = self.adjacency[v].iter().position(|&(n, _)| n == u) {
                self.adjacency[v][position].1 = weight;
            }
        }
        Ok(())
    }

    fn weight(&self, from: &N, to: &N) -> Option<f64> {
        let (u, v) = self.map.edge_to_indices(from, to).ok()?;
        self.adjacency[u]
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, weight)| weight)
    }
}
