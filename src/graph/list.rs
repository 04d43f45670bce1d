//! Undirected adjacency-list backend.

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};
use super::name_map::{NameMap, NodeName};
use super::store::GraphStore;

/// Undirected graph backed by per-node neighbor lists.
///
/// Each edge `(u, v)` is stored symmetrically in both endpoint rows but
/// counted once. Space is O(n + m) and neighbor iteration is direct, which
/// favors sparse graphs; `has_edge`/`remove_edge` are linear in the degree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListGraph<N: NodeName> {
    map: NameMap<N>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<N: NodeName> ListGraph<N> {
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
}

impl<N: NodeName> GraphStore<N> for ListGraph<N> {
    fn clear(&mut self) {
        self.map = NameMap::new();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn is_weighted(&self) -> bool {
        false
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

        // Incident edges vanish with the node's row; each is stored once in
        // that row (self-loops included), so the count drops by the row size.
        self.edge_count -= self.adjacency[index].len();
        self.adjacency.remove(index);

        for row in &mut self.adjacency {
            row.retain(|&neighbor| neighbor != index);
            for neighbor in row.iter_mut() {
                if *neighbor > index {
                    *neighbor -= 1;
                }
            }
        }
    }

    fn add_edge(&mut self, from: N, to: N) {
        self.add_node(from.clone());
        self.add_node(to.clone());

        let Ok((u, v)) = self.map.edge_to_indices(&from, &to) else {
            return;
        };

        if !self.adjacency[u].contains(&v) {
            self.adjacency[u].push(v);
            if u != v {
                self.adjacency[v].push(u);
            }
            self.edge_count += 1;
        }
    }

    fn add_edges(&mut self, edges: &[(N, N)]) {
        // Register all endpoints in one growth pass before touching rows.
        self.map.reserve(2 * edges.len());
        for (from, to) in edges {
            self.add_node(from.clone());
            self.add_node(to.clone());
        }
        self.map.shrink_to_fit();

        let Ok(index_pairs) = self.map.edges_to_indices(edges) else {
            return;
        };

        for (u, v) in index_pairs {
            if !self.adjacency[u].contains(&v) {
                self.adjacency[u].push(v);
                if u != v {
                    self.adjacency[v].push(u);
                }
                self.edge_count += 1;
            }
        }
    }

    fn remove_edge(&mut self, from: &N, to: &N) {
        let Ok((u, v)) = self.map.edge_to_indices(from, to) else {
            return;
        };

        if let Some(position) = self.adjacency[u].iter().position(|&n| n == v) {
            self.adjacency[u].remove(position);
            if u != v {
                if let Some(position) = self.adjacency[v].iter().position(|&n| n == u) {
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
            for &j in row {
                // Canonical order is internal index order, each edge once.
                if i <= j {
                    result.push((names[i].clone(), names[j].clone()));
                }
            }
        }
        result
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        match self.map.edge_to_indices(from, to) {
            Ok((u, v)) => self.adjacency[u].contains(&v),
            Err(_) => false,
        }
    }

    fn name_map(&self) -> &NameMap<N> {
        &self.map
    }

    fn neighbor_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.adjacency
            .get(index)
            .cloned()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.adjacency.len(),
            })
    }
}
