//! Directed adjacency-list backend.

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};
use super::name_map::{NameMap, NodeName};
use super::store::{DirectedGraphStore, GraphStore};

/// Directed graph backed by per-node outgoing-edge lists.
///
/// Only outgoing edges are stored; ingoing queries scan every row. The plain
/// [`neighbors`](GraphStore::neighbors) view is the union of outgoing and
/// incoming neighbors, so undirected-style algorithms (components) treat the
/// graph as if edges had no direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectedListGraph<N: NodeName> {
    map: NameMap<N>,
    outgoing: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<N: NodeName> DirectedListGraph<N> {
    pub fn new() -> Self {
        Self {
            map: NameMap::new(),
            outgoing: Vec::new(),
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

    fn check_index(&self, index: usize) -> GraphResult<()> {
        if index < self.outgoing.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.outgoing.len(),
            })
        }
    }
}

impl<N: NodeName> GraphStore<N> for DirectedListGraph<N> {
    fn clear(&mut self) {
        self.map = NameMap::new();
        self.outgoing.clear();
        self.edge_count = 0;
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn is_weighted(&self) -> bool {
        false
    }

    fn add_node(&mut self, name: N) {
        if self.map.insert(name) {
            self.outgoing.push(Vec::new());
        }
    }

    fn remove_node(&mut self, name: &N) {
        let Some(index) = self.map.remove(name) else {
            return;
        };

        // Outgoing edges sit in the removed row (self-loops included);
        // ingoing ones are found by scanning the other rows.
        let outgoing = self.outgoing[index].len();
        let ingoing = self
            .outgoing
            .iter()
            .enumerate()
            .filter(|(i, row)| *i != index && row.contains(&index))
            .count();
        self.edge_count -= outgoing + ingoing;

        self.outgoing.remove(index);
        for row in &mut self.outgoing {
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

        if !self.outgoing[u].contains(&v) {
            self.outgoing[u].push(v);
            self.edge_count += 1;
        }
    }

    fn add_edges(&mut self, edges: &[(N, N)]) {
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
            if !self.outgoing[u].contains(&v) {
                self.outgoing[u].push(v);
                self.edge_count += 1;
            }
        }
    }

    fn remove_edge(&mut self, from: &N, to: &N) {
        let Ok((u, v)) = self.map.edge_to_indices(from, to) else {
            return;
        };

        if let Some(position) = self.outgoing[u].iter().position(|&n| n == v) {
            self.outgoing[u].remove(position);
            self.edge_count -= 1;
        }
    }

    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges(&self) -> Vec<(N, N)> {
        let names = self.map.names();
        let mut result = Vec::with_capacity(self.edge_count);

        for (i, row) in self.outgoing.iter().enumerate() {
            for &j in row {
                result.push((names[i].clone(), names[j].clone()));
            }
        }
        result
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        match self.map.edge_to_indices(from, to) {
            Ok((u, v)) => self.outgoing[u].contains(&v),
            Err(_) => false,
        }
    }

    fn name_map(&self) -> &NameMap<N> {
        &self.map
    }

    fn neighbor_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.check_index(index)?;

        // Union of both directions, reported in index order so every backend
        // yields the same neighbor sequence for the same graph.
        Ok((0..self.outgoing.len())
            .filter(|&i| self.outgoing[index].contains(&i) || self.outgoing[i].contains(&index))
            .collect())
    }
}

impl<N: NodeName> DirectedGraphStore<N> for DirectedListGraph<N> {
    fn outgoing_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.check_index(index)?;
        Ok(self.outgoing[index].clone())
    }

    fn ingoing_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.check_index(index)?;

        // Reverse scan over all rows; the most expensive directed-list query.
        Ok(self
            .outgoing
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(&index))
            .map(|(i, _)| i)
            .collect())
    }
}
