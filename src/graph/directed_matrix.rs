//! Directed adjacency-matrix backend.

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};
use super::name_map::{NameMap, NodeName};
use super::store::{DirectedGraphStore, GraphStore};

/// Directed graph backed by a square boolean matrix indexed `[from][to]`.
///
/// Edge queries and mutations are O(1); outgoing neighbors scan a row,
/// ingoing neighbors scan a column. Space is O(n²).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectedMatrixGraph<N: NodeName> {
    map: NameMap<N>,
    matrix: Vec<Vec<bool>>,
    edge_count: usize,
}

impl<N: NodeName> DirectedMatrixGraph<N> {
    pub fn new() -> Self {
        Self {
            map: NameMap::new(),
            matrix: Vec::new(),
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

    fn grow_to(&mut self, size: usize) {
        for row in &mut self.matrix {
            row.resize(size, false);
        }
        self.matrix.resize(size, vec![false; size]);
    }

    fn check_index(&self, index: usize) -> GraphResult<()> {
        if index < self.matrix.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                len: self.matrix.len(),
            })
        }
    }
}

impl<N: NodeName> GraphStore<N> for DirectedMatrixGraph<N> {
    fn clear(&mut self) {
        self.map = NameMap::new();
        self.matrix.clear();
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
            let size = self.matrix.len() + 1;
            self.grow_to(size);
        }
    }

    fn add_nodes(&mut self, names: &[N]) {
        let mut added = 0;
        for name in names {
            if self.map.insert(name.clone()) {
                added += 1;
            }
        }
        let size = self.matrix.len() + added;
        self.grow_to(size);
    }

    fn remove_node(&mut self, name: &N) {
        let Some(index) = self.map.remove(name) else {
            return;
        };

        // Row holds outgoing edges, column holds ingoing ones; a self-loop
        // appears in both and must be counted once.
        let outgoing = self.matrix[index].iter().filter(|&&cell| cell).count();
        let ingoing = self.matrix.iter().filter(|row| row[index]).count();
        let self_loop = usize::from(self.matrix[index][index]);
        self.edge_count -= outgoing + ingoing - self_loop;

        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }
    }

    fn add_edge(&mut self, from: N, to: N) {
        self.add_node(from.clone());
        self.add_node(to.clone());

        let Ok((u, v)) = self.map.edge_to_indices(&from, &to) else {
            return;
        };

        if !self.matrix[u][v] {
            self.matrix[u][v] = true;
            self.edge_count += 1;
        }
    }

    fn add_edges(&mut self, edges: &[(N, N)]) {
        self.map.reserve(2 * edges.len());
        let mut added = 0;
        for (from, to) in edges {
            if self.map.insert(from.clone()) {
                added += 1;
            }
            if self.map.insert(to.clone()) {
                added += 1;
            }
        }
        self.map.shrink_to_fit();

        let size = self.matrix.len() + added;
        self.grow_to(size);

        let Ok(index_pairs) = self.map.edges_to_indices(edges) else {
            return;
        };

        for (u, v) in index_pairs {
            if !self.matrix[u][v] {
                self.matrix[u][v] = true;
                self.edge_count += 1;
            }
        }
    }

    fn remove_edge(&mut self, from: &N, to: &N) {
        let Ok((u, v)) = self.map.edge_to_indices(from, to) else {
            return;
        };

        if self.matrix[u][v] {
            self.matrix[u][v] = false;
            self.edge_count -= 1;
        }
    }

    fn node_count(&self) -> usize {
        self.matrix.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn edges(&self) -> Vec<(N, N)> {
        let names = self.map.names();
        let mut result = Vec::with_capacity(self.edge_count);

        for (i, row) in self.matrix.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell {
                    result.push((names[i].clone(), names[j].clone()));
                }
            }
        }
        result
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        match self.map.edge_to_indices(from, to) {
            Ok((u, v)) => self.matrix[u][v],
            Err(_) => false,
        }
    }

    fn name_map(&self) -> &NameMap<N> {
        &self.map
    }

    fn neighbor_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.check_index(index)?;

        Ok((0..self.matrix.len())
            .filter(|&i| self.matrix[index][i] || self.matrix[i][index])
            .collect())
    }
}

impl<N: NodeName> DirectedGraphStore<N> for DirectedMatrixGraph<N> {
    fn outgoing_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.check_index(index)?;

        Ok(self.matrix[index]
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(|(i, _)| i)
            .collect())
    }

    fn ingoing_indices(&self, index: usize) -> GraphResult<Vec<usize>> {
        self.check_index(index)?;

        Ok(self
            .matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row[index])
            .map(|(i, _)| i)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_pairs_are_reported_as_stored() {
        let mut graph = DirectedMatrixGraph::new();
        graph.add_edges(&[("a", "b"), ("b", "a"), ("b", "c")]);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.edges(),
            vec![("a", "b"), ("b", "a"), ("b", "c")]
        );
    }

    #[test]
    fn row_and_column_views() {
        let mut graph = DirectedMatrixGraph::new();
        graph.add_edges(&[(1, 2), (3, 2), (2, 4)]);

        assert_eq!(graph.outgoing_neighbors(&2).unwrap(), vec![4]);
        assert_eq!(graph.ingoing_neighbors(&2).unwrap(), vec![1, 3]);

        let neighbors = graph.neighbors(&2).unwrap();
        assert_eq!(neighbors, vec![1, 3, 4]);
    }

    #[test]
    fn remove_node_counts_self_loop_once() {
        let mut graph = DirectedMatrixGraph::new();
        graph.add_edges(&[(1, 1), (1, 2), (3, 1)]);

        graph.remove_node(&1);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }
}
