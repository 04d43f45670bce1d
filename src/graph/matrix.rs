//! Undirected adjacency-matrix backend.

use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};
use super::name_map::{NameMap, NodeName};
use super::store::GraphStore;

/// Undirected graph backed by a square boolean edge matrix.
///
/// `has_edge`/`add_edge`/`remove_edge` are O(1); adding a node appends a row
/// and a column (O(n)), and neighbor listing scans a row. Space is O(n²),
/// appropriate for dense graphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatrixGraph<N: NodeName> {
    map: NameMap<N>,
    matrix: Vec<Vec<bool>>,
    edge_count: usize,
}

impl<N: NodeName> MatrixGraph<N> {
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
}

impl<N: NodeName> GraphStore<N> for MatrixGraph<N> {
    fn clear(&mut self) {
        self.map = NameMap::new();
        self.matrix.clear();
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
        // One resize for the whole batch instead of O(n) work per node.
        let size = self.matrix.len() + added;
        self.grow_to(size);
    }

    fn remove_node(&mut self, name: &N) {
        let Some(index) = self.map.remove(name) else {
            return;
        };

        let incident = self.matrix[index].iter().filter(|&&cell| cell).count();
        self.edge_count -= incident;

        // Dropping the row and column renumbers everything above `index`
        // positionally; no explicit shifting needed.
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
            self.matrix[v][u] = true;
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
                self.matrix[v][u] = true;
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
            self.matrix[v][u] = false;
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
                if cell && i <= j {
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
        let row = self.matrix.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            len: self.matrix.len(),
        })?;

        Ok(row
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(|(i, _)| i)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_grows_and_shrinks_with_nodes() {
        let mut graph = MatrixGraph::new();
        graph.add_nodes(&["a", "b", "c"]);
        assert_eq!(graph.node_count(), 3);

        graph.add_edge("a", "c");
        graph.remove_node(&"b");

        assert_eq!(graph.node_count(), 2);
        assert!(graph.has_edge(&"a", &"c"));
        assert_eq!(graph.neighbor_indices(0).unwrap(), vec![1]);
    }

    #[test]
    fn remove_edge_is_symmetric() {
        let mut graph = MatrixGraph::new();
        graph.add_edge(1, 2);
        graph.remove_edge(&2, &1);

        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(&1, &2));
    }

    #[test]
    fn removing_absent_edge_keeps_count() {
        let mut graph = MatrixGraph::new();
        graph.add_edge(1, 2);
        graph.remove_edge(&1, &5);

        assert_eq!(graph.edge_count(), 1);
    }
}
