//! The polymorphic storage contract implemented by every backend.
//!
//! User-facing operations speak node names; algorithms and measures consume
//! the index-level primitives (`neighbor_indices` and friends), which makes
//! them agnostic of how a backend lays out its adjacency data.

use super::error::{GraphError, GraphResult};
use super::name_map::{NameMap, NodeName};

/// Common contract over all storage backends.
///
/// # Idempotence
///
/// `add_node` on a present name, `add_edge` on a present edge and the
/// `remove_*` operations on absent targets are silent no-ops, never errors.
/// Structural errors ([`GraphError::NodeNotFound`],
/// [`GraphError::IndexOutOfRange`]) are reserved for lookups that cannot be
/// answered without corrupting the name/index invariant.
///
/// # Index stability
///
/// The index-level primitives hand out dense indices in
/// `[0, node_count())`. Any node removal compacts the index space
/// (shift-down), so cached indices are invalidated by *every* removal.
pub trait GraphStore<N: NodeName> {
    /// Drops all nodes and edges.
    fn clear(&mut self);

    /// Constant per backend.
    fn is_directed(&self) -> bool;

    /// Constant per backend.
    fn is_weighted(&self) -> bool;

    /// Registers a node; no-op if the name is already present.
    fn add_node(&mut self, name: N);

    /// Bulk node registration. Backends with O(n) growth per node override
    /// this to grow their storage once.
    fn add_nodes(&mut self, names: &[N]) {
        for name in names {
            self.add_node(name.clone());
        }
    }

    /// Removes a node and all incident edges, in one transactional pass:
    /// the edge count drops by the incident-edge count, the name is erased
    /// and every index above the removed one shifts down by one in both the
    /// name map and the adjacency storage. Silent no-op when absent.
    fn remove_node(&mut self, name: &N);

    /// Inserts an edge, auto-registering missing endpoints. Duplicate
    /// insertion is a no-op; the edge count grows only on real insertion.
    ///
    /// Self-loops are stored once and reported once by [`edges`](Self::edges).
    fn add_edge(&mut self, from: N, to: N);

    /// Bulk edge insertion with amortized node registration.
    fn add_edges(&mut self, edges: &[(N, N)]) {
        for (from, to) in edges {
            self.add_edge(from.clone(), to.clone());
        }
    }

    /// Removes an edge if present; no-op otherwise (including unknown
    /// endpoints). The edge count drops only on actual removal.
    fn remove_edge(&mut self, from: &N, to: &N);

    /// O(1).
    fn node_count(&self) -> usize;

    /// O(1). Undirected edges count once regardless of the symmetric
    /// internal representation.
    fn edge_count(&self) -> usize;

    /// All node names in index order (insertion order modulo removals).
    fn nodes(&self) -> Vec<N> {
        self.name_map().names()
    }

    /// All edges translated back to names.
    ///
    /// Undirected backends report each edge exactly once, canonicalized by
    /// internal index order (`i <= j`), *not* by name order; directed
    /// backends report ordered pairs.
    fn edges(&self) -> Vec<(N, N)>;

    /// Neighbors of a node by name. For directed backends this is the union
    /// of outgoing and incoming neighbors, in index order.
    fn neighbors(&self, name: &N) -> GraphResult<Vec<N>> {
        let index = self.name_map().index_of(name)?;
        self.name_map().names_of(&self.neighbor_indices(index)?)
    }

    /// Total edge query; unknown endpoints answer `false`.
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// The name/index map this backend owns.
    fn name_map(&self) -> &NameMap<N>;

    /// Index-level neighbor query, the seam the algorithms run on.
    fn neighbor_indices(&self, index: usize) -> GraphResult<Vec<usize>>;

    /// Index-level neighbor query with edge weights. Unweighted backends
    /// report weight 1.0 for every edge; the weighted backend overrides this
    /// with its stored weights.
    fn weighted_neighbor_indices(&self, index: usize) -> GraphResult<Vec<(usize, f64)>> {
        Ok(self
            .neighbor_indices(index)?
            .into_iter()
            .map(|neighbor| (neighbor, 1.0))
            .collect())
    }
}

/// Additional queries exposed by the directed backends.
pub trait DirectedGraphStore<N: NodeName>: GraphStore<N> {
    /// Indices reachable over outgoing edges of `index`.
    fn outgoing_indices(&self, index: usize) -> GraphResult<Vec<usize>>;

    /// Indices with an edge pointing at `index`.
    ///
    /// On the list backend this is a reverse scan over all adjacency rows,
    /// O(n · avg degree); no reverse index is maintained.
    fn ingoing_indices(&self, index: usize) -> GraphResult<Vec<usize>>;

    fn outgoing_neighbors(&self, name: &N) -> GraphResult<Vec<N>> {
        let index = self.name_map().index_of(name)?;
        self.name_map().names_of(&self.outgoing_indices(index)?)
    }

    fn ingoing_neighbors(&self, name: &N) -> GraphResult<Vec<N>> {
        let index = self.name_map().index_of(name)?;
        self.name_map().names_of(&self.ingoing_indices(index)?)
    }
}

/// Additional operations exposed by weighted backends.
///
/// Whether a graph carries weights is a property of the chosen backend, fixed
/// at construction time; serialization and algorithms branch on
/// [`GraphStore::is_weighted`] rather than probing capabilities structurally.
pub trait WeightedGraphStore<N: NodeName>: GraphStore<N> {
    /// Inserts an edge with a weight, auto-registering missing endpoints.
    /// No-op on a duplicate edge: the existing weight is kept (use
    /// [`set_weight`](Self::set_weight) to change it).
    fn add_weighted_edge(&mut self, from: N, to: N, weight: f64);

    /// Bulk insertion of `(from, to, weight)` triples.
    fn add_weighted_edges(&mut self, edges: &[(N, N, f64)]) {
        for (from, to, weight) in edges {
            self.add_weighted_edge(from.clone(), to.clone(), *weight);
        }
    }

    /// Bulk insertion of edges sharing one weight.
    fn add_edges_with_weight(&mut self, edges: &[(N, N)], weight: f64) {
        for (from, to) in edges {
            self.add_weighted_edge(from.clone(), to.clone(), weight);
        }
    }

    /// Bulk insertion with one weight per edge; fails with
    /// [`GraphError::WeightCountMismatch`] unless the counts line up.
    fn add_edges_with_weights(&mut self, edges: &[(N, N)], weights: &[f64]) -> GraphResult<()> {
        if edges.len() != weights.len() {
            return Err(GraphError::WeightCountMismatch {
                edges: edges.len(),
                weights: weights.len(),
            });
        }
        for ((from, to), weight) in edges.iter().zip(weights) {
            self.add_weighted_edge(from.clone(), to.clone(), *weight);
        }
        Ok(())
    }

    /// Updates the weight of an existing edge on both stored directions, so
    /// `weight(u, v) == weight(v, u)` holds at all times. Fails with
    /// [`GraphError::EdgeNotFound`] when the edge does not exist.
    fn set_weight(&mut self, from: &N, to: &N, weight: f64) -> GraphResult<()>;

    /// The weight of an edge; `None` is the contract for "no such edge" on
    /// the weighted lookup path (unknown endpoints included).
    fn weight(&self, from: &N, to: &N) -> Option<f64>;
}
