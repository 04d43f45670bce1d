//! Bidirectional mapping between node names and dense internal indices.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use super::error::{GraphError, GraphResult};

/// Bound on user-facing node identities.
///
/// `Ord` keeps node sets sortable for deterministic output, `Display` serves
/// error messages and DIMACS writing. Blanket-implemented for every type
/// meeting the bounds.
pub trait NodeName: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T: Clone + Eq + Hash + Ord + Debug + Display> NodeName for T {}

/// Bidirectional name/index map owned by exactly one storage backend.
///
/// Registered names occupy dense indices `0..len()` in insertion order. The
/// set's position *is* the index, so the two directions can never drift
/// apart.
///
/// Indices are stable only between structural mutations: removing a name
/// shifts every index above it down by one, and the owning backend must
/// rewrite its adjacency storage in the same operation. Removal is therefore
/// crate-private; callers go through the backend's `remove_node`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameMap<N: NodeName> {
    names: IndexSet<N, FxBuildHasher>,
}

impl<N: NodeName> NameMap<N> {
    pub fn new() -> Self {
        Self {
            names: IndexSet::default(),
        }
    }

    /// Registers a name, assigning it the next sequential index.
    ///
    /// Returns `false` without side effects if the name is already present.
    pub fn insert(&mut self, name: N) -> bool {
        self.names.insert(name)
    }

    pub fn contains(&self, name: &N) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Translates a registered name to its current index.
    pub fn index_of(&self, name: &N) -> GraphResult<usize> {
        self.names
            .get_index_of(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    /// Translates an index back to its node name.
    pub fn name_of(&self, index: usize) -> GraphResult<&N> {
        self.names
            .get_index(index)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.names.len(),
            })
    }

    /// Bulk index-to-name translation, cloning the names out.
    pub fn names_of(&self, indices: &[usize]) -> GraphResult<Vec<N>> {
        indices
            .iter()
            .map(|&index| self.name_of(index).cloned())
            .collect()
    }

    /// Bulk name-to-index translation.
    pub fn indices_of(&self, names: &[N]) -> GraphResult<Vec<usize>> {
        names.iter().map(|name| self.index_of(name)).collect()
    }

    /// Translates both endpoints of an edge in one call.
    pub fn edge_to_indices(&self, from: &N, to: &N) -> GraphResult<(usize, usize)> {
        Ok((self.index_of(from)?, self.index_of(to)?))
    }

    /// Bulk edge translation, avoiding repeated lookups when inserting many
    /// edges at once.
    pub fn edges_to_indices(&self, edges: &[(N, N)]) -> GraphResult<Vec<(usize, usize)>> {
        edges
            .iter()
            .map(|(from, to)| self.edge_to_indices(from, to))
            .collect()
    }

    /// Unregisters a name, shifting every index above it down by one.
    ///
    /// Returns the index the name occupied, or `None` if it was not
    /// registered. Crate-private: the owning backend must apply the same
    /// shift to its adjacency storage in the same operation, so raw removal
    /// is never callable on its own.
    pub(crate) fn remove(&mut self, name: &N) -> Option<usize> {
        self.names.shift_remove_full(name).map(|(index, _)| index)
    }

    /// Iterates the registered names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.names.iter()
    }

    /// All registered names, in index order.
    pub fn names(&self) -> Vec<N> {
        self.names.iter().cloned().collect()
    }

    /// Capacity hint; no semantic effect.
    pub fn reserve(&mut self, additional: usize) {
        self.names.reserve(additional);
    }

    /// Capacity hint; no semantic effect.
    pub fn shrink_to_fit(&mut self) {
        self.names.shrink_to_fit();
    }
}
