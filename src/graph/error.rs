//! Errors shared by the storage layer and the algorithms built on it.

use thiserror::Error;

/// Errors that can occur during graph operations.
///
/// Idempotent calls are deliberately *not* errors: re-adding a node or edge
/// that already exists, or removing one that does not, is a no-op. Errors are
/// reserved for structural misuse, where continuing silently would corrupt
/// the node/index invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node name was referenced that is not registered in the graph.
    #[error("node {0} not found")]
    NodeNotFound(String),

    /// An index-level accessor received an index outside `[0, len)`.
    #[error("index {index} out of range for graph of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    /// An edge was referenced that does not exist where existence is
    /// required, e.g. updating the weight of a missing edge.
    #[error("edge ({from}, {to}) not found")]
    EdgeNotFound { from: String, to: String },

    /// A batch weight assignment did not supply exactly one weight per edge.
    #[error("{edges} edges but {weights} weights supplied")]
    WeightCountMismatch { edges: usize, weights: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
