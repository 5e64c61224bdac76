//! Graph provider boundary and the in-memory provenance graph

pub mod store;

pub use store::ProvenanceGraph;

use crate::errors::Result;
use crate::model::{EdgeId, NodeId, StateEdge, StateNode};

/// Read-only view of a provenance graph used by traversal
///
/// Traversal reads `current()` once when it starts and never mutates the
/// graph. Advancing the current node after a successful traversal is the
/// implementor's business.
pub trait GraphProvider: Send + Sync {
    /// The node the application is currently in
    fn current(&self) -> &NodeId;

    /// Look a node up by id
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if the id is unknown.
    fn state_node(&self, id: &str) -> Result<&StateNode>;

    /// Resolve an edge index held by one of this provider's nodes
    ///
    /// # Errors
    ///
    /// Returns `EdgeNotFound` if the index is out of range.
    fn edge(&self, id: EdgeId) -> Result<&StateEdge>;

    /// The edge leading into `node`, `None` for the root
    ///
    /// # Errors
    ///
    /// Returns `EdgeNotFound` if the node's parent index is dangling.
    fn parent_edge(&self, node: &StateNode) -> Result<Option<&StateEdge>> {
        node.parent.map(|id| self.edge(id)).transpose()
    }
}
