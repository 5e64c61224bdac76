use serde::{Deserialize, Serialize};

use super::action::Action;
use super::node::NodeId;

/// Stable index of an edge inside a graph's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// Directed record of one action taking `previous` to `next`
///
/// The edge is the parent edge of `next` and one of the children of
/// `previous`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEdge {
    pub previous: NodeId,
    pub next: NodeId,
    pub action: Action,
}

impl StateEdge {
    pub fn new(previous: NodeId, next: NodeId, action: Action) -> Self {
        Self {
            previous,
            next,
            action,
        }
    }

    /// The endpoint that is not `node`, if `node` is an endpoint at all
    pub fn other_end(&self, node: &NodeId) -> Option<&NodeId> {
        if &self.previous == node {
            Some(&self.next)
        } else if &self.next == node {
            Some(&self.previous)
        } else {
            None
        }
    }
}
