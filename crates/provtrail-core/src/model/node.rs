use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use super::artifacts::Artifacts;
use super::edge::EdgeId;

/// Identifier of a state node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh UUIDv7 id, time-ordered like the history it labels
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A recorded application state
///
/// Nodes form a rooted tree: `parent` is the single incoming edge (absent
/// only on the root) and `children` are the outgoing edges in the order
/// they were recorded. Both are indices into the owning graph's edge arena,
/// so a node never owns its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateNode {
    pub id: NodeId,

    /// Human-readable label, usually the name of the action that produced it
    pub label: String,

    /// Value returned by the do-handler that produced this state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_result: Option<serde_json::Value>,

    pub parent: Option<EdgeId>,

    #[serde(default)]
    pub children: Vec<EdgeId>,

    #[serde(default)]
    pub artifacts: Artifacts,
}

impl StateNode {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action_result: None,
            parent: None,
            children: Vec::new(),
            artifacts: Artifacts::new(),
        }
    }

    pub fn with_action_result(mut self, result: serde_json::Value) -> Self {
        self.action_result = Some(result);
        self
    }

    pub fn with_artifact(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.artifacts.insert(key, value);
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_node_is_detached_root() {
        let node = StateNode::new("n1", "Root");
        assert_eq!(node.id.as_str(), "n1");
        assert_eq!(node.label, "Root");
        assert!(node.is_root());
        assert!(node.is_leaf());
        assert!(node.action_result.is_none());
        assert!(node.artifacts.is_empty());
    }

    #[test]
    fn test_builders() {
        let node = StateNode::new("n1", "Filtered")
            .with_action_result(json!({ "rows": 10 }))
            .with_artifact("thumbnail", json!("data:..."));
        assert_eq!(node.action_result, Some(json!({ "rows": 10 })));
        assert!(node.artifacts.contains_key("thumbnail"));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(NodeId::generate(), NodeId::generate());
    }
}
