use std::collections::HashMap;

use super::GraphProvider;
use crate::errors::{Result, TraversalError};
use crate::model::{Action, EdgeId, NodeId, StateEdge, StateNode};

/// In-memory provenance graph
///
/// Nodes live in a map keyed by id and edges in an append-only arena, so
/// the node→edge→node cycle is expressed through indices. Nodes can only
/// enter the graph as the single root or as the child of a node that is
/// already present, which keeps the structure a tree by construction.
///
/// Not thread-safe for mutation; share it behind `&` for traversal only.
#[derive(Debug, Clone)]
pub struct ProvenanceGraph {
    nodes: HashMap<NodeId, StateNode>,
    edges: Vec<StateEdge>,
    root: NodeId,
    current: NodeId,
}

impl ProvenanceGraph {
    /// Create a graph holding a single root node with a generated id
    pub fn new(root_label: impl Into<String>) -> Self {
        Self::with_root(StateNode::new(NodeId::generate(), root_label))
    }

    /// Create a graph around an existing root node
    ///
    /// Structural links on `root` are reset; the graph owns the tree shape.
    pub fn with_root(mut root: StateNode) -> Self {
        root.parent = None;
        root.children.clear();

        let id = root.id.clone();
        let mut nodes = HashMap::new();
        nodes.insert(id.clone(), root);

        Self {
            nodes,
            edges: Vec::new(),
            root: id.clone(),
            current: id,
        }
    }

    /// Version of the graph model, exposed for persistence layers
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn root(&self) -> &NodeId {
        &self.root
    }

    pub fn current_node(&self) -> &StateNode {
        // current is only ever set to an id present in `nodes`
        &self.nodes[&self.current]
    }

    /// Record `node` as the result of applying `action` to `parent_id`
    ///
    /// Returns the index of the new edge. Does not move the current node.
    ///
    /// # Errors
    ///
    /// * `ParentNotFound` - If `parent_id` is not in the graph
    /// * `DuplicateNode` - If a node with the same id already exists
    pub fn add_child(
        &mut self,
        parent_id: &str,
        mut node: StateNode,
        action: Action,
    ) -> Result<EdgeId> {
        if !self.nodes.contains_key(parent_id) {
            return Err(TraversalError::ParentNotFound {
                node_id: parent_id.to_string(),
            });
        }
        if self.nodes.contains_key(node.id.as_str()) {
            return Err(TraversalError::DuplicateNode {
                node_id: node.id.to_string(),
            });
        }

        let edge_id = EdgeId(self.edges.len());
        let parent_key = NodeId::from(parent_id);
        self.edges
            .push(StateEdge::new(parent_key.clone(), node.id.clone(), action));

        node.parent = Some(edge_id);
        node.children.clear();
        self.nodes.insert(node.id.clone(), node);

        if let Some(parent) = self.nodes.get_mut(&parent_key) {
            parent.children.push(edge_id);
        }

        Ok(edge_id)
    }

    /// Move the current-node pointer
    ///
    /// # Errors
    ///
    /// Returns `NodeNotFound` if `id` is unknown.
    pub fn set_current(&mut self, id: &str) -> Result<()> {
        let node = self.state_node(id)?;
        self.current = node.id.clone();
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &StateNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[StateEdge] {
        &self.edges
    }

    /// Check the parent/children back-references of every node
    ///
    /// # Errors
    ///
    /// Returns the first integrity violation found, see
    /// [`crate::rules::invariants::validate_tree`].
    pub fn validate(&self) -> Result<()> {
        crate::rules::invariants::validate_tree(self, self.nodes.values())
    }
}

impl GraphProvider for ProvenanceGraph {
    fn current(&self) -> &NodeId {
        &self.current
    }

    fn state_node(&self, id: &str) -> Result<&StateNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| TraversalError::NodeNotFound {
                node_id: id.to_string(),
            })
    }

    fn edge(&self, id: EdgeId) -> Result<&StateEdge> {
        self.edges
            .get(id.0)
            .ok_or(TraversalError::EdgeNotFound { edge_id: id })
    }
}
