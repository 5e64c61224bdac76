use std::collections::{HashMap, HashSet};

use crate::errors::{Result, TraversalError};
use crate::graph::GraphProvider;
use crate::model::NodeId;

/// The unique tree path between two nodes
///
/// Stored target-first, start-last: the order in which a depth-first search
/// unwinds once it hits the target. Consumers should not index into it;
/// [`Track::replay_hops`] hands out hops in the order they must be replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    nodes: Vec<NodeId>,
}

impl Track {
    pub fn target(&self) -> &NodeId {
        &self.nodes[0]
    }

    pub fn start(&self) -> &NodeId {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes on the path, at least 1
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges crossed, 0 when start equals target
    pub fn hop_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Nodes in storage order (target first)
    pub fn nodes_target_first(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Nodes from start to target
    pub fn replay_order(&self) -> impl DoubleEndedIterator<Item = &NodeId> {
        self.nodes.iter().rev()
    }

    /// `(from, to)` pairs from start to target
    pub fn replay_hops(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.nodes.windows(2).rev().map(|pair| (&pair[1], &pair[0]))
    }
}

/// Tree neighbours of `id`: children in recorded order, then the parent
///
/// An edge listed on the node that does not touch it leads nowhere.
fn neighbours<G: GraphProvider + ?Sized>(graph: &G, id: &NodeId) -> Result<Vec<NodeId>> {
    let node = graph.state_node(id.as_str())?;

    let mut out = Vec::with_capacity(node.children.len() + 1);
    for edge_id in node.children.iter().chain(node.parent.as_ref()) {
        if let Some(other) = graph.edge(*edge_id)?.other_end(id) {
            out.push(other.clone());
        }
    }

    Ok(out)
}

/// Find the path from `start` to `target`
///
/// Depth-first search that may move in either tree direction. The search is
/// driven by an explicit stack so long histories cannot exhaust the call
/// stack, and it keeps a visited set: under the tree invariant this only
/// stops it from stepping back where it came from, and on a malformed
/// provider it turns an endless walk into `NoPathFound`.
///
/// # Errors
///
/// * `NodeNotFound` - If `start` or `target` is not in the graph
/// * `EdgeNotFound` - If a node on the way holds a dangling edge index
/// * `NoPathFound` - If no branch from `start` reaches `target`
pub fn find_path<G: GraphProvider + ?Sized>(
    graph: &G,
    start: &NodeId,
    target: &NodeId,
) -> Result<Track> {
    graph.state_node(start.as_str())?;
    graph.state_node(target.as_str())?;

    let no_path = || TraversalError::NoPathFound {
        from: start.to_string(),
        to: target.to_string(),
    };

    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    visited.insert(start.clone());
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if &current == target {
            // Unwind target → start along the recorded predecessors
            let mut nodes = vec![current];
            while nodes[nodes.len() - 1] != *start {
                let prev = came_from
                    .get(&nodes[nodes.len() - 1])
                    .ok_or_else(no_path)?;
                nodes.push(prev.clone());
            }
            return Ok(Track { nodes });
        }

        // Reversed so the first child is explored first
        for next in neighbours(graph, &current)?.into_iter().rev() {
            if visited.insert(next.clone()) {
                came_from.insert(next.clone(), current.clone());
                stack.push(next);
            }
        }
    }

    Err(no_path())
}
