use std::collections::HashSet;

use crate::errors::{Result, TraversalError};
use crate::graph::GraphProvider;
use crate::model::{EdgeId, NodeId, StateNode};

/// Check whether following parent edges from `node_id` loops
///
/// A dangling parent edge or unknown node ends the walk without reporting a
/// cycle; `find_broken_links` reports those.
pub fn has_cycle<G: GraphProvider + ?Sized>(graph: &G, node_id: &NodeId) -> bool {
    let mut visited = HashSet::new();
    let mut current = Some(node_id.clone());

    while let Some(id) = current {
        if !visited.insert(id.clone()) {
            return true;
        }

        current = graph
            .state_node(id.as_str())
            .ok()
            .and_then(|node| graph.parent_edge(node).ok().flatten())
            .map(|edge| edge.previous.clone());
    }

    false
}

/// Find edges whose two endpoints disagree about the link
///
/// A parent edge must point `next` back at its node and be listed among the
/// children of its `previous` node; a child edge must start at its node and
/// be the parent edge of its `next` node.
///
/// Returns list of (node_id, edge_id) pairs, one per disagreement.
pub fn find_broken_links<'a, G, I>(graph: &G, nodes: I) -> Vec<(NodeId, EdgeId)>
where
    G: GraphProvider + ?Sized,
    I: IntoIterator<Item = &'a StateNode>,
{
    let mut broken = Vec::new();

    for node in nodes {
        if let Some(parent_id) = node.parent {
            let linked = graph.edge(parent_id).ok().is_some_and(|edge| {
                edge.next == node.id
                    && graph
                        .state_node(edge.previous.as_str())
                        .is_ok_and(|prev| prev.children.contains(&parent_id))
            });
            if !linked {
                broken.push((node.id.clone(), parent_id));
            }
        }

        for &child_id in &node.children {
            let linked = graph.edge(child_id).ok().is_some_and(|edge| {
                edge.previous == node.id
                    && graph
                        .state_node(edge.next.as_str())
                        .is_ok_and(|next| next.parent == Some(child_id))
            });
            if !linked {
                broken.push((node.id.clone(), child_id));
            }
        }
    }

    broken
}

/// Validate that `nodes` form a well-linked, acyclic tree in `graph`
///
/// # Errors
///
/// * `BrokenLink` - First disagreement reported by `find_broken_links`
/// * `ParentChainCycle` - A node whose parent chain never reaches a root
pub fn validate_tree<'a, G, I>(graph: &G, nodes: I) -> Result<()>
where
    G: GraphProvider + ?Sized,
    I: IntoIterator<Item = &'a StateNode>,
    I::IntoIter: Clone,
{
    let nodes = nodes.into_iter();

    if let Some((node_id, edge_id)) = find_broken_links(graph, nodes.clone()).into_iter().next() {
        return Err(TraversalError::BrokenLink {
            node_id: node_id.to_string(),
            edge_id,
        });
    }

    for node in nodes {
        if has_cycle(graph, &node.id) {
            return Err(TraversalError::ParentChainCycle {
                node_id: node.id.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ProvenanceGraph;
    use crate::model::Action;

    fn chain() -> ProvenanceGraph {
        let mut graph = ProvenanceGraph::with_root(StateNode::new("r", "R"));
        graph
            .add_child("r", StateNode::new("a", "A"), Action::irreversible("x", vec![]))
            .unwrap();
        graph
            .add_child("a", StateNode::new("b", "B"), Action::irreversible("y", vec![]))
            .unwrap();
        graph
    }

    #[test]
    fn test_well_formed_graph_has_no_cycle() {
        let graph = chain();
        assert!(!has_cycle(&graph, &NodeId::from("b")));
        assert!(find_broken_links(&graph, graph.nodes()).is_empty());
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_detached_node_copy_is_reported_broken() {
        let graph = chain();
        // A node claiming a parent edge that points at someone else
        let mut impostor = StateNode::new("z", "Z");
        impostor.parent = Some(EdgeId(0));

        let broken = find_broken_links(&graph, [&impostor]);
        assert_eq!(broken, vec![(NodeId::from("z"), EdgeId(0))]);
    }

    #[test]
    fn test_dangling_child_index_is_reported() {
        let graph = chain();
        let mut node = graph.state_node("b").unwrap().clone();
        node.children.push(EdgeId(42));

        let err = validate_tree(&graph, [&node]).unwrap_err();
        assert_eq!(
            err,
            TraversalError::BrokenLink {
                node_id: "b".to_string(),
                edge_id: EdgeId(42),
            }
        );
    }
}
