use serde::{Deserialize, Serialize};

use crate::errors::{Result, TraversalError};
use crate::graph::GraphProvider;
use crate::model::{EdgeId, NodeId};

/// Which way a hop moves through the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward the root; replays an undo
    Ascent,
    /// Away from the root; replays a do
    Descent,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascent => "ascent",
            Direction::Descent => "descent",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascent => Direction::Descent,
            Direction::Descent => Direction::Ascent,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the hop from `current` to `next`
///
/// Only meaningful for tree-adjacent nodes. It is an ascent when `current`'s
/// parent edge starts at `next`, and a descent when `next`'s parent edge
/// starts at `current`.
///
/// # Errors
///
/// * `NodeNotFound` / `EdgeNotFound` - If either node or its parent edge
///   cannot be resolved
/// * `RootBoundary` - If the hop is not an ascent and `next` is a root, so
///   it would be a descent into the root
/// * `UnconnectedNodes` - If neither node is the other's parent
pub fn classify_hop<G: GraphProvider + ?Sized>(
    graph: &G,
    current: &NodeId,
    next: &NodeId,
) -> Result<Direction> {
    classify_hop_edge(graph, current, next).map(|(direction, _)| direction)
}

/// [`classify_hop`] plus the edge the hop crosses
pub(crate) fn classify_hop_edge<G: GraphProvider + ?Sized>(
    graph: &G,
    current: &NodeId,
    next: &NodeId,
) -> Result<(Direction, EdgeId)> {
    let current_node = graph.state_node(current.as_str())?;
    if let Some(edge_id) = current_node.parent {
        if graph.edge(edge_id)?.previous == *next {
            return Ok((Direction::Ascent, edge_id));
        }
    }

    let next_node = graph.state_node(next.as_str())?;
    let Some(edge_id) = next_node.parent else {
        return Err(TraversalError::RootBoundary {
            node_id: next.to_string(),
            direction: Direction::Descent,
        });
    };
    if graph.edge(edge_id)?.previous == *current {
        Ok((Direction::Descent, edge_id))
    } else {
        Err(TraversalError::UnconnectedNodes {
            current: current.to_string(),
            next: next.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ProvenanceGraph;
    use crate::model::{Action, StateNode};

    // r ─ a ─ b
    //   └ c
    fn graph() -> ProvenanceGraph {
        let mut graph = ProvenanceGraph::with_root(StateNode::new("r", "R"));
        for (parent, child) in [("r", "a"), ("a", "b"), ("r", "c")] {
            graph
                .add_child(
                    parent,
                    StateNode::new(child, child),
                    Action::irreversible("noop", vec![]),
                )
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_child_to_parent_is_ascent() {
        let g = graph();
        assert_eq!(classify_hop(&g, &"b".into(), &"a".into()).unwrap(), Direction::Ascent);
        assert_eq!(classify_hop(&g, &"a".into(), &"r".into()).unwrap(), Direction::Ascent);
    }

    #[test]
    fn test_parent_to_child_is_descent() {
        let g = graph();
        assert_eq!(classify_hop(&g, &"r".into(), &"c".into()).unwrap(), Direction::Descent);
        assert_eq!(classify_hop(&g, &"a".into(), &"b".into()).unwrap(), Direction::Descent);
    }

    #[test]
    fn test_siblings_are_unconnected() {
        let g = graph();
        let err = classify_hop(&g, &"a".into(), &"c".into()).unwrap_err();
        assert_eq!(
            err,
            TraversalError::UnconnectedNodes {
                current: "a".to_string(),
                next: "c".to_string(),
            }
        );
    }

    #[test]
    fn test_descent_into_root_is_root_boundary() {
        let g = graph();
        let err = classify_hop(&g, &"b".into(), &"r".into()).unwrap_err();
        assert_eq!(
            err,
            TraversalError::RootBoundary {
                node_id: "r".to_string(),
                direction: Direction::Descent,
            }
        );
    }

    #[test]
    fn test_root_to_grandchild_is_unconnected() {
        let g = graph();
        let err = classify_hop(&g, &"r".into(), &"b".into()).unwrap_err();
        assert!(matches!(err, TraversalError::UnconnectedNodes { .. }));
    }

    #[test]
    fn test_hop_edge_is_the_crossed_parent_edge() {
        let g = graph();
        let (direction, edge) = classify_hop_edge(&g, &"b".into(), &"a".into()).unwrap();
        assert_eq!(direction, Direction::Ascent);
        assert_eq!(edge, g.state_node("b").unwrap().parent.unwrap());

        let (direction, edge) = classify_hop_edge(&g, &"r".into(), &"c".into()).unwrap();
        assert_eq!(direction, Direction::Descent);
        assert_eq!(edge, g.state_node("c").unwrap().parent.unwrap());
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Ascent.reversed(), Direction::Descent);
        assert_eq!(Direction::Descent.to_string(), "descent");
    }
}
