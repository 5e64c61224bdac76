use serde::{Deserialize, Serialize};

use super::direction::{classify_hop_edge, Direction};
use super::path::Track;
use crate::errors::{Result, TraversalError};
use crate::graph::GraphProvider;
use crate::model::{Arguments, EdgeId, NodeId};

/// One handler invocation planned for a traversal
///
/// The handler is named, not resolved; resolution happens right before the
/// step runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayStep {
    pub direction: Direction,
    /// Edge whose action is being done or undone
    pub edge: EdgeId,
    pub handler: String,
    pub arguments: Arguments,
}

/// Pick the handler and arguments that move from `this` to `next`
///
/// # Errors
///
/// * `UnconnectedNodes` - If the nodes are not parent and child
/// * `RootBoundary` - Descent into the root
/// * `IrreversibleUndo` - Ascent across an irreversible action
pub fn select_step<G: GraphProvider + ?Sized>(
    graph: &G,
    this: &NodeId,
    next: &NodeId,
) -> Result<ReplayStep> {
    // Ascent undoes this node's parent edge, descent does next's parent edge
    let (direction, edge_id) = classify_hop_edge(graph, this, next)?;
    let action = &graph.edge(edge_id)?.action;

    let (handler, arguments) = match direction {
        Direction::Ascent => {
            action
                .undo()
                .ok_or_else(|| TraversalError::IrreversibleUndo {
                    node_id: this.to_string(),
                    edge_id,
                })?
        }
        Direction::Descent => (action.do_handler(), action.do_arguments()),
    };

    Ok(ReplayStep {
        direction,
        edge: edge_id,
        handler: handler.to_string(),
        arguments: arguments.clone(),
    })
}

/// Plan every step of `track`, in replay order
///
/// Fails on the first hop that cannot be planned, before anything runs.
///
/// # Errors
///
/// See [`select_step`].
pub fn select_steps<G: GraphProvider + ?Sized>(graph: &G, track: &Track) -> Result<Vec<ReplayStep>> {
    track
        .replay_hops()
        .map(|(this, next)| select_step(graph, this, next))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ProvenanceGraph;
    use crate::model::{Action, StateNode};
    use crate::traversal::find_path;
    use serde_json::json;

    // r ─(rev)─ a ─(irrev)─ b
    fn graph() -> ProvenanceGraph {
        let mut graph = ProvenanceGraph::with_root(StateNode::new("r", "R"));
        graph
            .add_child(
                "r",
                StateNode::new("a", "A"),
                Action::reversible("add", vec![json!(1)], "sub", vec![json!(1)]),
            )
            .unwrap();
        graph
            .add_child(
                "a",
                StateNode::new("b", "B"),
                Action::irreversible("export", vec![json!("out.csv")]),
            )
            .unwrap();
        graph
    }

    #[test]
    fn test_ascent_selects_undo() {
        let g = graph();
        let step = select_step(&g, &"a".into(), &"r".into()).unwrap();
        assert_eq!(step.direction, Direction::Ascent);
        assert_eq!(step.edge, EdgeId(0));
        assert_eq!(step.handler, "sub");
        assert_eq!(step.arguments, vec![json!(1)]);
    }

    #[test]
    fn test_descent_selects_do_even_if_irreversible() {
        let g = graph();
        let step = select_step(&g, &"a".into(), &"b".into()).unwrap();
        assert_eq!(step.direction, Direction::Descent);
        assert_eq!(step.handler, "export");
        assert_eq!(step.arguments, vec![json!("out.csv")]);
    }

    #[test]
    fn test_ascent_across_irreversible_fails() {
        let g = graph();
        let err = select_step(&g, &"b".into(), &"a".into()).unwrap_err();
        assert_eq!(
            err,
            TraversalError::IrreversibleUndo {
                node_id: "b".to_string(),
                edge_id: EdgeId(1),
            }
        );
    }

    #[test]
    fn test_descent_into_root_fails() {
        let g = graph();
        let err = select_step(&g, &"b".into(), &"r".into()).unwrap_err();
        assert_eq!(
            err,
            TraversalError::RootBoundary {
                node_id: "r".to_string(),
                direction: Direction::Descent,
            }
        );
    }

    #[test]
    fn test_select_steps_follows_replay_order() {
        let g = graph();
        let track = find_path(&g, &"r".into(), &"b".into()).unwrap();
        let steps = select_steps(&g, &track).unwrap();
        let handlers: Vec<&str> = steps.iter().map(|s| s.handler.as_str()).collect();
        assert_eq!(handlers, vec!["add", "export"]);
    }
}
