use std::sync::{Arc, Mutex};

use provtrail_core::{Action, Arguments, HandlerRegistry, ProvenanceGraph, StateNode};
use serde_json::json;

/// One recorded handler invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub handler: String,
    pub arguments: Arguments,
}

#[allow(dead_code)]
impl Call {
    pub fn new(handler: &str, arguments: Arguments) -> Self {
        Self {
            handler: handler.to_string(),
            arguments,
        }
    }
}

/// Shared log of handler invocations, in call order
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

#[allow(dead_code)]
impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn handler_names(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.handler).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Registry whose handlers record their call and echo it back
///
/// Each handler returns `{"handler": name, "args": arguments}`, so the value
/// a traversal resolves to identifies the last handler that ran.
#[allow(dead_code)]
pub fn recording_registry(names: &[&str]) -> (HandlerRegistry, Recorder) {
    let recorder = Recorder::default();
    let mut registry = HandlerRegistry::new();

    for name in names {
        let calls = recorder.calls.clone();
        let handler = name.to_string();
        registry
            .register_fn(*name, move |arguments| {
                let calls = calls.clone();
                let handler = handler.clone();
                async move {
                    calls.lock().unwrap().push(Call {
                        handler: handler.clone(),
                        arguments: arguments.clone(),
                    });
                    Ok(json!({ "handler": handler, "args": arguments }))
                }
            })
            .unwrap();
    }

    (registry, recorder)
}

/// A(root) ─ B ─ C, both edges reversible
///
/// A→B does `add [1]` / undoes `sub [-1]`; B→C does `add [2]` / undoes
/// `sub [-2]`. Current node is C.
#[allow(dead_code)]
pub fn three_node_chain() -> ProvenanceGraph {
    let mut graph = ProvenanceGraph::with_root(StateNode::new("A", "Root"));
    graph
        .add_child(
            "A",
            StateNode::new("B", "Added one"),
            Action::reversible("add", vec![json!(1)], "sub", vec![json!(-1)]),
        )
        .unwrap();
    graph
        .add_child(
            "B",
            StateNode::new("C", "Added two"),
            Action::reversible("add", vec![json!(2)], "sub", vec![json!(-2)]),
        )
        .unwrap();
    graph.set_current("C").unwrap();
    graph
}

/// root ─ X ─ Y ─ Z with root→X and X→Y reversible, Y→Z irreversible
#[allow(dead_code)]
pub fn chain_with_irreversible_tip() -> ProvenanceGraph {
    let mut graph = ProvenanceGraph::with_root(StateNode::new("root", "Root"));
    graph
        .add_child(
            "root",
            StateNode::new("X", "X"),
            Action::reversible("do_x", vec![json!("x")], "undo_x", vec![json!("x")]),
        )
        .unwrap();
    graph
        .add_child(
            "X",
            StateNode::new("Y", "Y"),
            Action::reversible("do_y", vec![json!("y")], "undo_y", vec![json!("y")]),
        )
        .unwrap();
    graph
        .add_child(
            "Y",
            StateNode::new("Z", "Z"),
            Action::irreversible("do_z", vec![json!("z")]),
        )
        .unwrap();
    graph
}

/// Two branches off one root, every edge reversible
///
/// ```text
/// root ─ a1 ─ a2
///      └ b1 ─ b2
/// ```
#[allow(dead_code)]
pub fn two_branches() -> ProvenanceGraph {
    let mut graph = ProvenanceGraph::with_root(StateNode::new("root", "Root"));
    for (parent, child) in [("root", "a1"), ("a1", "a2"), ("root", "b1"), ("b1", "b2")] {
        graph
            .add_child(
                parent,
                StateNode::new(child, child),
                Action::reversible(
                    "apply",
                    vec![json!(child)],
                    "revert",
                    vec![json!(child)],
                ),
            )
            .unwrap();
    }
    graph
}
