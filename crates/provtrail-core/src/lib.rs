//! provtrail core - provenance graph traversal
//!
//! A provenance graph is a tree of recorded application states joined by the
//! actions that produced them. This crate moves an application from its
//! current state to any other recorded state by replaying the undo and do
//! handlers along the tree path between the two.
//!
//! - State node, edge and action models, arena-indexed
//! - [`GraphProvider`] / [`FunctionRegistry`] boundary traits with in-memory
//!   implementations ([`ProvenanceGraph`], [`HandlerRegistry`])
//! - Path finding, hop classification, step selection and sequential replay
//! - Tree integrity checks
//! - Canonical error and logging facilities
//!
//! ```no_run
//! use provtrail_core::{Action, HandlerRegistry, ProvenanceGraph, StateNode};
//! use provtrail_core::traversal::traverse_to_state_node;
//! use serde_json::json;
//!
//! # async fn demo() -> provtrail_core::Result<()> {
//! let mut registry = HandlerRegistry::new();
//! registry.register_fn("add", |args| async move { Ok(json!(args)) })?;
//! registry.register_fn("sub", |args| async move { Ok(json!(args)) })?;
//!
//! let mut graph = ProvenanceGraph::with_root(StateNode::new("root", "Root"));
//! graph.add_child(
//!     "root",
//!     StateNode::new("one", "Added one"),
//!     Action::reversible("add", vec![json!(1)], "sub", vec![json!(1)]),
//! )?;
//!
//! traverse_to_state_node(&graph, &registry, "one").await?;
//! graph.set_current("one")?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod graph;
pub mod logging_facility;
pub mod model;
pub mod registry;
pub mod rules;
pub mod traversal;

/// Re-exported so the logging macros resolve schema constants from any crate
pub use provtrail_core_types as core_types;

pub use errors::{ExError, ExErrorKind, HandlerError, Result, TraversalError};
pub use graph::{GraphProvider, ProvenanceGraph};
pub use model::{Action, ActionMetadata, Arguments, Artifacts, EdgeId, NodeId, StateEdge, StateNode};
pub use registry::{ActionHandler, FunctionRegistry, HandlerRegistry, HandlerResult};
pub use traversal::{Direction, ProvenanceGraphTraverser, ReplayStep, Track};
