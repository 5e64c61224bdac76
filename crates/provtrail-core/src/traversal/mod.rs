//! Moving the application between recorded states
//!
//! A traversal is planned synchronously and replayed asynchronously:
//!
//! 1. [`path::find_path`] walks the tree from the current node to the target
//! 2. [`direction::classify_hop`] labels every hop an ascent or a descent
//! 3. [`selector::select_steps`] picks the undo or do half of each edge
//! 4. [`replay::replay`] resolves and awaits the handlers one by one
//!
//! [`traverser::traverse_to_state_node`] runs the whole pipeline.

pub mod direction;
pub mod path;
pub mod replay;
pub mod selector;
pub mod traverser;

pub use direction::{classify_hop, Direction};
pub use path::{find_path, Track};
pub use replay::replay;
pub use selector::{select_step, select_steps, ReplayStep};
pub use traverser::{
    plan_traversal, traverse_to_state_node, traverse_with_context, ProvenanceGraphTraverser,
};
