pub mod action;
pub mod artifacts;
pub mod edge;
pub mod metadata;
pub mod node;

pub use action::{Action, Arguments};
pub use artifacts::Artifacts;
pub use edge::{EdgeId, StateEdge};
pub use metadata::ActionMetadata;
pub use node::{NodeId, StateNode};
