use serde::{Deserialize, Serialize};

use super::metadata::ActionMetadata;

/// Arguments handed to a do/undo handler
///
/// Recorded once when the action is applied and never mutated afterwards.
pub type Arguments = Vec<serde_json::Value>;

/// An action application recorded on a state edge
///
/// Both variants name their handlers instead of holding them; the names are
/// resolved through a `FunctionRegistry` at replay time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Can be replayed forward but never undone
    Irreversible {
        metadata: ActionMetadata,
        do_handler: String,
        do_arguments: Arguments,
    },
    /// Carries the handler and arguments that revert it
    Reversible {
        metadata: ActionMetadata,
        do_handler: String,
        do_arguments: Arguments,
        undo_handler: String,
        undo_arguments: Arguments,
    },
}

impl Action {
    pub fn irreversible(do_handler: impl Into<String>, do_arguments: Arguments) -> Self {
        Action::Irreversible {
            metadata: ActionMetadata::default(),
            do_handler: do_handler.into(),
            do_arguments,
        }
    }

    pub fn reversible(
        do_handler: impl Into<String>,
        do_arguments: Arguments,
        undo_handler: impl Into<String>,
        undo_arguments: Arguments,
    ) -> Self {
        Action::Reversible {
            metadata: ActionMetadata::default(),
            do_handler: do_handler.into(),
            do_arguments,
            undo_handler: undo_handler.into(),
            undo_arguments,
        }
    }

    pub fn with_metadata(mut self, meta: ActionMetadata) -> Self {
        match &mut self {
            Action::Irreversible { metadata, .. } | Action::Reversible { metadata, .. } => {
                *metadata = meta;
            }
        }
        self
    }

    pub fn metadata(&self) -> &ActionMetadata {
        match self {
            Action::Irreversible { metadata, .. } | Action::Reversible { metadata, .. } => metadata,
        }
    }

    pub fn do_handler(&self) -> &str {
        match self {
            Action::Irreversible { do_handler, .. } | Action::Reversible { do_handler, .. } => {
                do_handler
            }
        }
    }

    pub fn do_arguments(&self) -> &Arguments {
        match self {
            Action::Irreversible { do_arguments, .. }
            | Action::Reversible { do_arguments, .. } => do_arguments,
        }
    }

    pub fn is_reversible(&self) -> bool {
        matches!(self, Action::Reversible { .. })
    }

    /// Undo handler name and arguments, `None` for irreversible actions
    pub fn undo(&self) -> Option<(&str, &Arguments)> {
        match self {
            Action::Irreversible { .. } => None,
            Action::Reversible {
                undo_handler,
                undo_arguments,
                ..
            } => Some((undo_handler, undo_arguments)),
        }
    }
}
