use provtrail_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

use crate::model::EdgeId;
use crate::traversal::Direction;

/// Result type alias using TraversalError
pub type Result<T> = std::result::Result<T, TraversalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure a traversal or one of the bundled
/// collaborators can produce. Each kind maps to a stable code for
/// programmatic handling and log pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    // Lookup
    NotFound,
    AlreadyExists,

    // Traversal
    NoPath,
    UnconnectedNodes,
    IrreversibleUndo,
    RootBoundary,

    // Dispatch
    HandlerNotRegistered,
    HandlerFailed,

    // Structural integrity
    CycleDetected,
    BrokenLink,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::NoPath => "ERR_NO_PATH",
            ExErrorKind::UnconnectedNodes => "ERR_UNCONNECTED_NODES",
            ExErrorKind::IrreversibleUndo => "ERR_IRREVERSIBLE_UNDO",
            ExErrorKind::RootBoundary => "ERR_ROOT_BOUNDARY",
            ExErrorKind::HandlerNotRegistered => "ERR_HANDLER_NOT_REGISTERED",
            ExErrorKind::HandlerFailed => "ERR_HANDLER_FAILED",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::BrokenLink => "ERR_BROKEN_LINK",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind signals a bug in graph construction or in this
    /// crate rather than a bad request
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::UnconnectedNodes
                | ExErrorKind::RootBoundary
                | ExErrorKind::CycleDetected
                | ExErrorKind::BrokenLink
                | ExErrorKind::Internal
        )
    }
}

/// Canonical structured error type
///
/// Flattened view of a `TraversalError` plus correlation ids, suitable for
/// logging and for surfacing to operators.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<String>,
    edge_id: Option<EdgeId>,
    handler: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            edge_id: None,
            handler: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_node_id(mut self, id: impl Into<String>) -> Self {
        self.node_id = Some(id.into());
        self
    }

    pub fn with_edge_id(mut self, id: EdgeId) -> Self {
        self.edge_id = Some(id);
        self
    }

    pub fn with_handler(mut self, name: impl Into<String>) -> Self {
        self.handler = Some(name.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Attach both correlation ids from a request context
    pub fn with_context(mut self, ctx: &RequestContext) -> Self {
        self.request_id = Some(ctx.request_id.clone());
        self.trace_id = ctx.trace_id.clone();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    pub fn edge_id(&self) -> Option<EdgeId> {
        self.edge_id
    }

    pub fn handler(&self) -> Option<&str> {
        self.handler.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = &self.node_id {
            write!(f, " (node_id: {})", node_id)?;
        }
        if let Some(edge_id) = self.edge_id {
            write!(f, " ({})", edge_id)?;
        }
        if let Some(handler) = &self.handler {
            write!(f, " (handler: {})", handler)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error raised by a do/undo handler
///
/// Handlers are application code; they report failure with a message and the
/// replay engine wraps it into `TraversalError::HandlerFailed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Everything that can abort a traversal or a graph mutation
///
/// All variants are fatal to the operation that raised them. Handlers that
/// already ran before the failure are not reverted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraversalError {
    // ===== Lookup =====
    /// The graph provider does not know this node id
    #[error("State node not found: {node_id}")]
    NodeNotFound { node_id: String },

    /// A node references an edge index the graph provider does not hold
    #[error("State edge not found: {edge_id}")]
    EdgeNotFound { edge_id: EdgeId },

    // ===== Path finding =====
    /// Start and target are not in the same tree
    #[error("No path to target node {to} found from {from}")]
    NoPathFound { from: String, to: String },

    /// Two consecutive path nodes are not parent and child
    #[error("Unconnected nodes {current} and {next} cannot form a traversal hop")]
    UnconnectedNodes { current: String, next: String },

    // ===== Action selection =====
    /// Ascent across an edge whose action cannot be undone
    #[error("Trying to undo irreversible action on {edge_id} leading to node {node_id}")]
    IrreversibleUndo { node_id: String, edge_id: EdgeId },

    /// Descent into the root
    #[error("Root boundary crossed: {direction} at node {node_id}")]
    RootBoundary { node_id: String, direction: Direction },

    // ===== Dispatch =====
    /// No handler registered under this name
    #[error("No handler registered under name '{name}'")]
    HandlerNotRegistered { name: String },

    /// A handler's future resolved to an error
    #[error("Handler '{name}' failed at step {step}: {message}")]
    HandlerFailed {
        name: String,
        step: usize,
        message: String,
    },

    // ===== Graph construction =====
    /// Node id already present in the graph
    #[error("State node already exists: {node_id}")]
    DuplicateNode { node_id: String },

    /// `add_child` named a parent the graph does not hold
    #[error("Parent state node not found: {node_id}")]
    ParentNotFound { node_id: String },

    /// Handler name registered twice
    #[error("Handler already registered under name '{name}'")]
    DuplicateHandler { name: String },

    // ===== Integrity =====
    /// Following parent edges from this node never reaches a root
    #[error("Cycle detected in parent chain of node {node_id}")]
    ParentChainCycle { node_id: String },

    /// Parent and children references disagree for this node
    #[error("Broken link at node {node_id} through {edge_id}")]
    BrokenLink { node_id: String, edge_id: EdgeId },
}

impl From<TraversalError> for ExError {
    fn from(err: TraversalError) -> Self {
        let message = err.to_string();
        match err {
            TraversalError::NodeNotFound { node_id } => ExError::new(ExErrorKind::NotFound)
                .with_node_id(node_id)
                .with_message(message),

            TraversalError::EdgeNotFound { edge_id } => ExError::new(ExErrorKind::NotFound)
                .with_edge_id(edge_id)
                .with_message(message),

            TraversalError::NoPathFound { to, .. } => ExError::new(ExErrorKind::NoPath)
                .with_op("find_path")
                .with_node_id(to)
                .with_message(message),

            TraversalError::UnconnectedNodes { current, .. } => {
                ExError::new(ExErrorKind::UnconnectedNodes)
                    .with_op("classify_hop")
                    .with_node_id(current)
                    .with_message(message)
            }

            TraversalError::IrreversibleUndo { node_id, edge_id } => {
                ExError::new(ExErrorKind::IrreversibleUndo)
                    .with_op("select_step")
                    .with_node_id(node_id)
                    .with_edge_id(edge_id)
                    .with_message(message)
            }

            TraversalError::RootBoundary { node_id, .. } => {
                ExError::new(ExErrorKind::RootBoundary)
                    .with_op("classify_hop")
                    .with_node_id(node_id)
                    .with_message(message)
            }

            TraversalError::HandlerNotRegistered { name } => {
                ExError::new(ExErrorKind::HandlerNotRegistered)
                    .with_op("replay")
                    .with_handler(name)
                    .with_message(message)
            }

            TraversalError::HandlerFailed { name, .. } => ExError::new(ExErrorKind::HandlerFailed)
                .with_op("replay")
                .with_handler(name)
                .with_message(message),

            TraversalError::DuplicateNode { node_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("add_child")
                .with_node_id(node_id)
                .with_message(message),

            TraversalError::ParentNotFound { node_id } => ExError::new(ExErrorKind::NotFound)
                .with_op("add_child")
                .with_node_id(node_id)
                .with_message(message),

            TraversalError::DuplicateHandler { name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_op("register")
                .with_handler(name)
                .with_message(message),

            TraversalError::ParentChainCycle { node_id } => {
                ExError::new(ExErrorKind::CycleDetected)
                    .with_op("validate")
                    .with_node_id(node_id)
                    .with_message(message)
            }

            TraversalError::BrokenLink { node_id, edge_id } => {
                ExError::new(ExErrorKind::BrokenLink)
                    .with_op("validate")
                    .with_node_id(node_id)
                    .with_edge_id(edge_id)
                    .with_message(message)
            }
        }
    }
}
