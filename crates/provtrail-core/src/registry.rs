//! Function registry boundary
//!
//! Actions name their handlers; a registry turns a name into something that
//! can be awaited. Lookups happen at replay time, one step at a time, so a
//! handler registered while a traversal is being planned is still found.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{HandlerError, Result, TraversalError};
use crate::model::Arguments;

/// Outcome of a single handler invocation
pub type HandlerResult = std::result::Result<serde_json::Value, HandlerError>;

/// An executable do/undo handler
///
/// Any `Fn(Arguments) -> impl Future<Output = HandlerResult>` closure is a
/// handler, so most applications never implement this by hand.
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn call(&self, arguments: Arguments) -> HandlerResult;
}

#[async_trait]
impl<F, Fut> ActionHandler for F
where
    F: Fn(Arguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn call(&self, arguments: Arguments) -> HandlerResult {
        (self)(arguments).await
    }
}

/// Lookup of handlers by name
pub trait FunctionRegistry: Send + Sync {
    /// Resolve a handler
    ///
    /// # Errors
    ///
    /// Returns `HandlerNotRegistered` if nothing is registered under `name`.
    fn function_by_name(&self, name: &str) -> Result<Arc<dyn ActionHandler>>;
}

/// In-memory name → handler table
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`
    ///
    /// # Errors
    ///
    /// Returns `DuplicateHandler` if the name is taken; the existing handler
    /// is kept.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H) -> Result<()>
    where
        H: ActionHandler + 'static,
    {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            return Err(TraversalError::DuplicateHandler { name });
        }
        tracing::debug!(component = module_path!(), handler = %name, "handler registered");
        self.handlers.insert(name, Arc::new(handler));
        Ok(())
    }

    /// Register an async closure under `name`
    ///
    /// Same as [`Self::register`], with the closure's argument and output
    /// types inferred from the bound.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateHandler` if the name is taken.
    pub fn register_fn<F, Fut>(&mut self, name: impl Into<String>, handler: F) -> Result<()>
    where
        F: Fn(Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.register(name, handler)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

impl FunctionRegistry for HandlerRegistry {
    fn function_by_name(&self, name: &str) -> Result<Arc<dyn ActionHandler>> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| TraversalError::HandlerNotRegistered {
                name: name.to_string(),
            })
    }
}
