use std::time::Instant;

use provtrail_core_types::RequestContext;
use tracing::Instrument;

use super::path::{find_path, Track};
use super::replay::replay;
use super::selector::{select_steps, ReplayStep};
use crate::errors::{ExError, Result, TraversalError};
use crate::graph::GraphProvider;
use crate::registry::FunctionRegistry;
use crate::{log_op_end, log_op_error, log_op_start};

const OP_TRAVERSE: &str = "traverse_to_state_node";

/// Plan the steps that move `graph` from its current node to `id`
///
/// Nothing is executed. An empty plan means the graph is already there.
///
/// # Errors
///
/// * `NodeNotFound` - If `id` is unknown
/// * `NoPathFound` - If the target is not reachable from the current node
/// * `UnconnectedNodes`, `RootBoundary`, `IrreversibleUndo` - See
///   [`super::selector::select_step`]
pub fn plan_traversal<G: GraphProvider + ?Sized>(graph: &G, id: &str) -> Result<Vec<ReplayStep>> {
    plan_with_track(graph, id).map(|(_, steps)| steps)
}

fn plan_with_track<G: GraphProvider + ?Sized>(
    graph: &G,
    id: &str,
) -> Result<(Track, Vec<ReplayStep>)> {
    let target = graph.state_node(id)?.id.clone();
    let track = find_path(graph, graph.current(), &target)?;
    let steps = select_steps(graph, &track)?;
    Ok((track, steps))
}

/// Move the application from the graph's current node to node `id`
///
/// Reads `graph.current()` once, plans every step up front, then replays the
/// handlers in sequence. The graph's current pointer is left untouched.
///
/// Resolves to the value returned by the last handler that ran, not to the
/// target node; `None` when the target is the current node.
///
/// # Errors
///
/// Any planning error from [`plan_traversal`] (no handler has run), or a
/// dispatch error from [`replay`] (earlier handlers have run and are not
/// reverted).
pub async fn traverse_to_state_node<G, R>(
    graph: &G,
    registry: &R,
    id: &str,
) -> Result<Option<serde_json::Value>>
where
    G: GraphProvider + ?Sized,
    R: FunctionRegistry + ?Sized,
{
    traverse_with_context(graph, registry, id, &RequestContext::new()).await
}

/// [`traverse_to_state_node`] with caller-supplied correlation ids
///
/// # Errors
///
/// See [`traverse_to_state_node`].
pub async fn traverse_with_context<G, R>(
    graph: &G,
    registry: &R,
    id: &str,
    ctx: &RequestContext,
) -> Result<Option<serde_json::Value>>
where
    G: GraphProvider + ?Sized,
    R: FunctionRegistry + ?Sized,
{
    let span = tracing::info_span!(
        "traversal",
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(|t| t.as_str()),
    );

    async move {
        log_op_start!(
            OP_TRAVERSE,
            target_id = id,
            node_id = graph.current().as_str(),
            request_id = ctx.request_id.as_str(),
        );
        let start = Instant::now();

        let outcome = plan_and_replay(graph, registry, id).await.map_err(|e| {
            log_op_error!(
                OP_TRAVERSE,
                ExError::from(e.clone()).with_context(ctx),
                duration_ms = start.elapsed().as_millis() as u64,
                target_id = id,
                request_id = ctx.request_id.as_str(),
            );
            e
        });
        let (result, track_len, steps) = outcome?;

        log_op_end!(
            OP_TRAVERSE,
            duration_ms = start.elapsed().as_millis() as u64,
            target_id = id,
            track_len = track_len as u64,
            steps = steps as u64,
            request_id = ctx.request_id.as_str(),
        );

        Ok::<_, TraversalError>(result)
    }
    .instrument(span)
    .await
}

async fn plan_and_replay<G, R>(
    graph: &G,
    registry: &R,
    id: &str,
) -> Result<(Option<serde_json::Value>, usize, usize)>
where
    G: GraphProvider + ?Sized,
    R: FunctionRegistry + ?Sized,
{
    let (track, steps) = plan_with_track(graph, id)?;
    let result = replay(registry, &steps).await?;
    Ok((result, track.node_count(), steps.len()))
}

/// Traversal entry point bound to one graph and one registry
///
/// `to_state_node` takes `&mut self`, so a single traverser can never run two
/// traversals at once. Nothing stops two traversers over the same graph;
/// doing so is unsupported.
pub struct ProvenanceGraphTraverser<'a, G: ?Sized, R: ?Sized> {
    registry: &'a R,
    graph: &'a G,
}

impl<'a, G, R> ProvenanceGraphTraverser<'a, G, R>
where
    G: GraphProvider + ?Sized,
    R: FunctionRegistry + ?Sized,
{
    pub fn new(registry: &'a R, graph: &'a G) -> Self {
        Self { registry, graph }
    }

    /// Dry run: the steps [`Self::to_state_node`] would execute
    ///
    /// # Errors
    ///
    /// See [`plan_traversal`].
    pub fn plan(&self, id: &str) -> Result<Vec<ReplayStep>> {
        plan_traversal(self.graph, id)
    }

    /// # Errors
    ///
    /// See [`traverse_to_state_node`].
    pub async fn to_state_node(&mut self, id: &str) -> Result<Option<serde_json::Value>> {
        traverse_to_state_node(self.graph, self.registry, id).await
    }

    /// # Errors
    ///
    /// See [`traverse_to_state_node`].
    pub async fn to_state_node_with_context(
        &mut self,
        id: &str,
        ctx: &RequestContext,
    ) -> Result<Option<serde_json::Value>> {
        traverse_with_context(self.graph, self.registry, id, ctx).await
    }
}
