use provtrail_core_types::schema::EVENT_STEP;

use super::selector::ReplayStep;
use crate::errors::{Result, TraversalError};
use crate::registry::FunctionRegistry;

/// Execute `steps` strictly in order
///
/// Each handler is resolved immediately before it runs and awaited to
/// completion before the next one is resolved. There is no timeout: a
/// handler that never completes stalls the replay, and bounding it is up
/// to whoever drives the returned future.
///
/// Returns the value of the last handler, or `None` when `steps` is empty.
/// On failure the handlers that already ran are not reverted.
///
/// # Errors
///
/// * `HandlerNotRegistered` - A step names an unknown handler
/// * `HandlerFailed` - A handler resolved to an error
pub async fn replay<R: FunctionRegistry + ?Sized>(
    registry: &R,
    steps: &[ReplayStep],
) -> Result<Option<serde_json::Value>> {
    let mut result = None;

    for (index, step) in steps.iter().enumerate() {
        let handler = registry.function_by_name(&step.handler)?;

        tracing::debug!(
            component = module_path!(),
            op = "replay",
            event = EVENT_STEP,
            step = index,
            direction = step.direction.as_str(),
            handler = %step.handler,
            edge_id = step.edge.0,
        );

        let value = handler
            .call(step.arguments.clone())
            .await
            .map_err(|e| TraversalError::HandlerFailed {
                name: step.handler.clone(),
                step: index,
                message: e.to_string(),
            })?;
        result = Some(value);
    }

    Ok(result)
}
