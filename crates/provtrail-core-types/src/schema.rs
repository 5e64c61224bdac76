//! Canonical schema constants for structured logging
//!
//! Every traversal log line uses these keys, so log pipelines and the test
//! capture layer can match on them without string drift.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Graph entities
pub const FIELD_NODE_ID: &str = "node_id";
pub const FIELD_TARGET_ID: &str = "target_id";
pub const FIELD_EDGE_ID: &str = "edge_id";
pub const FIELD_HANDLER: &str = "handler";
pub const FIELD_DIRECTION: &str = "direction";

// Sizes
pub const FIELD_TRACK_LEN: &str = "track_len";
pub const FIELD_STEPS: &str = "steps";

// Errors
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_STEP: &str = "step";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        let events = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_STEP];
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
