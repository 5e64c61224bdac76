//! Shared types for the provtrail facilities
//!
//! Kept dependency-light so both the error facility and the logging
//! facility of `provtrail-core` can depend on it:
//!
//! - **Correlation types**: `RequestId`, `TraceId`, `RequestContext`
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
