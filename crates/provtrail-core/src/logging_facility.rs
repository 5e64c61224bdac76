//! Structured logging facility
//!
//! - One initialization point, [`init`], selecting a [`Profile`]
//! - Operation boundary macros (`log_op_start!`, `log_op_end!`,
//!   `log_op_error!`) emitting the canonical fields from
//!   `provtrail_core_types::schema`
//! - An in-memory capture layer for asserting on log output in tests
//!
//! ```rust
//! use provtrail_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
