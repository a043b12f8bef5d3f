//! Utility functions and helpers
//!
//! Identifier generation and calendar date handling.

pub mod id;
pub mod time;

pub use id::generate_object_id;
pub use time::{current_timestamp, format_date, parse_date, resolve_date, today};
