//! Data types for the exercise tracker
//!
//! Stored records, raw request inputs, and query results.

mod exercise;
mod log;
mod user;

pub use exercise::{Exercise, NewExercise};
pub use log::{ExerciseLog, LogFilter, LogItem};
pub use user::{NewUser, User};
