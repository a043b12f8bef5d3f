//! Exercise Tracker
//!
//! A small REST API for tracking users and the exercises they log, backed
//! by in-memory stores.
//!
//! # Modules
//!
//! - `types`: Core data structures (User, Exercise, ExerciseLog)
//! - `tracker`: In-memory user and exercise stores
//! - `api`: Axum router and REST handlers
//! - `config`: Command line and environment configuration
//! - `error`: Validation and not-found errors
//! - `utils`: Id generation and date handling
//!
//! # Example
//!
//! ```
//! use exercise_tracker::{ExerciseTracker, LogFilter, NewExercise};
//!
//! let tracker = ExerciseTracker::new();
//! let user = tracker.create_user(Some("alice")).unwrap();
//! tracker
//!     .log_exercise(&user.id, NewExercise::new("run", "30", Some("2023-01-01")))
//!     .unwrap();
//!
//! let filter = LogFilter::default().with_from("2023-01-01").with_limit("10");
//! let log = tracker.query_log(&user.id, &filter).unwrap();
//! assert_eq!(log.count, 1);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod tracker;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::{Config, StaticAssets};
pub use error::{TrackerError, TrackerResult};
pub use tracker::ExerciseTracker;
pub use types::{Exercise, ExerciseLog, LogFilter, LogItem, NewExercise, NewUser, User};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
