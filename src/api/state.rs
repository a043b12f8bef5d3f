//! Shared application state

use std::sync::Arc;

use crate::tracker::ExerciseTracker;

/// State handed to every request handler
pub struct AppState {
    /// The user and exercise stores
    pub tracker: Arc<ExerciseTracker>,
}

impl AppState {
    pub fn new(tracker: Arc<ExerciseTracker>) -> Self {
        Self { tracker }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ExerciseTracker::new()))
    }
}
