//! Exercise tracker - in-memory data engine
//!
//! Owns the user store and the exercise store. Each store is an
//! append-only `Vec` behind its own lock; insertion order is the only
//! ordering.

mod exercises;
mod users;

use parking_lot::RwLock;

use crate::error::TrackerResult;
use crate::types::{Exercise, ExerciseLog, LogFilter, NewExercise, User};

/// In-memory stores shared by all request handlers
#[derive(Debug, Default)]
pub struct ExerciseTracker {
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) exercises: RwLock<Vec<Exercise>>,
}

impl ExerciseTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }

    /// Number of logged exercises across all users
    pub fn exercise_count(&self) -> usize {
        self.exercises.read().len()
    }
}

impl ExerciseTracker {
    // User store (from users.rs)
    pub fn create_user(&self, username: Option<&str>) -> TrackerResult<User> {
        users::create_user(self, username)
    }

    pub fn find_user(&self, id: &str) -> Option<User> {
        users::find_user(self, id)
    }

    pub fn list_users(&self) -> Vec<User> {
        users::list_users(self)
    }

    // Exercise store (from exercises.rs)
    pub fn log_exercise(&self, owner_id: &str, input: NewExercise) -> TrackerResult<Exercise> {
        exercises::log_exercise(self, owner_id, input)
    }

    pub fn query_log(&self, owner_id: &str, filter: &LogFilter) -> TrackerResult<ExerciseLog> {
        exercises::query_log(self, owner_id, filter)
    }
}
