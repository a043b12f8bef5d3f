//! User store operations

use crate::error::{TrackerError, TrackerResult};
use crate::types::User;
use crate::utils::id::generate_object_id;

use super::ExerciseTracker;

/// Create a user with a freshly generated id
pub fn create_user(tracker: &ExerciseTracker, username: Option<&str>) -> TrackerResult<User> {
    let username = match username {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(TrackerError::validation("Username is required")),
    };

    let user = User::new(generate_object_id(), username.to_string());
    tracker.users.write().push(user.clone());

    tracing::info!(id = %user.id, username = %user.username, "User created");
    Ok(user)
}

/// First user with the given id
pub fn find_user(tracker: &ExerciseTracker, id: &str) -> Option<User> {
    tracker.users.read().iter().find(|u| u.id == id).cloned()
}

/// All users in creation order
pub fn list_users(tracker: &ExerciseTracker) -> Vec<User> {
    tracker.users.read().clone()
}
