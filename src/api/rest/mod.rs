//! REST API module for HTTP endpoints
//!
//! - `POST /api/users` - Create a user
//! - `GET /api/users` - List users
//! - `POST /api/users/:id/exercises` - Log an exercise
//! - `GET /api/users/:id/logs` - Query a user's exercise log

pub mod exercises;
pub mod logs;
pub mod users;

use std::fmt::Display;

use axum::{extract::rejection::FormRejection, Form};

use crate::error::TrackerError;

/// Extractor rejections are reported like any other invalid input
pub(crate) fn invalid_request(rejection: impl Display) -> TrackerError {
    TrackerError::validation(rejection.to_string())
}

/// An unreadable body (wrong content type, empty, malformed) carries no
/// fields, so the usual missing-field checks apply to it.
pub(crate) fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable form body, treating as empty");
            T::default()
        }
    }
}
