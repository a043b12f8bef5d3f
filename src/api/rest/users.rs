//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    Form, Json,
};

use super::form_or_default;
use crate::api::state::AppState;
use crate::error::TrackerResult;
use crate::types::{NewUser, User};

/// POST /api/users - Create a user from a form-encoded `username`
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    form: Result<Form<NewUser>, FormRejection>,
) -> TrackerResult<(StatusCode, Json<User>)> {
    let input = form_or_default(form);
    let user = state.tracker.create_user(input.username.as_deref())?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users - All users in creation order
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.tracker.list_users())
}
