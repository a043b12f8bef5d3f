//! Exercise endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    Form, Json,
};

use super::form_or_default;
use crate::api::state::AppState;
use crate::error::TrackerResult;
use crate::types::{Exercise, NewExercise};

/// POST /api/users/:id/exercises - Log an exercise for a user
///
/// Body fields: `description`, `duration` (minutes), and an optional
/// `date`. A missing or unparsable date means today.
pub async fn log_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    form: Result<Form<NewExercise>, FormRejection>,
) -> TrackerResult<(StatusCode, Json<Exercise>)> {
    let input = form_or_default(form);
    let exercise = state.tracker.log_exercise(&id, input)?;
    Ok((StatusCode::CREATED, Json(exercise)))
}
