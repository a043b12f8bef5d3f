//! Exercise log endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use super::invalid_request;
use crate::api::state::AppState;
use crate::error::{TrackerError, TrackerResult};
use crate::types::{ExerciseLog, LogFilter};

/// GET /api/users/:id/logs - Query a user's exercise log
///
/// Optional `from` and `to` bound the dates (inclusive); `limit` keeps the
/// first N matches.
pub async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    filter: Result<Query<LogFilter>, QueryRejection>,
) -> TrackerResult<Json<ExerciseLog>> {
    let Query(filter) = match filter {
        Ok(filter) => filter,
        // Unknown users are reported ahead of malformed filters
        Err(_) if state.tracker.find_user(&id).is_none() => {
            return Err(TrackerError::user_not_found())
        }
        Err(rejection) => return Err(invalid_request(rejection)),
    };
    let log = state.tracker.query_log(&id, &filter)?;
    Ok(Json(log))
}
