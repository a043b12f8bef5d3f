//! Exercise store operations

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::types::{Exercise, ExerciseLog, LogFilter, LogItem, NewExercise};
use crate::utils::time::{parse_date, resolve_date};

use super::ExerciseTracker;

/// Append an exercise to the owner's log
pub fn log_exercise(
    tracker: &ExerciseTracker,
    owner_id: &str,
    input: NewExercise,
) -> TrackerResult<Exercise> {
    let owner = tracker
        .find_user(owner_id)
        .ok_or_else(TrackerError::user_not_found)?;

    let (description, duration) = match (
        present(input.description.as_deref()),
        present(input.duration.as_deref()),
    ) {
        (Some(description), Some(duration)) => (description, duration),
        _ => {
            return Err(TrackerError::validation(
                "Description and duration must have values",
            ))
        }
    };

    let exercise = Exercise {
        owner_id: owner.id,
        username: owner.username,
        description: description.to_string(),
        duration: parse_duration(duration)?,
        date: resolve_date(input.date.as_deref()),
    };

    tracker.exercises.write().push(exercise.clone());

    tracing::info!(
        owner_id = %exercise.owner_id,
        duration = exercise.duration,
        date = %exercise.date,
        "Exercise logged"
    );
    Ok(exercise)
}

/// Owner's entries narrowed by date range, then truncated to `limit`
pub fn query_log(
    tracker: &ExerciseTracker,
    owner_id: &str,
    filter: &LogFilter,
) -> TrackerResult<ExerciseLog> {
    let owner = tracker
        .find_user(owner_id)
        .ok_or_else(TrackerError::user_not_found)?;

    let from = parse_bound(filter.from.as_deref())?;
    let to = parse_bound(filter.to.as_deref())?;
    let limit = parse_limit(filter.limit.as_deref())?;

    let logs: Vec<LogItem> = tracker
        .exercises
        .read()
        .iter()
        .filter(|e| e.owner_id == owner.id)
        .filter(|e| from.map_or(true, |from| e.date >= from))
        .filter(|e| to.map_or(true, |to| e.date <= to))
        .take(limit.unwrap_or(usize::MAX))
        .map(LogItem::from)
        .collect();

    Ok(ExerciseLog {
        username: owner.username,
        id: owner.id,
        count: logs.len(),
        logs,
    })
}

/// Treat empty and whitespace-only values as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_duration(raw: &str) -> TrackerResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes > 0.0 => Ok(minutes),
        _ => Err(TrackerError::validation(
            "Duration must be a number and positive",
        )),
    }
}

fn parse_bound(raw: Option<&str>) -> TrackerResult<Option<NaiveDate>> {
    match present(raw) {
        None => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| TrackerError::validation("Invalid date format")),
    }
}

fn parse_limit(raw: Option<&str>) -> TrackerResult<Option<usize>> {
    match present(raw) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(Some(limit)),
            _ => Err(TrackerError::validation("Invalid limit")),
        },
    }
}
