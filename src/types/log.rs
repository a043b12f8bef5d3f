//! Exercise log query types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::exercise::{serialize_minutes, Exercise};
use crate::utils::time::serialize_date;

/// Raw query parameters for `GET /api/users/:id/logs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogFilter {
    /// Earliest date to include
    pub from: Option<String>,
    /// Latest date to include
    pub to: Option<String>,
    /// Maximum number of entries to return
    pub limit: Option<String>,
}

/// Builders for callers that query the tracker directly
impl LogFilter {
    pub fn with_from(mut self, from: &str) -> Self {
        self.from = Some(from.to_string());
        self
    }

    pub fn with_to(mut self, to: &str) -> Self {
        self.to = Some(to.to_string());
        self
    }

    pub fn with_limit(mut self, limit: &str) -> Self {
        self.limit = Some(limit.to_string());
        self
    }
}

/// A single entry as listed in a log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogItem {
    pub description: String,
    #[serde(serialize_with = "serialize_minutes")]
    pub duration: f64,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

impl From<&Exercise> for LogItem {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Result of a log query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseLog {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub count: usize,
    pub logs: Vec<LogItem>,
}
