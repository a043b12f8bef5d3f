//! Exercise entry types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::time::serialize_date;

/// One logged exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    /// Id of the owning user
    #[serde(rename = "_id")]
    pub owner_id: String,
    /// Owner's username at the time the entry was logged
    pub username: String,
    pub description: String,
    /// Minutes, always strictly positive
    #[serde(serialize_with = "serialize_minutes")]
    pub duration: f64,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

/// Raw input for logging an exercise.
///
/// Fields stay as strings so that missing and malformed values surface as
/// validation errors. An unreadable request body is the `Default` (all
/// fields absent).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExercise {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

impl NewExercise {
    pub fn new(description: &str, duration: &str, date: Option<&str>) -> Self {
        Self {
            description: Some(description.to_string()),
            duration: Some(duration.to_string()),
            date: date.map(str::to_string),
        }
    }
}

/// Whole minutes go out as JSON integers, fractional ones as floats
pub(crate) fn serialize_minutes<S>(minutes: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if minutes.fract() == 0.0 && minutes.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*minutes as i64)
    } else {
        serializer.serialize_f64(*minutes)
    }
}
