use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};
use crate::models::non_blank;
use crate::models::time_of_day::TimeOfDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

impl ShiftTemplate {
    /// Parses the stored `HH:MM` pair.
    pub fn times(&self) -> ShiftResult<(TimeOfDay, TimeOfDay)> {
        Ok((
            TimeOfDay::parse(&self.start_time)?,
            TimeOfDay::parse(&self.end_time)?,
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftTemplateRequest {
    pub user_id: i64,
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl CreateShiftTemplateRequest {
    pub fn validate(&self) -> ShiftResult<&str> {
        validate_template(&self.name, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftTemplateRequest {
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl UpdateShiftTemplateRequest {
    pub fn validate(&self) -> ShiftResult<&str> {
        validate_template(&self.name, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShiftTemplatesQuery {
    pub user_id: Option<i64>,
}

// An end before the start is an overnight template; only a zero-length one is rejected.
fn validate_template(name: &str, start: TimeOfDay, end: TimeOfDay) -> ShiftResult<&str> {
    let name = non_blank(name).ok_or_else(|| ShiftError::validation("Missing required fields"))?;
    if start == end {
        return Err(ShiftError::validation(
            "Template start and end time must differ",
        ));
    }
    Ok(name)
}
