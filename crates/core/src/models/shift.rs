use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};
use crate::models::non_blank;

/// Years whose timestamps are stored as four-digit RFC 3339 text. Outside
/// this range the stored text no longer sorts chronologically.
pub const STORABLE_YEARS: RangeInclusive<i32> = 1..=9999;

/// Rejects a year outside [`STORABLE_YEARS`].
pub fn check_year(year: i32) -> ShiftResult<i32> {
    if STORABLE_YEARS.contains(&year) {
        Ok(year)
    } else {
        Err(ShiftError::validation(format!(
            "Year {year} is out of range ({}-{})",
            STORABLE_YEARS.start(),
            STORABLE_YEARS.end()
        )))
    }
}

/// Rejects an instant whose UTC year falls outside [`STORABLE_YEARS`].
pub fn check_storable(time: DateTime<Utc>) -> ShiftResult<DateTime<Utc>> {
    check_year(time.year()).map(|_| time)
}

/// A shift row with the owning user's display name and color embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWithUser {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub user_name: String,
    pub user_color: String,
}

/// A shift that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRequest {
    pub user_id: i64,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl CreateShiftRequest {
    pub fn validate(&self) -> ShiftResult<NewShift> {
        validate_shift(&self.title, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftRequest {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl UpdateShiftRequest {
    pub fn validate(&self) -> ShiftResult<NewShift> {
        validate_shift(&self.title, self.start_time, self.end_time)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShiftsQuery {
    pub user_id: Option<i64>,
}

/// Applies a template to a list of `DD.MM` dates in one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAddRequest {
    pub user_id: i64,
    pub template_id: i64,
    /// Whitespace separated `D.M` / `DD.MM` tokens.
    pub dates: String,
    /// Year the tokens belong to; the current year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Title for every created shift; the template name when absent.
    #[serde(default)]
    pub title: Option<String>,
}

impl QuickAddRequest {
    /// Checks the optional fields and returns the year to use, `current_year`
    /// when none was sent.
    pub fn validate(&self, current_year: i32) -> ShiftResult<i32> {
        check_year(self.year.unwrap_or(current_year))
    }

    /// The requested title, or `fallback` when it is missing or blank.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().and_then(non_blank).unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAddResponse {
    pub ids: Vec<i64>,
    pub message: String,
}

fn validate_shift(
    title: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> ShiftResult<NewShift> {
    let title = non_blank(title).ok_or_else(|| ShiftError::validation("Missing required fields"))?;
    if start_time >= end_time {
        return Err(ShiftError::validation("Start time must be before end time"));
    }
    check_storable(start_time)?;
    check_storable(end_time)?;

    Ok(NewShift {
        title: title.to_string(),
        start_time,
        end_time,
    })
}
