use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};
use crate::forms::to_utc;
use crate::models::shift::UpdateShiftRequest;
use crate::models::time_of_day::TimeOfDay;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const BAD_DATE_FORMAT: &str = "Please enter date in DD.MM.YYYY format";
pub const INVALID_DATE_OR_TIME: &str = "Invalid date or time format";
pub const START_NOT_BEFORE_END: &str = "Start time must be before end time";

/// Raw field values of the edit-shift form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditShiftForm {
    pub title: String,
    /// `DD.MM.YYYY`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

/// A validated edit, still in wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedShiftEdit {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EditShiftForm {
    pub fn parse(&self) -> ShiftResult<ParsedShiftEdit> {
        let title = self.title.trim();
        let fields = [title, self.date.trim(), self.start_time.trim(), self.end_time.trim()];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ShiftError::validation(MISSING_FIELDS));
        }

        let date = parse_full_date(self.date.trim())?;
        let start = TimeOfDay::parse(&self.start_time)
            .map_err(|_| ShiftError::validation(INVALID_DATE_OR_TIME))?;
        let end = TimeOfDay::parse(&self.end_time)
            .map_err(|_| ShiftError::validation(INVALID_DATE_OR_TIME))?;

        if start >= end {
            return Err(ShiftError::validation(START_NOT_BEFORE_END));
        }

        Ok(ParsedShiftEdit {
            title: title.to_string(),
            start: start.on(date),
            end: end.on(date),
        })
    }

    /// Parses the form and produces the request body for `PUT /api/shifts/{id}`.
    pub fn to_request<Tz: TimeZone>(&self, tz: &Tz) -> ShiftResult<UpdateShiftRequest> {
        let parsed = self.parse()?;
        Ok(UpdateShiftRequest {
            title: parsed.title,
            start_time: to_utc(parsed.start, tz)?,
            end_time: to_utc(parsed.end, tz)?,
        })
    }
}

/// Parses `DD.MM.YYYY`, exactly two, two and four digits.
pub fn parse_full_date(input: &str) -> ShiftResult<NaiveDate> {
    let parts: Vec<&str> = input.split('.').collect();
    let &[day, month, year] = parts.as_slice() else {
        return Err(ShiftError::validation(BAD_DATE_FORMAT));
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if day.len() != 2 || month.len() != 2 || year.len() != 4 {
        return Err(ShiftError::validation(BAD_DATE_FORMAT));
    }
    if !all_digits(day) || !all_digits(month) || !all_digits(year) {
        return Err(ShiftError::validation(INVALID_DATE_OR_TIME));
    }

    let invalid = || ShiftError::validation(INVALID_DATE_OR_TIME);
    let day = day.parse().map_err(|_| invalid())?;
    let month = month.parse().map_err(|_| invalid())?;
    let year = year.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Formats a date the way the edit form shows it.
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
