//! Parsing for the calendar's input forms.
//!
//! Forms deal in naive local date-times. [`to_utc`] pins them to a zone
//! before anything is stored.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::errors::{ShiftError, ShiftResult};

pub mod edit_shift;
pub mod quick_add;

/// Interprets a wall-clock date-time in `tz` and converts it to UTC.
///
/// Ambiguous times (clocks going back) resolve to the earlier instant.
/// Times skipped by a clock change are rejected.
pub fn to_utc<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> ShiftResult<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            ShiftError::validation(format!("{naive} does not exist in the local time zone"))
        })
}
