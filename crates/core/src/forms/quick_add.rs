//! Quick add: one template applied to many `DD.MM` dates.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;

use crate::errors::{ShiftError, ShiftResult};
use crate::forms::to_utc;
use crate::models::shift::{NewShift, check_storable, check_year};
use crate::models::time_of_day::TimeOfDay;

static DAY_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\.(\d{1,2})$").expect("static pattern is valid"));

pub const NO_VALID_DATES: &str = "Please enter at least one valid date (DD.MM)";

/// Parses a single `D.M` / `DD.MM` token into a date in `year`.
///
/// Returns `None` for tokens that do not match the pattern or that name a
/// day the calendar does not have (`31.4`, `29.2` outside leap years).
pub fn parse_day_month(token: &str, year: i32) -> Option<NaiveDate> {
    let captures = DAY_MONTH.captures(token)?;
    let day = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses whitespace separated day.month tokens, dropping the invalid ones.
///
/// Fails only when no token survives.
pub fn parse_dates(input: &str, year: i32) -> ShiftResult<Vec<NaiveDate>> {
    let dates: Vec<NaiveDate> = input
        .split_whitespace()
        .filter_map(|token| parse_day_month(token, year))
        .collect();

    if dates.is_empty() {
        return Err(ShiftError::validation(NO_VALID_DATES));
    }
    Ok(dates)
}

/// Copies a template's times onto each date.
///
/// When `end` is not after `start` the shift runs overnight and ends on
/// the following day. Fails if that day is past the last representable date.
pub fn expand_template(
    start: TimeOfDay,
    end: TimeOfDay,
    dates: &[NaiveDate],
) -> ShiftResult<Vec<(NaiveDateTime, NaiveDateTime)>> {
    dates
        .iter()
        .map(|&date| {
            let end_date = if end > start {
                date
            } else {
                date.checked_add_days(Days::new(1)).ok_or_else(|| {
                    ShiftError::validation(format!("An overnight shift on {date} has no next day"))
                })?
            };
            Ok((start.on(date), end.on(end_date)))
        })
        .collect()
}

/// Runs the whole quick-add form: parse the dates, apply the template and
/// convert to UTC in `tz`.
///
/// Every resulting instant must land in a storable year, so a shift ending
/// on 1 January 10000 is rejected.
pub fn build_shifts<Tz: TimeZone>(
    title: &str,
    start: TimeOfDay,
    end: TimeOfDay,
    dates: &str,
    year: i32,
    tz: &Tz,
) -> ShiftResult<Vec<NewShift>> {
    let dates = parse_dates(dates, check_year(year)?)?;

    expand_template(start, end, &dates)?
        .into_iter()
        .map(|(start_time, end_time)| {
            Ok(NewShift {
                title: title.to_string(),
                start_time: check_storable(to_utc(start_time, tz)?)?,
                end_time: check_storable(to_utc(end_time, tz)?)?,
            })
        })
        .collect()
}
