//! Month grid for the calendar view.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};
use crate::models::shift::ShiftWithUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Monday-first weeks covering the whole month.
    pub weeks: Vec<Vec<CalendarDay>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading and trailing days borrowed from adjacent months.
    pub in_month: bool,
    pub shifts: Vec<ShiftWithUser>,
}

/// Lays `shifts` out on the month grid, by the local day (in `tz`) each one starts on.
///
/// Shifts keep their input order within a day. Shifts outside the grid are ignored.
pub fn month_view<Tz: TimeZone>(
    year: i32,
    month: u32,
    shifts: &[ShiftWithUser],
    tz: &Tz,
) -> ShiftResult<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ShiftError::validation(format!("Invalid month {year}-{month}")))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| ShiftError::validation(format!("Month {year}-{month} is out of range")))?;

    let lead = u64::from(first.weekday().num_days_from_monday());
    let trail = u64::from(6 - last.weekday().num_days_from_monday());
    let out_of_range = || ShiftError::validation(format!("Month {year}-{month} is out of range"));
    let grid_start = first.checked_sub_days(Days::new(lead)).ok_or_else(out_of_range)?;
    let grid_end = last.checked_add_days(Days::new(trail)).ok_or_else(out_of_range)?;

    let mut by_day: BTreeMap<NaiveDate, Vec<ShiftWithUser>> = BTreeMap::new();
    for shift in shifts {
        let day = shift.start_time.with_timezone(tz).date_naive();
        if day >= grid_start && day <= grid_end {
            by_day.entry(day).or_default().push(shift.clone());
        }
    }

    let days: Vec<CalendarDay> = grid_start
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| CalendarDay {
            date,
            in_month: date.month() == month,
            shifts: by_day.remove(&date).unwrap_or_default(),
        })
        .collect();

    Ok(MonthView {
        year,
        month,
        weeks: days.chunks(7).map(<[CalendarDay]>::to_vec).collect(),
    })
}
