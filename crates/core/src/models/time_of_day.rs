use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::{ShiftError, ShiftResult};

/// A wall-clock time with minute precision, written as `HH:MM`.
///
/// Templates store their start and end this way, without a date. Parsing
/// accepts a one or two digit hour so `7:30` and `07:30` are the same value;
/// formatting always pads to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> ShiftResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(TimeOfDay)
            .ok_or_else(|| ShiftError::validation(format!("Invalid time {hour}:{minute:02}")))
    }

    pub fn parse(input: &str) -> ShiftResult<Self> {
        let invalid = || ShiftError::validation(format!("Invalid time '{input}', expected HH:MM"));

        let (hours, minutes) = input.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
            return Err(invalid());
        }

        let hour = hours.parse().map_err(|_| invalid())?;
        let minute = minutes.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    /// Places this time on the given calendar day.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ShiftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
