//! Time-of-day values as written on the paper forms ("23:30", "6:40").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with minute precision.
///
/// Serialized as `HH:MM`. Parsing also accepts a single-digit hour (`6:30`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(jiff::civil::Time);

impl ClockTime {
    pub fn new(hour: i8, minute: i8) -> Result<Self, CoreError> {
        jiff::civil::Time::new(hour, minute, 0, 0)
            .map(ClockTime)
            .map_err(|_| CoreError::InvalidClockTime(format!("{hour}:{minute:02}")))
    }

    pub fn hour(&self) -> i8 {
        self.0.hour()
    }

    pub fn minute(&self) -> i8 {
        self.0.minute()
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() as u32 * 60 + self.minute() as u32
    }

    /// Minutes elapsed from `self` to the next occurrence of `later`.
    ///
    /// When `later` is earlier on the clock it falls on the following day,
    /// so the result is never negative. Equal times give zero.
    pub fn minutes_until(&self, later: ClockTime) -> u32 {
        let start = self.minutes_since_midnight();
        let mut end = later.minutes_since_midnight();
        if end < start {
            end += MINUTES_PER_DAY;
        }
        end - start
    }

    /// Same as [`minutes_until`](Self::minutes_until), in hours.
    pub fn hours_until(&self, later: ClockTime) -> f64 {
        self.minutes_until(later) as f64 / 60.0
    }
}

impl From<ClockTime> for jiff::civil::Time {
    fn from(t: ClockTime) -> Self {
        t.0
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidClockTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;

        let digits = |part: &str, widths: &[usize]| {
            widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(h, &[1, 2]) || !digits(m, &[2]) {
            return Err(invalid());
        }

        let hour: i8 = h.parse().map_err(|_| invalid())?;
        let minute: i8 = m.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
