//! Validated Gregorian calendar dates and date stepping.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{
    calendar_from_day_number, day_number, julian_centuries, julian_day, supported_day_numbers,
};

/// Earliest year the element table is valid for.
pub const MIN_YEAR: i32 = -2999;

/// Latest year the element table is valid for.
pub const MAX_YEAR: i32 = 3000;

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    if year % 100 == 0 {
        year % 400 == 0
    } else {
        year % 4 == 0
    }
}

/// Number of days in `month` of `year`, or `None` for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// A Gregorian date inside the supported range [-2999, 3000].
///
/// Fields are private so every value has passed [`CalendarDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Serialize, Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawDate> for CalendarDate {
    type Error = TimeError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<CalendarDate> for RawDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

impl CalendarDate {
    /// Validate and build a date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let invalid = TimeError::InvalidDate { year, month, day };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(invalid);
        }
        let Some(len) = days_in_month(year, month) else {
            return Err(invalid);
        };
        if day == 0 || day > len {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    /// J2000.0 calendar day, 2000-01-01.
    pub const fn j2000() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Day of this date's noon.
    pub fn julian_day(self) -> f64 {
        julian_day(self.year, self.month, self.day)
    }

    /// Julian centuries since J2000.0 at this date's noon.
    pub fn to_centuries(self) -> f64 {
        julian_centuries(self.julian_day())
    }

    /// Date `days` days later (or earlier, if negative).
    ///
    /// Rolls over month and year boundaries. Fails if the result leaves the
    /// supported year range.
    pub fn add_days(self, days: i64) -> Result<Self, TimeError> {
        let out_of_range = TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        };
        let Some(jdn) = day_number(self.year, self.month, self.day).checked_add(days) else {
            return Err(out_of_range);
        };
        if !supported_day_numbers().contains(&jdn) {
            return Err(out_of_range);
        }
        let (year, month, day) = calendar_from_day_number(jdn);
        Self::new(year, month, day)
    }

    /// Date `months` months later (or earlier, if negative).
    ///
    /// The day is clamped to the length of the target month, so
    /// 2024-01-31 plus one month is 2024-02-29.
    pub fn add_months(self, months: i32) -> Result<Self, TimeError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year = index.div_euclid(12);
        let month = (index.rem_euclid(12) + 1) as u32;
        let year = i32::try_from(year).map_err(|_| TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })?;
        let day = match days_in_month(year, month) {
            Some(len) => self.day.min(len),
            None => self.day,
        };
        Self::new(year, month, day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, with an optional leading `-` for years before 1 BC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = rest.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let year: i32 = y
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad year {y:?}")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad month {m:?}")))?;
        let day: u32 = d
            .parse()
            .map_err(|_| TimeError::Parse(format!("bad day {d:?}")))?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}
