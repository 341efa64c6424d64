//! Error types for calendar and time-scale conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation and date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year, month or day outside the supported calendar.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// A date string could not be parsed as `YYYY-MM-DD`.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year}-{month:02}-{day:02}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
