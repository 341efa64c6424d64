//! Calendar and time-scale conversions for the orrery engine.
//!
//! This crate provides:
//! - Gregorian date → Julian Day → Julian centuries since J2000.0
//! - A validated [`CalendarDate`] with leap-year-aware stepping
//! - Unix milliseconds → Julian centuries
//!
//! UTC and TT are treated as the same scale throughout.

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::{CalendarDate, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, J2000_UNIX_MS, MS_PER_DAY, jd_to_calendar, julian_centuries,
    julian_day, supported_centuries, supported_jd_range, unix_ms_to_centuries,
};
