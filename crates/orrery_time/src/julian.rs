//! Julian Day and Julian-century conversions.
//!
//! Dates are proleptic Gregorian. The Julian Day returned for a calendar
//! date is the integer day number of that date's noon, so J2000.0
//! (2000-01-01 12:00) is exactly `2451545`.

use std::ops::RangeInclusive;

use crate::calendar::{MAX_YEAR, MIN_YEAR};

/// Julian Day of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Unix time of J2000.0 in milliseconds (UTC treated as TT).
pub const J2000_UNIX_MS: f64 = 946_727_935_816.0;

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day number for noon of a Gregorian calendar date.
///
/// January and February count as months 13 and 14 of the previous year.
/// The caller is responsible for passing a real date; see
/// [`CalendarDate::new`](crate::CalendarDate::new) for validation.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    day_number(year, month, day) as f64
}

pub(crate) fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let a = (14 - month).div_euclid(12);
    let y = i64::from(year) + 4800 - a;
    let m = month + 12 * a - 3;
    i64::from(day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Day numbers of -2999-01-01 and 3000-12-31.
pub(crate) fn supported_day_numbers() -> RangeInclusive<i64> {
    day_number(MIN_YEAR, 1, 1)..=day_number(MAX_YEAR, 12, 31)
}

/// Julian Days whose calendar date lies in the supported years.
///
/// Runs from midnight opening -2999-01-01 to just before midnight closing
/// 3000-12-31.
pub fn supported_jd_range() -> RangeInclusive<f64> {
    let days = supported_day_numbers();
    (*days.start() as f64 - 0.5)..=(*days.end() as f64 + 0.499_999)
}

/// Gregorian calendar date `(year, month, day)` containing the given JD.
///
/// The JD is rounded to the nearest whole day number first, so any instant
/// between the two surrounding midnights maps to the same date. Returns
/// `None` for non-finite JDs and dates outside the supported years.
pub fn jd_to_calendar(jd: f64) -> Option<(i32, u32, u32)> {
    let jdn = jd.round();
    let days = supported_day_numbers();
    if !(*days.start() as f64..=*days.end() as f64).contains(&jdn) {
        return None;
    }
    Some(calendar_from_day_number(jdn as i64))
}

/// Inverse of [`day_number`]. Callers keep `jdn` inside
/// [`supported_day_numbers`].
pub(crate) fn calendar_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let mut l = jdn + 68_569;
    let n = (4 * l).div_euclid(146_097);
    l -= (146_097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1_461_001);
    l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year as i32, month as u32, day as u32)
}

/// Julian centuries since J2000.0 covered by the supported years.
pub fn supported_centuries() -> RangeInclusive<f64> {
    let jd = supported_jd_range();
    julian_centuries(*jd.start())..=julian_centuries(*jd.end())
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian centuries since J2000.0 for a Unix timestamp in milliseconds.
pub fn unix_ms_to_centuries(unix_ms: f64) -> f64 {
    (unix_ms - J2000_UNIX_MS) / MS_PER_DAY / DAYS_PER_CENTURY
}
