//! Day-by-day calendar walks across leap and century boundaries.

use orrery_time::{CalendarDate, TimeError, days_in_month, julian_centuries, julian_day};

fn walk_year(year: i32) -> u32 {
    let mut date = CalendarDate::new(year, 1, 1).unwrap();
    let mut days = 0;
    while date.year() == year {
        let next = date.add_days(1).unwrap();
        assert_eq!(next.julian_day() - date.julian_day(), 1.0, "after {date}");
        date = next;
        days += 1;
    }
    days
}

#[test]
fn year_lengths() {
    assert_eq!(walk_year(1900), 365);
    assert_eq!(walk_year(2000), 366);
    assert_eq!(walk_year(2023), 365);
    assert_eq!(walk_year(2024), 366);
    assert_eq!(walk_year(-1), 365);
    assert_eq!(walk_year(-4), 366);
}

#[test]
fn month_ends_roll_forward() {
    for month in 1..=12 {
        let last = days_in_month(2025, month).unwrap();
        let date = CalendarDate::new(2025, month, last).unwrap();
        let next = date.add_days(1).unwrap();
        assert_eq!(next.day(), 1);
        assert_eq!(next.month(), month % 12 + 1);
    }
}

#[test]
fn stepping_keeps_supported_range() {
    let last = CalendarDate::new(3000, 12, 31).unwrap();
    assert!(matches!(
        last.add_months(1),
        Err(TimeError::InvalidDate { year: 3001, .. })
    ));
    let first = CalendarDate::new(-2999, 1, 1).unwrap();
    assert!(first.add_months(-1).is_err());
}

#[test]
fn range_span_in_centuries() {
    let start = julian_centuries(julian_day(-2999, 1, 1));
    let end = julian_centuries(julian_day(3000, 12, 31));
    assert!((start + 50.0).abs() < 0.02, "start = {start}");
    assert!((end - 10.0).abs() < 0.02, "end = {end}");
}
