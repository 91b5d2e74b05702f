//! Working-day calendar service.
//!
//! This module counts the working days in a calendar month: calendar days
//! minus weekends minus organization holidays. Months with no working days
//! at all are reported as 0 and yield zero daily costs downstream.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::HolidayCalendar;
use crate::models::YearMonth;

/// Returns the number of calendar days in the given month.
pub fn days_in_month(month: YearMonth) -> u32 {
    let first = month.first_day();
    let next_first = if month.month == 12 {
        NaiveDate::from_ymd_opt(month.year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(month.year, month.month + 1, 1)
    }
    .expect("first of month is always valid");
    (next_first - first).num_days() as u32
}

/// Counts the working days in a month.
///
/// A day counts as working when it is neither a Saturday, a Sunday, nor a
/// holiday in the given calendar. Holidays falling on a weekend are not
/// subtracted twice.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::working_days;
/// use settlement_engine::config::HolidayCalendar;
/// use settlement_engine::models::YearMonth;
///
/// // February 2026 has 28 days and 8 weekend days.
/// let month = YearMonth::new(2026, 2).unwrap();
/// assert_eq!(working_days(month, &HolidayCalendar::default()), 20);
/// ```
pub fn working_days(month: YearMonth, calendar: &HolidayCalendar) -> u32 {
    let mut count = 0;
    for day in 1..=days_in_month(month) {
        let date = NaiveDate::from_ymd_opt(month.year, month.month, day)
            .expect("day is within the month");
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        if calendar.is_holiday(date) {
            continue;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month_num: u32) -> YearMonth {
        YearMonth::new(year, month_num).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(month(2026, 1)), 31);
        assert_eq!(days_in_month(month(2026, 2)), 28);
        assert_eq!(days_in_month(month(2024, 2)), 29); // leap year
        assert_eq!(days_in_month(month(2026, 4)), 30);
        assert_eq!(days_in_month(month(2026, 12)), 31);
    }

    #[test]
    fn test_february_2026_has_20_working_days() {
        assert_eq!(working_days(month(2026, 2), &HolidayCalendar::default()), 20);
    }

    #[test]
    fn test_january_2026_has_22_working_days() {
        // 31 days, 9 weekend days (Jan 1 2026 is a Thursday).
        assert_eq!(working_days(month(2026, 1), &HolidayCalendar::default()), 22);
    }

    #[test]
    fn test_weekday_holiday_is_subtracted() {
        let mut calendar = HolidayCalendar::default();
        calendar.holidays.insert(make_date("2026-01-01")); // Thursday
        assert_eq!(working_days(month(2026, 1), &calendar), 21);
    }

    #[test]
    fn test_weekend_holiday_is_not_subtracted_twice() {
        let mut calendar = HolidayCalendar::default();
        calendar.holidays.insert(make_date("2026-01-03")); // Saturday
        assert_eq!(working_days(month(2026, 1), &calendar), 22);
    }

    #[test]
    fn test_holiday_outside_month_is_ignored() {
        let mut calendar = HolidayCalendar::default();
        calendar.holidays.insert(make_date("2026-03-02"));
        assert_eq!(working_days(month(2026, 2), &calendar), 20);
    }

    #[test]
    fn test_month_with_zero_working_days() {
        // Declare every day of February 2026 a holiday.
        let mut calendar = HolidayCalendar::default();
        for day in 1..=28 {
            calendar
                .holidays
                .insert(NaiveDate::from_ymd_opt(2026, 2, day).unwrap());
        }
        assert_eq!(working_days(month(2026, 2), &calendar), 0);
    }
}
