//! Time ledger normalization.
//!
//! This module translates a logged schedule entry into effective worked
//! minutes: the overlap of the entry with the day's work-hours window, minus
//! any overlap with the lunch window. This is the only place presence is
//! turned into billable time.

use chrono::NaiveTime;

use crate::config::DayWindows;
use crate::models::ScheduleEntry;

/// Length in minutes of the intersection of [start,end) with [win_start,win_end).
fn overlap_minutes(
    start: NaiveTime,
    end: NaiveTime,
    win_start: NaiveTime,
    win_end: NaiveTime,
) -> i64 {
    let clipped_start = start.max(win_start);
    let clipped_end = end.min(win_end);
    if clipped_end > clipped_start {
        (clipped_end - clipped_start).num_minutes()
    } else {
        0
    }
}

/// Computes the effective worked minutes for a schedule entry.
///
/// The entry's [start,end) interval is intersected with the work window,
/// and the entry's overlap with the lunch window is subtracted. The result
/// is clamped at 0: an entry lying entirely outside work hours contributes
/// nothing. Entries with no recorded start/end time are treated as fully
/// effective and return their raw `minutes` field unmodified.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::effective_minutes;
/// use settlement_engine::config::DayWindows;
/// use settlement_engine::models::ScheduleEntry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let windows = DayWindows {
///     work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     work_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     lunch_start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///     lunch_end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
/// };
/// let entry = ScheduleEntry {
///     id: "sch_001".to_string(),
///     member_id: "mem_001".to_string(),
///     project_id: Some("prj_001".to_string()),
///     date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
///     start_time: Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
///     end_time: Some(NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
///     minutes: 540,
/// };
///
/// // 9 hours in the work window minus the 1 hour lunch.
/// assert_eq!(effective_minutes(&entry, &windows), 480);
/// ```
pub fn effective_minutes(entry: &ScheduleEntry, windows: &DayWindows) -> i64 {
    let (Some(start), Some(end)) = (entry.start_time, entry.end_time) else {
        return entry.minutes;
    };

    let worked = overlap_minutes(start, end, windows.work_start, windows.work_end);
    let lunch = overlap_minutes(start, end, windows.lunch_start, windows.lunch_end);
    (worked - lunch).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn default_windows() -> DayWindows {
        DayWindows {
            work_start: time(9, 0),
            work_end: time(18, 0),
            lunch_start: time(12, 0),
            lunch_end: time(13, 0),
        }
    }

    fn create_entry(start: Option<NaiveTime>, end: Option<NaiveTime>, minutes: i64) -> ScheduleEntry {
        ScheduleEntry {
            id: "sch_001".to_string(),
            member_id: "mem_001".to_string(),
            project_id: Some("prj_001".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            start_time: start,
            end_time: end,
            minutes,
        }
    }

    #[test]
    fn test_full_day_entry() {
        let entry = create_entry(Some(time(9, 0)), Some(time(18, 0)), 540);
        assert_eq!(effective_minutes(&entry, &default_windows()), 480);
    }

    #[test]
    fn test_morning_only_entry_misses_lunch() {
        let entry = create_entry(Some(time(9, 0)), Some(time(11, 30)), 150);
        assert_eq!(effective_minutes(&entry, &default_windows()), 150);
    }

    #[test]
    fn test_entry_partially_covering_lunch() {
        // 11:00-12:30: 90 minutes in window, 30 overlapping lunch.
        let entry = create_entry(Some(time(11, 0)), Some(time(12, 30)), 90);
        assert_eq!(effective_minutes(&entry, &default_windows()), 60);
    }

    #[test]
    fn test_entry_before_work_hours_is_clipped() {
        // 07:00-10:00: only 09:00-10:00 falls inside the work window.
        let entry = create_entry(Some(time(7, 0)), Some(time(10, 0)), 180);
        assert_eq!(effective_minutes(&entry, &default_windows()), 60);
    }

    #[test]
    fn test_entry_after_work_hours_is_clipped() {
        // 17:00-21:00: only 17:00-18:00 counts.
        let entry = create_entry(Some(time(17, 0)), Some(time(21, 0)), 240);
        assert_eq!(effective_minutes(&entry, &default_windows()), 60);
    }

    #[test]
    fn test_entry_entirely_outside_work_hours_clamps_to_zero() {
        let entry = create_entry(Some(time(19, 0)), Some(time(22, 0)), 180);
        assert_eq!(effective_minutes(&entry, &default_windows()), 0);
    }

    #[test]
    fn test_entry_entirely_inside_lunch_clamps_to_zero() {
        let entry = create_entry(Some(time(12, 0)), Some(time(13, 0)), 60);
        assert_eq!(effective_minutes(&entry, &default_windows()), 0);
    }

    #[test]
    fn test_entry_without_times_uses_raw_minutes() {
        let entry = create_entry(None, None, 480);
        assert_eq!(effective_minutes(&entry, &default_windows()), 480);
    }

    #[test]
    fn test_entry_with_only_start_time_uses_raw_minutes() {
        let entry = create_entry(Some(time(9, 0)), None, 200);
        assert_eq!(effective_minutes(&entry, &default_windows()), 200);
    }

    #[test]
    fn test_zero_duration_entry() {
        let entry = create_entry(Some(time(9, 0)), Some(time(9, 0)), 0);
        assert_eq!(effective_minutes(&entry, &default_windows()), 0);
    }
}
