//! Member-project performance calculation.
//!
//! This module reduces one staffing allocation and the member's logged time
//! for that project into a performance record: planned vs. actual
//! investment, days saved, and an efficiency percentage.

use rust_decimal::Decimal;

use crate::config::{MinutesMode, WorkHoursConfig};
use crate::models::{Allocation, MemberPerformance, ScheduleEntry};

use super::cost_basis::CostBasis;
use super::effective_minutes::effective_minutes;
use super::rounding::{round_days, round_money, round_rate};

/// Minutes in one nominal work day (the fixed 8-hour-day convention).
pub const MINUTES_PER_WORK_DAY: i64 = 480;

/// Sums the actual worked minutes over a member's entries for a project.
///
/// In [`MinutesMode::Effective`] each entry is normalized against the
/// work-hours and lunch windows for its date; in [`MinutesMode::Raw`] the
/// logged minutes are taken at face value.
pub fn actual_minutes(
    entries: &[&ScheduleEntry],
    work_hours: &WorkHoursConfig,
    mode: MinutesMode,
) -> i64 {
    entries
        .iter()
        .map(|entry| match mode {
            MinutesMode::Effective => effective_minutes(entry, &work_hours.windows_for(entry.date)),
            MinutesMode::Raw => entry.minutes,
        })
        .sum()
}

/// Computes a member's performance record for one allocation.
///
/// Day counts are rounded to one decimal first; saved days, efficiency, and
/// the investment amounts are derived from the rounded day values so the
/// reported row stays internally consistent. Efficiency is 0 when nothing
/// was planned.
pub fn calculate_member_performance(
    allocation: &Allocation,
    basis: &CostBasis,
    entries: &[&ScheduleEntry],
    work_hours: &WorkHoursConfig,
    mode: MinutesMode,
) -> MemberPerformance {
    let minutes = actual_minutes(entries, work_hours, mode);

    let planned_days = round_days(allocation.planned_days);
    let actual_days = round_days(Decimal::from(minutes) / Decimal::from(MINUTES_PER_WORK_DAY));
    let saved_days = planned_days - actual_days;

    let efficiency_rate = if planned_days.is_zero() {
        Decimal::ZERO
    } else {
        round_rate(saved_days / planned_days * Decimal::ONE_HUNDRED)
    };

    let planned_investment = round_money(basis.daily_total_cost * planned_days);
    let actual_investment = round_money(basis.daily_total_cost * actual_days);

    MemberPerformance {
        member_id: allocation.member_id.clone(),
        daily_total_cost: round_money(basis.daily_total_cost),
        planned_days,
        actual_days,
        saved_days,
        efficiency_rate,
        planned_investment,
        actual_investment,
        saved_cost: planned_investment - actual_investment,
    }
}
