//! Cost basis calculation.
//!
//! This module computes a member's daily cost for a pricing month: their
//! salary cost per working day plus their pro-rata share of the
//! organization's overhead (operating spend not already covered by payroll).

use rust_decimal::Decimal;

use crate::config::{HolidayCalendar, SettlementPolicy};
use crate::models::{Member, OpexRecord, YearMonth};

use super::working_calendar::working_days;

/// A member's daily cost components for one pricing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBasis {
    /// Salary cost per working day.
    pub daily_salary_cost: Decimal,
    /// Allocated overhead cost per working day.
    pub daily_overhead_cost: Decimal,
    /// Sum of the salary and overhead components.
    pub daily_total_cost: Decimal,
}

impl CostBasis {
    /// The zero basis, used for months without working days.
    pub fn zero() -> Self {
        Self {
            daily_salary_cost: Decimal::ZERO,
            daily_overhead_cost: Decimal::ZERO,
            daily_total_cost: Decimal::ZERO,
        }
    }
}

/// Resolves the monthly opex amount for a pricing month.
///
/// Lookup order: the record matching the month exactly, else the first
/// record in the input list, else the policy's fallback amount.
pub fn monthly_opex(records: &[OpexRecord], month: YearMonth, policy: &SettlementPolicy) -> Decimal {
    records
        .iter()
        .find(|r| r.year_month == month)
        .or_else(|| records.first())
        .map(|r| r.amount)
        .unwrap_or(policy.fallback_monthly_opex)
}

/// Computes a member's cost basis for a pricing month.
///
/// The salary ratio divides the member's annual salary by the sum over all
/// costed (active and approved) members; the overhead pool is the month's
/// opex minus total monthly payroll, floored at zero. Every division is
/// guarded: a roster with zero total salary yields a zero ratio, and a
/// month with zero working days yields a zero basis.
///
/// Results are exact (unrounded); rounding happens when performance
/// records are built.
pub fn calculate_cost_basis(
    roster: &[Member],
    member: &Member,
    month: YearMonth,
    opex: &[OpexRecord],
    calendar: &HolidayCalendar,
    policy: &SettlementPolicy,
) -> CostBasis {
    let months_per_year = Decimal::from(12);

    let total_annual_salary: Decimal = roster
        .iter()
        .filter(|m| m.is_costed())
        .map(|m| m.annual_salary)
        .sum();
    let total_monthly_salary = total_annual_salary / months_per_year;

    let salary_ratio = if total_annual_salary.is_zero() {
        Decimal::ZERO
    } else {
        member.annual_salary / total_annual_salary
    };

    let opex_amount = monthly_opex(opex, month, policy);
    let overhead_pool = (opex_amount - total_monthly_salary).max(Decimal::ZERO);

    let working = working_days(month, calendar);
    if working == 0 {
        return CostBasis::zero();
    }
    let working = Decimal::from(working);

    let daily_salary_cost = member.annual_salary / months_per_year / working;
    let daily_overhead_cost = overhead_pool * salary_ratio / working;

    CostBasis {
        daily_salary_cost,
        daily_overhead_cost,
        daily_total_cost: daily_salary_cost + daily_overhead_cost,
    }
}
