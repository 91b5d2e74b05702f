//! Project settlement aggregation.
//!
//! This module reduces a project's allocations to performance records,
//! totals them against the contract amount, and attaches the reward
//! distribution for any surplus.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::{HolidayCalendar, SettlementPolicy, WorkHoursConfig};
use crate::models::{
    Member, OpexRecord, Project, ProjectSettlement, ScheduleEntry, YearMonth,
};

use super::cost_basis::{calculate_cost_basis, CostBasis};
use super::member_performance::calculate_member_performance;
use super::reward_distribution::distribute_rewards;

/// Settles one project against the snapshot it belongs to.
///
/// Allocations referencing members missing from the roster are dropped, not
/// errored. Cost bases are memoized per (member, pricing month) for the
/// duration of the pass. Unclassified schedule entries and entries for other
/// projects never contribute to actual time.
pub fn settle_project(
    project: &Project,
    members: &[Member],
    schedule: &[ScheduleEntry],
    opex: &[OpexRecord],
    work_hours: &WorkHoursConfig,
    calendar: &HolidayCalendar,
    policy: &SettlementPolicy,
) -> ProjectSettlement {
    let member_index: HashMap<&str, &Member> =
        members.iter().map(|m| (m.id.as_str(), m)).collect();
    let mut basis_cache: HashMap<(String, YearMonth), CostBasis> = HashMap::new();

    let mut performances = Vec::with_capacity(project.allocations.len());
    for allocation in &project.allocations {
        // Missing-reference allocations are filtered, not errored.
        let Some(member) = member_index.get(allocation.member_id.as_str()).copied() else {
            continue;
        };

        let month = allocation.pricing_month(project.start_date);
        let basis = *basis_cache
            .entry((member.id.clone(), month))
            .or_insert_with(|| {
                calculate_cost_basis(members, member, month, opex, calendar, policy)
            });

        let entries: Vec<&ScheduleEntry> = schedule
            .iter()
            .filter(|e| e.is_for(&allocation.member_id, &project.id))
            .collect();

        performances.push(calculate_member_performance(
            allocation,
            &basis,
            &entries,
            work_hours,
            policy.minutes_mode,
        ));
    }

    let planned_investment_total: Decimal =
        performances.iter().map(|p| p.planned_investment).sum();
    let actual_investment_total: Decimal =
        performances.iter().map(|p| p.actual_investment).sum();

    let planned_performance = project.contract_amount - planned_investment_total;
    let actual_performance = project.contract_amount - actual_investment_total;
    let performance_diff = actual_performance - planned_performance;

    let distribution =
        distribute_rewards(performance_diff, project.company_share_percent, &performances);

    ProjectSettlement {
        project_id: project.id.clone(),
        is_settled: project.is_settled,
        contract_amount: project.contract_amount,
        planned_investment_total,
        actual_investment_total,
        planned_performance,
        actual_performance,
        performance_diff,
        company_share: distribution.company_share,
        team_share: distribution.team_share,
        performances,
        rewards: distribution.rewards,
    }
}
