//! Aggregate reporting over settled projects.
//!
//! Only projects marked settled feed these views; unsettled projects are
//! computed but stay out of the sums until their flag flips.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{MemberSummary, OrganizationSummary, ProjectSettlement};

/// Sums planned/actual days and reward amounts per member over settled
/// projects. Members are returned in id order.
pub fn summarize_members(settlements: &[ProjectSettlement]) -> Vec<MemberSummary> {
    let mut summaries: BTreeMap<String, MemberSummary> = BTreeMap::new();

    for settlement in settlements.iter().filter(|s| s.is_settled) {
        for performance in &settlement.performances {
            let summary = summaries
                .entry(performance.member_id.clone())
                .or_insert_with(|| MemberSummary {
                    member_id: performance.member_id.clone(),
                    planned_days_total: Decimal::ZERO,
                    actual_days_total: Decimal::ZERO,
                    share_amount_total: Decimal::ZERO,
                });
            summary.planned_days_total += performance.planned_days;
            summary.actual_days_total += performance.actual_days;
        }
        for reward in &settlement.rewards {
            if let Some(summary) = summaries.get_mut(&reward.member_id) {
                summary.share_amount_total += reward.share_amount;
            }
        }
    }

    summaries.into_values().collect()
}

/// Sums the company and team distributions over settled projects.
pub fn summarize_organization(settlements: &[ProjectSettlement]) -> OrganizationSummary {
    let settled: Vec<&ProjectSettlement> =
        settlements.iter().filter(|s| s.is_settled).collect();

    OrganizationSummary {
        settled_project_count: settled.len(),
        company_share_total: settled.iter().map(|s| s.company_share).sum(),
        team_distribution_total: settled
            .iter()
            .flat_map(|s| s.rewards.iter())
            .map(|r| r.share_amount)
            .sum(),
    }
}
