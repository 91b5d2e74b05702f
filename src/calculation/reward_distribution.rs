//! Reward distribution.
//!
//! This module splits a project's distributable surplus between the company
//! and the members who beat their plan, proportionally to each member's
//! efficiency.

use rust_decimal::Decimal;

use crate::models::{MemberPerformance, MemberReward};

use super::rounding::{round_money, round_rate};

/// The result of distributing one project's surplus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardDistribution {
    /// The company's share of the surplus.
    pub company_share: Decimal,
    /// The pool distributed among eligible members.
    pub team_share: Decimal,
    /// One reward row per performance row, in the same order.
    pub rewards: Vec<MemberReward>,
}

/// Distributes a project's surplus between company and members.
///
/// Overruns are absorbed, never charged back: a non-positive
/// `performance_diff` produces an all-zero distribution. Only members whose
/// efficiency is strictly positive are eligible; members who finished
/// exactly on plan or behind plan receive explicit zero rows and do not
/// dilute the denominator. Share amounts are computed from the exact
/// efficiency proportion and rounded independently per member, so their sum
/// may differ from the team pool by at most one unit per eligible member.
pub fn distribute_rewards(
    performance_diff: Decimal,
    company_share_percent: Decimal,
    performances: &[MemberPerformance],
) -> RewardDistribution {
    let bonus_pool = performance_diff.max(Decimal::ZERO);
    let company_share = round_money(bonus_pool * company_share_percent / Decimal::ONE_HUNDRED);
    let team_pool = round_money(
        bonus_pool * (Decimal::ONE_HUNDRED - company_share_percent) / Decimal::ONE_HUNDRED,
    );

    let total_eligible_efficiency: Decimal = performances
        .iter()
        .filter(|p| p.efficiency_rate > Decimal::ZERO)
        .map(|p| p.efficiency_rate)
        .sum();

    let rewards = performances
        .iter()
        .map(|performance| {
            let eligible = performance.efficiency_rate > Decimal::ZERO
                && !total_eligible_efficiency.is_zero()
                && !team_pool.is_zero();
            if eligible {
                let proportion = performance.efficiency_rate / total_eligible_efficiency;
                MemberReward {
                    member_id: performance.member_id.clone(),
                    share_percent: round_rate(proportion * Decimal::ONE_HUNDRED),
                    share_amount: round_money(team_pool * proportion),
                }
            } else {
                MemberReward {
                    member_id: performance.member_id.clone(),
                    share_percent: Decimal::ZERO,
                    share_amount: Decimal::ZERO,
                }
            }
        })
        .collect();

    RewardDistribution {
        company_share,
        team_share: team_pool,
        rewards,
    }
}
