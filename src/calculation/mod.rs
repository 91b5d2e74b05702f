//! Calculation logic for the Cost & Reward Allocation Engine.
//!
//! This module contains the full allocation pipeline: working-day counting,
//! time-ledger normalization, cost-basis derivation, member-project
//! performance reduction, project settlement aggregation, reward
//! distribution, and the aggregate views over settled projects.

mod aggregates;
mod cost_basis;
mod effective_minutes;
mod member_performance;
mod pipeline;
mod project_settlement;
mod reward_distribution;
mod rounding;
mod working_calendar;

pub use aggregates::{summarize_members, summarize_organization};
pub use cost_basis::{calculate_cost_basis, monthly_opex, CostBasis};
pub use effective_minutes::effective_minutes;
pub use member_performance::{
    actual_minutes, calculate_member_performance, MINUTES_PER_WORK_DAY,
};
pub use pipeline::run_settlement;
pub use project_settlement::settle_project;
pub use reward_distribution::{distribute_rewards, RewardDistribution};
pub use rounding::{round_days, round_money, round_rate};
pub use working_calendar::{days_in_month, working_days};
