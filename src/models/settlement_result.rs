//! Settlement result models.
//!
//! This module contains the output records produced by the allocation
//! pipeline: per-member performance rows, per-project settlement figures
//! with their reward distribution, and the aggregate summaries consumed by
//! reporting views.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One member's performance on one project.
///
/// Money fields are rounded to whole currency units and day counts to one
/// decimal at construction; derived fields are computed from the rounded
/// values so every row is internally consistent
/// (`saved_days == planned_days - actual_days` and
/// `saved_cost == planned_investment - actual_investment` hold exactly on
/// the reported numbers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPerformance {
    /// The member this row belongs to.
    pub member_id: String,
    /// The member's daily total cost for the pricing month.
    pub daily_total_cost: Decimal,
    /// Days budgeted for the member.
    pub planned_days: Decimal,
    /// Days actually invested, derived from logged time.
    pub actual_days: Decimal,
    /// Days saved against the budget (negative when over budget).
    pub saved_days: Decimal,
    /// Percentage of planned days saved; 0 when nothing was planned.
    pub efficiency_rate: Decimal,
    /// Cost of the planned investment.
    pub planned_investment: Decimal,
    /// Cost of the actual investment.
    pub actual_investment: Decimal,
    /// Cost saved against the plan (negative when over budget).
    pub saved_cost: Decimal,
}

/// One member's slice of a project's distributable surplus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberReward {
    /// The member this reward belongs to.
    pub member_id: String,
    /// The member's share of the team pool as a percentage.
    pub share_percent: Decimal,
    /// The member's share of the team pool in whole currency units.
    pub share_amount: Decimal,
}

/// The complete settlement record for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettlement {
    /// The project this settlement belongs to.
    pub project_id: String,
    /// Whether the project was marked settled in the input snapshot.
    pub is_settled: bool,
    /// The project's contract amount, unmodified.
    pub contract_amount: Decimal,
    /// Sum of planned investments over the project's members.
    pub planned_investment_total: Decimal,
    /// Sum of actual investments over the project's members.
    pub actual_investment_total: Decimal,
    /// Contract amount minus planned investment.
    pub planned_performance: Decimal,
    /// Contract amount minus actual investment.
    pub actual_performance: Decimal,
    /// Actual minus planned performance; positive means surplus.
    pub performance_diff: Decimal,
    /// The company's share of the distributable surplus.
    pub company_share: Decimal,
    /// The team pool distributed among members.
    pub team_share: Decimal,
    /// Per-member performance rows.
    pub performances: Vec<MemberPerformance>,
    /// Per-member reward rows, aligned with `performances`.
    pub rewards: Vec<MemberReward>,
}

/// Aggregate figures for one member across all settled projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    /// The member this summary belongs to.
    pub member_id: String,
    /// Total planned days across settled projects.
    pub planned_days_total: Decimal,
    /// Total actual days across settled projects.
    pub actual_days_total: Decimal,
    /// Total reward amount across settled projects.
    pub share_amount_total: Decimal,
}

/// Aggregate figures across the organization's settled projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    /// The number of settled projects in the snapshot.
    pub settled_project_count: usize,
    /// Total company share across settled projects.
    pub company_share_total: Decimal,
    /// Total amount distributed to members across settled projects.
    pub team_distribution_total: Decimal,
}

/// The complete result of one settlement run over an input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// The total run duration in microseconds.
    pub duration_us: u64,
    /// One settlement record per project in the snapshot.
    pub settlements: Vec<ProjectSettlement>,
    /// Aggregates per member over settled projects.
    pub member_summaries: Vec<MemberSummary>,
    /// Aggregates across the organization's settled projects.
    pub organization: OrganizationSummary,
}
