//! Domain models for the Cost & Reward Allocation Engine.
//!
//! This module contains the input entities (members, projects, allocations,
//! schedule entries, opex records), the [`SettlementSnapshot`] that bundles
//! them, and the output records produced by the pipeline.

mod member;
mod month;
mod opex;
mod project;
mod schedule;
mod settlement_result;
mod snapshot;

pub use member::Member;
pub use month::YearMonth;
pub use opex::OpexRecord;
pub use project::{Allocation, Project};
pub use schedule::ScheduleEntry;
pub use settlement_result::{
    MemberPerformance, MemberReward, MemberSummary, OrganizationSummary, ProjectSettlement,
    SettlementRun,
};
pub use snapshot::SettlementSnapshot;
