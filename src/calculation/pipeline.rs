//! The full settlement pipeline.
//!
//! Settles every project in a snapshot and derives the aggregate views,
//! wrapped in a run envelope for downstream consumers. The caller decides
//! when to run it; the engine holds no state between runs.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::config::{HolidayCalendar, SettlementPolicy, WorkHoursConfig};
use crate::models::{ProjectSettlement, SettlementRun, SettlementSnapshot};

use super::aggregates::{summarize_members, summarize_organization};
use super::project_settlement::settle_project;

/// Runs the full allocation pipeline over one input snapshot.
///
/// Every project is settled; the aggregate views then sum over the projects
/// the snapshot marks as settled. The computation is a pure function of its
/// inputs apart from the run id and timestamp stamped on the envelope.
pub fn run_settlement(
    snapshot: &SettlementSnapshot,
    work_hours: &WorkHoursConfig,
    calendar: &HolidayCalendar,
    policy: &SettlementPolicy,
) -> SettlementRun {
    let started = Instant::now();

    let settlements: Vec<ProjectSettlement> = snapshot
        .projects
        .iter()
        .map(|project| {
            settle_project(
                project,
                &snapshot.members,
                &snapshot.schedule,
                &snapshot.opex,
                work_hours,
                calendar,
                policy,
            )
        })
        .collect();

    let member_summaries = summarize_members(&settlements);
    let organization = summarize_organization(&settlements);

    SettlementRun {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        duration_us: started.elapsed().as_micros() as u64,
        settlements,
        member_summaries,
        organization,
    }
}
