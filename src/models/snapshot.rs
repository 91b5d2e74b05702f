//! Input snapshot model.
//!
//! The engine is a pure function of one self-consistent snapshot of the
//! organization's data, loaded atomically by the surrounding system. This
//! module defines that snapshot and its boundary validation.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Member, OpexRecord, Project, ScheduleEntry};

/// An immutable snapshot of all inputs to one settlement run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementSnapshot {
    /// The full member roster.
    pub members: Vec<Member>,
    /// The projects to settle, each with its allocations.
    pub projects: Vec<Project>,
    /// All logged schedule entries.
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
    /// Monthly operating expense records.
    #[serde(default)]
    pub opex: Vec<OpexRecord>,
}

impl SettlementSnapshot {
    /// Validates the snapshot's input invariants.
    ///
    /// Checks that every project's company share percentage lies in [0,100]
    /// and that no allocation has negative planned days. Allocations
    /// referencing unknown members are NOT an error; they are dropped
    /// silently during settlement.
    pub fn validate(&self) -> EngineResult<()> {
        for project in &self.projects {
            if project.company_share_percent.is_sign_negative()
                || project.company_share_percent > rust_decimal::Decimal::ONE_HUNDRED
            {
                return Err(EngineError::InvalidProject {
                    project_id: project.id.clone(),
                    message: "company_share_percent must be between 0 and 100".to_string(),
                });
            }
            for allocation in &project.allocations {
                if allocation.planned_days.is_sign_negative() {
                    return Err(EngineError::InvalidAllocation {
                        project_id: project.id.clone(),
                        member_id: allocation.member_id.clone(),
                        message: "planned_days must not be negative".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
