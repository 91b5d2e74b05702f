//! Request types for the allocation engine API.
//!
//! This module defines the JSON request structure for the `/settle` endpoint.

use serde::{Deserialize, Serialize};

use crate::config::MinutesMode;
use crate::models::{Member, OpexRecord, Project, ScheduleEntry, SettlementSnapshot};

/// Request body for the `/settle` endpoint.
///
/// Carries one self-consistent snapshot of the organization's data plus an
/// optional per-request override for how actual minutes are measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
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
    /// Overrides the configured minutes mode for this request only.
    #[serde(default)]
    pub minutes_mode: Option<MinutesMode>,
}

impl From<SettlementRequest> for SettlementSnapshot {
    fn from(request: SettlementRequest) -> Self {
        SettlementSnapshot {
            members: request.members,
            projects: request.projects,
            schedule: request.schedule,
            opex: request.opex,
        }
    }
}
