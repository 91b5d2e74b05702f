//! Schedule entry model.
//!
//! This module defines the ScheduleEntry struct representing a single logged
//! block of work, the raw material for actual-time measurement.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single logged block of work for a member on one date.
///
/// Entries may be unclassified (no project) — such entries never enter
/// project calculations. Entries without a recorded start/end time are taken
/// at face value: their `minutes` field is used unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The member who logged the time.
    pub member_id: String,
    /// The project the time was logged against, if classified.
    #[serde(default)]
    pub project_id: Option<String>,
    /// The date the work happened.
    pub date: NaiveDate,
    /// The time-of-day the block started, if recorded.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// The time-of-day the block ended, if recorded.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// The raw logged duration in minutes.
    pub minutes: i64,
}

impl ScheduleEntry {
    /// Returns true if the entry is classified against a project.
    pub fn is_classified(&self) -> bool {
        self.project_id.is_some()
    }

    /// Returns true if the entry belongs to the given member and project.
    pub fn is_for(&self, member_id: &str, project_id: &str) -> bool {
        self.member_id == member_id && self.project_id.as_deref() == Some(project_id)
    }
}
