//! Configuration types for the allocation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the organization's
//! work-hours window, its holiday calendar, and the settlement policy.

use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The business default used when no opex record exists at all.
///
/// This is a policy constant, not a derived value; callers needing a
/// different fallback override it through [`SettlementPolicy`].
pub fn default_monthly_opex() -> Decimal {
    Decimal::from(16_000_000i64)
}

/// A lunch window for one date, overriding the organization default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LunchWindow {
    /// The time lunch starts.
    pub start: NaiveTime,
    /// The time lunch ends.
    pub end: NaiveTime,
}

/// The resolved work and lunch windows for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindows {
    /// The time the work day starts.
    pub work_start: NaiveTime,
    /// The time the work day ends.
    pub work_end: NaiveTime,
    /// The time lunch starts.
    pub lunch_start: NaiveTime,
    /// The time lunch ends.
    pub lunch_end: NaiveTime,
}

/// Organization-wide work-hours configuration.
///
/// Holds the default work and lunch windows plus per-date lunch overrides.
/// Only the lunch window varies per date; the work window is uniform.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkHoursConfig {
    /// The time the work day starts.
    pub work_start: NaiveTime,
    /// The time the work day ends.
    pub work_end: NaiveTime,
    /// The time lunch starts by default.
    pub lunch_start: NaiveTime,
    /// The time lunch ends by default.
    pub lunch_end: NaiveTime,
    /// Lunch windows for specific dates that deviate from the default.
    #[serde(default)]
    pub lunch_overrides: HashMap<NaiveDate, LunchWindow>,
}

impl WorkHoursConfig {
    /// Resolves the effective windows for a given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::config::WorkHoursConfig;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use std::collections::HashMap;
    ///
    /// let config = WorkHoursConfig {
    ///     work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     work_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
    ///     lunch_start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    ///     lunch_end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    ///     lunch_overrides: HashMap::new(),
    /// };
    ///
    /// let windows = config.windows_for(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
    /// assert_eq!(windows.lunch_start, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    /// ```
    pub fn windows_for(&self, date: NaiveDate) -> DayWindows {
        let (lunch_start, lunch_end) = match self.lunch_overrides.get(&date) {
            Some(window) => (window.start, window.end),
            None => (self.lunch_start, self.lunch_end),
        };
        DayWindows {
            work_start: self.work_start,
            work_end: self.work_end,
            lunch_start,
            lunch_end,
        }
    }

    /// Validates that every configured window is well-formed.
    pub fn validate(&self) -> EngineResult<()> {
        if self.work_start >= self.work_end {
            return Err(EngineError::InvalidWorkWindow {
                message: "work_start must be before work_end".to_string(),
            });
        }
        if self.lunch_start >= self.lunch_end {
            return Err(EngineError::InvalidWorkWindow {
                message: "lunch_start must be before lunch_end".to_string(),
            });
        }
        for (date, window) in &self.lunch_overrides {
            if window.start >= window.end {
                return Err(EngineError::InvalidWorkWindow {
                    message: format!("lunch override for {} has start after end", date),
                });
            }
        }
        Ok(())
    }
}

/// The organization's set of non-working dates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidayCalendar {
    /// Dates that are holidays.
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Returns true if the given date is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}

/// Selects how actual time is measured when deriving actual days.
///
/// The source system contained two divergent measurements; the canonical
/// rule is still an open question, so both are exposed behind this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinutesMode {
    /// Logged time intersected with work hours, minus lunch overlap.
    #[default]
    Effective,
    /// The raw logged minutes, taken at face value.
    Raw,
}

/// Business-policy knobs for a settlement run.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementPolicy {
    /// How actual minutes are measured.
    #[serde(default)]
    pub minutes_mode: MinutesMode,
    /// Monthly opex assumed when no opex record exists at all.
    #[serde(default = "default_monthly_opex")]
    pub fallback_monthly_opex: Decimal,
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            minutes_mode: MinutesMode::default(),
            fallback_monthly_opex: default_monthly_opex(),
        }
    }
}
