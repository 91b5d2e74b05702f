//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! organization's configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidayCalendar, SettlementPolicy, WorkHoursConfig};

/// Loads and provides access to the organization configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the work-hours window, holiday calendar, and settlement policy
/// consumed by the pipeline.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── work_hours.yaml  # Work and lunch windows, per-date lunch overrides
/// ├── holidays.yaml    # Organization holiday calendar
/// └── policy.yaml      # Settlement policy (minutes mode, opex fallback)
/// ```
///
/// # Example
///
/// ```no_run
/// use settlement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("work day starts at {}", loader.work_hours().work_start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    work_hours: WorkHoursConfig,
    holidays: HolidayCalendar,
    policy: SettlementPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The configured work or lunch windows are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let work_hours: WorkHoursConfig = Self::load_yaml(&path.join("work_hours.yaml"))?;
        work_hours.validate()?;

        let holidays: HolidayCalendar = Self::load_yaml(&path.join("holidays.yaml"))?;
        let policy: SettlementPolicy = Self::load_yaml(&path.join("policy.yaml"))?;

        Ok(Self {
            work_hours,
            holidays,
            policy,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the work-hours configuration.
    pub fn work_hours(&self) -> &WorkHoursConfig {
        &self.work_hours
    }

    /// Returns the holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns the settlement policy.
    pub fn policy(&self) -> &SettlementPolicy {
        &self.policy
    }
}
