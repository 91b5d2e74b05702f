//! Configuration for the Cost & Reward Allocation Engine.
//!
//! Contains the strongly-typed organization configuration (work-hours
//! window, holiday calendar, settlement policy) and its YAML loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    default_monthly_opex, DayWindows, HolidayCalendar, LunchWindow, MinutesMode, SettlementPolicy,
    WorkHoursConfig,
};
