//! Project and allocation models.
//!
//! This module defines the Project struct and its staffing Allocations,
//! which together determine how a project's contract amount is weighed
//! against the investment the team put into it.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

fn default_company_share() -> Decimal {
    Decimal::from(80)
}

/// Assignment of a member to a project with a planned day budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// The member assigned to the project.
    pub member_id: String,
    /// The number of days budgeted for the member (fractional allowed, >= 0).
    pub planned_days: Decimal,
    /// Optional override for the allocation start date. When absent, the
    /// project start date is used to pick the pricing month.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl Allocation {
    /// Resolves the pricing month for this allocation.
    ///
    /// The allocation's own start date wins when present; otherwise the
    /// project start date decides which month's costs apply.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::models::{Allocation, YearMonth};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let allocation = Allocation {
    ///     member_id: "mem_001".to_string(),
    ///     planned_days: Decimal::from(10),
    ///     start_date: Some(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
    /// };
    /// let project_start = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
    /// assert_eq!(
    ///     allocation.pricing_month(project_start),
    ///     YearMonth::new(2026, 3).unwrap()
    /// );
    /// ```
    pub fn pricing_month(&self, project_start: NaiveDate) -> YearMonth {
        YearMonth::from_date(self.start_date.unwrap_or(project_start))
    }
}

/// Represents a project with a contract amount and its staffing allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The contracted amount for the project in whole currency units.
    pub contract_amount: Decimal,
    /// The date the project starts.
    pub start_date: NaiveDate,
    /// The date the project ends, if known.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// The company's percentage of any distributable surplus (0-100).
    #[serde(default = "default_company_share")]
    pub company_share_percent: Decimal,
    /// Whether the project has been settled. Only settled projects feed
    /// into aggregate performance views.
    #[serde(default)]
    pub is_settled: bool,
    /// When the project was settled, if it has been.
    #[serde(default)]
    pub settled_at: Option<DateTime<Utc>>,
    /// The staffing allocations for the project.
    #[serde(default)]
    pub allocations: Vec<Allocation>,
}

impl Project {
    /// Returns the team's percentage of any distributable surplus.
    pub fn team_share_percent(&self) -> Decimal {
        Decimal::ONE_HUNDRED - self.company_share_percent
    }
}
