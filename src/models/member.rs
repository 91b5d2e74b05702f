//! Member model.
//!
//! This module defines the Member struct representing the people whose
//! salaries and logged time drive cost allocation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a member of the organization.
///
/// Members are owned by the HR workflow; the engine only reads them. Only
/// members that are both active and approved participate in cost-basis
/// salary ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The member's annual salary in whole currency units.
    pub annual_salary: Decimal,
    /// Whether the member is currently active.
    pub is_active: bool,
    /// Whether the member's record has been approved.
    pub is_approved: bool,
}

impl Member {
    /// Returns true if the member participates in cost-basis ratios.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_engine::models::Member;
    /// use rust_decimal::Decimal;
    ///
    /// let member = Member {
    ///     id: "mem_001".to_string(),
    ///     name: "Kim".to_string(),
    ///     annual_salary: Decimal::from(72_000_000i64),
    ///     is_active: true,
    ///     is_approved: true,
    /// };
    /// assert!(member.is_costed());
    /// ```
    pub fn is_costed(&self) -> bool {
        self.is_active && self.is_approved
    }
}
