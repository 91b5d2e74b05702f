//! Operating expense model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// The organization's total operating expense for one calendar month.
///
/// Lookup is by exact month; the cost-basis calculator falls back to the
/// first available record, then to the configured default, when no exact
/// match exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpexRecord {
    /// The month the expense applies to.
    pub year_month: YearMonth,
    /// The total operating expense for the month in whole currency units.
    pub amount: Decimal,
}
