//! Calendar month identification.
//!
//! This module defines the [`YearMonth`] type used to key opex records and to
//! select the pricing month for an allocation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, serialized as `"YYYY-MM"`.
///
/// Used wherever the engine needs month granularity: opex lookup, working-day
/// counting, and cost-basis pricing.
///
/// # Example
///
/// ```
/// use settlement_engine::models::YearMonth;
/// use chrono::NaiveDate;
///
/// let month = YearMonth::new(2026, 2).unwrap();
/// assert_eq!(month.to_string(), "2026-02");
/// assert_eq!(
///     YearMonth::from_date(NaiveDate::from_ymd_opt(2026, 2, 17).unwrap()),
///     month
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`, returning `None` if the month is not 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Returns the month a given date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month validated at construction")
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("expected YYYY-MM, got '{}'", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in '{}'", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month in '{}'", s))?;
        Self::new(year, month).ok_or_else(|| format!("month out of range in '{}'", s))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_month_out_of_range() {
        assert!(YearMonth::new(2026, 0).is_none());
        assert!(YearMonth::new(2026, 13).is_none());
        assert!(YearMonth::new(2026, 12).is_some());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 17).unwrap();
        assert_eq!(YearMonth::from_date(date), YearMonth::new(2026, 2).unwrap());
    }

    #[test]
    fn test_first_day() {
        let month = YearMonth::new(2026, 2).unwrap();
        assert_eq!(
            month.first_day(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_display_pads_month() {
        assert_eq!(YearMonth::new(2026, 2).unwrap().to_string(), "2026-02");
        assert_eq!(YearMonth::new(2026, 11).unwrap().to_string(), "2026-11");
    }

    #[test]
    fn test_parse_round_trip() {
        let month: YearMonth = "2026-02".parse().unwrap();
        assert_eq!(month, YearMonth::new(2026, 2).unwrap());
        assert_eq!(month.to_string().parse::<YearMonth>().unwrap(), month);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2026".parse::<YearMonth>().is_err());
        assert!("2026-00".parse::<YearMonth>().is_err());
        assert!("2026-13".parse::<YearMonth>().is_err());
        assert!("twenty-two".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let month = YearMonth::new(2026, 2).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "\"2026-02\"");

        let deserialized: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, month);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let jan: YearMonth = "2026-01".parse().unwrap();
        let feb: YearMonth = "2026-02".parse().unwrap();
        let dec_prior: YearMonth = "2025-12".parse().unwrap();
        assert!(dec_prior < jan);
        assert!(jan < feb);
    }
}
