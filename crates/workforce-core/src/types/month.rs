//! Calendar month identifiers.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::date::days_in_month;
use super::{Date, DateRange};
use crate::error::{WorkforceError, WorkforceResult};

/// A calendar month, the unit of utilization aggregation.
///
/// Ordered chronologically and serialized as its `YYYY-MM` text form, so it
/// can key JSON maps directly.
///
/// # Example
///
/// ```rust
/// use workforce_core::types::MonthKey;
///
/// let jan = MonthKey::new(2026, 1).unwrap();
/// assert_eq!(jan.to_string(), "2026-01");
/// assert_eq!(jan.last_day().day(), 31);
/// assert_eq!(MonthKey::new(2025, 12).unwrap().next(), jan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key.
    ///
    /// # Errors
    ///
    /// Returns `WorkforceError::InvalidMonth` if `month` is outside 1-12 or
    /// the month is not representable as calendar dates.
    pub fn new(year: i32, month: u32) -> WorkforceResult<Self> {
        let representable = (1..=12).contains(&month)
            && NaiveDate::from_ymd_opt(year, month, 1).is_some()
            && NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)).is_some();
        if !representable {
            return Err(WorkforceError::invalid_month(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of calendar days in the month.
    #[must_use]
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// First calendar day of the month.
    #[must_use]
    pub fn first_day(&self) -> Date {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(Date::from)
            .unwrap_or_else(|| unreachable!("month key is validated on construction"))
    }

    /// Last calendar day of the month.
    #[must_use]
    pub fn last_day(&self) -> Date {
        self.first_day().end_of_month()
    }

    /// The whole month as an inclusive date range.
    #[must_use]
    pub fn range(&self) -> DateRange {
        DateRange::new(self.first_day(), self.last_day())
    }

    /// The following month.
    #[must_use]
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every month touched by `range`, in chronological order.
    ///
    /// Empty for an inverted range.
    #[must_use]
    pub fn spanning(range: &DateRange) -> Vec<MonthKey> {
        let mut months = Vec::new();
        if range.is_empty() {
            return months;
        }
        let last = MonthKey::of(range.end());
        let mut current = MonthKey::of(range.start());
        while current <= last {
            months.push(current);
            current = current.next();
        }
        months
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = WorkforceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year, month) = trimmed
            .split_once('-')
            .ok_or_else(|| WorkforceError::invalid_month(trimmed))?;
        let year: i32 = year
            .parse()
            .map_err(|_| WorkforceError::invalid_month(trimmed))?;
        let month: u32 = month
            .parse()
            .map_err(|_| WorkforceError::invalid_month(trimmed))?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_month() {
        assert!(MonthKey::new(2026, 0).is_err());
        assert!(MonthKey::new(2026, 13).is_err());
        assert!(MonthKey::new(2026, 12).is_ok());
    }

    #[test]
    fn test_rejects_unrepresentable_year() {
        assert!(matches!(
            MonthKey::new(300_000, 1),
            Err(WorkforceError::InvalidMonth { .. })
        ));
        assert!(MonthKey::new(-300_000, 12).is_err());
        assert!("300000-01".parse::<MonthKey>().is_err());

        let last = MonthKey::of(Date::from(NaiveDate::MAX));
        assert_eq!(last.last_day(), Date::from(NaiveDate::MAX));
        assert_eq!(last.range().days().last(), Some(Date::from(NaiveDate::MAX)));
    }

    #[test]
    fn test_parse_round_trip() {
        let key: MonthKey = "2026-02".parse().unwrap();
        assert_eq!(key, MonthKey::new(2026, 2).unwrap());
        assert_eq!(key.to_string(), "2026-02");
        assert_eq!("2026-2".parse::<MonthKey>().unwrap(), key);
        assert!("2026".parse::<MonthKey>().is_err());
        assert!("2026-13".parse::<MonthKey>().is_err());
        assert!("abcd-01".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_bounds() {
        let feb = MonthKey::new(2024, 2).unwrap();
        assert_eq!(feb.days(), 29);
        assert_eq!(feb.first_day(), Date::from_ymd(2024, 2, 1).unwrap());
        assert_eq!(feb.last_day(), Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_next_wraps_year() {
        let dec = MonthKey::new(2025, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2026, 1).unwrap());
    }

    #[test]
    fn test_spanning_months() {
        let range = DateRange::new(
            Date::from_ymd(2025, 11, 20).unwrap(),
            Date::from_ymd(2026, 2, 1).unwrap(),
        );
        let months: Vec<String> = MonthKey::spanning(&range)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2025-11", "2025-12", "2026-01", "2026-02"]);

        let inverted = DateRange::new(
            Date::from_ymd(2026, 2, 1).unwrap(),
            Date::from_ymd(2026, 1, 1).unwrap(),
        );
        assert!(MonthKey::spanning(&inverted).is_empty());
    }

    #[test]
    fn test_serializes_as_text_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(MonthKey::new(2026, 1).unwrap(), 20u32);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2026-01":20}"#);

        let back: std::collections::BTreeMap<MonthKey, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
