//! Date type for calendar calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{WorkforceError, WorkforceResult};

/// A calendar date.
///
/// This is a newtype wrapper around `chrono::NaiveDate` that carries the
/// handful of operations the working-day and allocation code needs.
///
/// # Example
///
/// ```rust
/// use workforce_core::types::Date;
///
/// let date = Date::from_ymd(2026, 1, 15).unwrap();
/// assert_eq!(date.end_of_month(), Date::from_ymd(2026, 1, 31).unwrap());
/// assert!(date.is_weekday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `WorkforceError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> WorkforceResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| WorkforceError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `WorkforceError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> WorkforceResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| WorkforceError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Returns the following calendar day.
    #[must_use]
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        self.0.with_day(1).map_or(*self, Date)
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.0.with_day(self.days_in_month()).map_or(*self, Date)
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is a weekday (Monday through Friday).
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = WorkforceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Number of days in a month, or 0 for a month number outside 1-12.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2026, 6, 15).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2026, 2, 29).is_err());
        assert!(Date::from_ymd(2026, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse("2026-01-28").unwrap();
        assert_eq!(date.to_string(), "2026-01-28");
        assert_eq!(" 2026-01-28 ".parse::<Date>().unwrap(), date);
        assert!(Date::parse("28/01/2026").is_err());
    }

    #[test]
    fn test_month_bounds() {
        let date = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(date.start_of_month(), Date::from_ymd(2024, 2, 1).unwrap());
        assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());

        let date = Date::from_ymd(2026, 2, 10).unwrap();
        assert_eq!(date.end_of_month(), Date::from_ymd(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_weekend_detection() {
        // 2026-01-03 is a Saturday, 2026-01-05 a Monday
        assert!(Date::from_ymd(2026, 1, 3).unwrap().is_weekend());
        assert!(Date::from_ymd(2026, 1, 4).unwrap().is_weekend());
        assert!(Date::from_ymd(2026, 1, 5).unwrap().is_weekday());
    }

    #[test]
    fn test_date_arithmetic() {
        let d = Date::from_ymd(2026, 1, 31).unwrap();
        assert_eq!(d + 1, Date::from_ymd(2026, 2, 1).unwrap());
        assert_eq!(d - 31, Date::from_ymd(2025, 12, 31).unwrap());
        assert_eq!(d.succ() - d, 1);
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2026, 4, 5).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-04-05\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
