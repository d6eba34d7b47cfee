//! Working-day helpers backed by the process-wide Polish calendar.
//!
//! Thin free-function front end over [`PolishCalendar::global`]. Code that
//! needs a different calendar uses the [`Calendar`] trait directly.

use crate::calendars::{Calendar, PolishCalendar};
use crate::error::WorkforceResult;
use crate::types::{Date, DateRange, Holiday, MonthKey};

/// The 13 Polish public holidays of `year`, ordered by date.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    PolishCalendar::global().holidays_for_year(year)
}

/// Name of the holiday on `date`, or an empty string for an ordinary day.
pub fn holiday_name(date: Date) -> &'static str {
    PolishCalendar::global().holiday_name(date).unwrap_or("")
}

/// Working days in `start..=end`, ascending. Empty when `start > end`.
pub fn working_days(start: Date, end: Date) -> Vec<Date> {
    PolishCalendar::global().working_days(&DateRange::new(start, end))
}

/// Number of working days in `start..=end`. 0 when `start > end`.
pub fn working_day_count(start: Date, end: Date) -> u32 {
    PolishCalendar::global().working_day_count(&DateRange::new(start, end))
}

/// Number of working days in a calendar month.
///
/// # Errors
///
/// Returns `WorkforceError::InvalidMonth` when `month` is outside 1-12 or
/// the year is beyond the supported date range.
pub fn working_days_in_month(year: i32, month: u32) -> WorkforceResult<u32> {
    let key = MonthKey::new(year, month)?;
    Ok(PolishCalendar::global().working_days_in_month(key))
}
