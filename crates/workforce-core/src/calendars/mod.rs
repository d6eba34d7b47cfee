//! Holiday calendars and working-day counting.
//!
//! This module provides:
//! - The [`Calendar`] trait, the collaborator every hours calculation is
//!   parameterized over
//! - [`PolishCalendar`], the statutory Polish holiday calendar
//! - [`WeekendCalendar`], a weekends-only calendar for tests and what-if runs
//! - Working-day enumeration as default trait methods

pub mod bitmap;
mod poland;

pub use bitmap::easter_sunday;
pub use poland::{HolidayRule, PolishCalendar, POLISH_HOLIDAYS};

use crate::types::{Date, DateRange, Holiday, MonthKey};

/// Trait for holiday calendars.
///
/// Implementors only describe their holidays. A working day is always a
/// Monday-Friday date that is not a holiday; the provided methods derive
/// every working-day figure from that rule.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a public holiday, whatever its weekday.
    fn is_holiday(&self, date: Date) -> bool;

    /// All holidays of `year`, ordered by date.
    fn holidays_for_year(&self, year: i32) -> Vec<Holiday>;

    /// The holiday's name, or `None` for an ordinary day.
    fn holiday_name(&self, date: Date) -> Option<&'static str>;

    /// Returns true for a Monday-Friday date that is not a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.is_holiday(date)
    }

    /// Every working day in the range, ascending. Empty for an inverted range.
    fn working_days(&self, range: &DateRange) -> Vec<Date> {
        range.days().filter(|d| self.is_business_day(*d)).collect()
    }

    /// Number of working days in the range. 0 for an inverted range.
    fn working_day_count(&self, range: &DateRange) -> u32 {
        let count = range.days().filter(|d| self.is_business_day(*d)).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Number of working days in a calendar month.
    fn working_days_in_month(&self, month: MonthKey) -> u32 {
        self.working_day_count(&month.range())
    }

    /// Holidays falling inside the range, ascending.
    fn holidays_between(&self, range: &DateRange) -> Vec<Holiday> {
        range
            .years()
            .flat_map(|year| self.holidays_for_year(year))
            .filter(|h| range.contains(h.date))
            .collect()
    }
}

/// A calendar without public holidays: only weekends are days off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }

    fn holidays_for_year(&self, _year: i32) -> Vec<Holiday> {
        Vec::new()
    }

    fn holiday_name(&self, _date: Date) -> Option<&'static str> {
        None
    }
}
