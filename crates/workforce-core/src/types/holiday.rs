//! Named public holidays.

use serde::Serialize;
use std::fmt;

use super::Date;

/// A named non-working day.
///
/// Holidays are derived from the year on demand and never stored, so the
/// name is a static string from the calendar's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Holiday {
    /// Date the holiday falls on.
    pub date: Date,
    /// Local name of the holiday.
    pub name: &'static str,
}

impl Holiday {
    /// Creates a holiday.
    #[must_use]
    pub fn new(date: Date, name: &'static str) -> Self {
        Self { date, name }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}
