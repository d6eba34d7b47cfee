//! Inclusive date ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use super::Date;

/// An inclusive `[start, end]` span of calendar days.
///
/// `start <= end` is the caller's responsibility. An inverted range is
/// treated as empty: it yields no days and intersects nothing, so every
/// calculation over it degrades to zero instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range. No ordering check is made.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// A single-day range.
    #[must_use]
    pub fn single(date: Date) -> Self {
        Self::new(date, date)
    }

    /// First day of the range.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// True when `start > end`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days covered, 0 when empty.
    #[must_use]
    pub fn len_days(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            u32::try_from(self.start.days_between(&self.end) + 1).unwrap_or(u32::MAX)
        }
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.intersect(other).is_some()
    }

    /// The common days of both ranges, or `None` if they do not meet.
    #[must_use]
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let overlap = DateRange::new(self.start.max(other.start), self.end.min(other.end));
        (!overlap.is_empty()).then_some(overlap)
    }

    /// The calendar years the range touches.
    ///
    /// Yields nothing for an empty range.
    #[must_use]
    pub fn years(&self) -> RangeInclusive<i32> {
        if self.is_empty() {
            #[allow(clippy::reversed_empty_ranges)]
            return 1..=0;
        }
        self.start.year()..=self.end.year()
    }

    /// Iterates every calendar day in ascending order.
    #[must_use]
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|d| *d <= self.end)?;
        // None past the last representable date
        self.next = current.as_naive_date().succ_opt().map(Date::from);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .and_then(|next| usize::try_from(next.days_between(&self.end) + 1).ok())
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
