//! Bitmap-based holiday storage for O(1) lookups.
//!
//! Holiday sets are a pure function of the year, so a calendar can compute
//! them once for a fixed span of years and answer membership queries with a
//! single bit test afterwards.

use chrono::Datelike;

use crate::types::Date;

/// Minimum year covered by a bitmap.
pub const MIN_YEAR: i32 = 1970;
/// Maximum year covered by a bitmap.
pub const MAX_YEAR: i32 = 2100;

/// Total number of years in the supported range.
const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// Maximum days per year (leap year).
const MAX_DAYS_PER_YEAR: usize = 366;

/// Total bits needed for the entire date range.
const TOTAL_BITS: usize = YEAR_COUNT * MAX_DAYS_PER_YEAR;

/// Number of u64 words needed to store all bits.
const WORD_COUNT: usize = (TOTAL_BITS + 63) / 64;

/// Holiday membership for [`MIN_YEAR`]..=[`MAX_YEAR`], one bit per day.
///
/// Weekends are not recorded here; the bitmap only answers "is this date a
/// public holiday".
///
/// # Performance
///
/// - `is_holiday()`: O(1)
/// - Memory usage: ~6KB per calendar
#[derive(Clone)]
pub struct HolidayBitmap {
    name: &'static str,
    bits: Box<[u64; WORD_COUNT]>,
}

impl std::fmt::Debug for HolidayBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HolidayBitmap")
            .field("name", &self.name)
            .field("holiday_count", &self.count_holidays())
            .finish()
    }
}

impl HolidayBitmap {
    /// Create a new empty holiday bitmap.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            bits: Box::new([0u64; WORD_COUNT]),
        }
    }

    /// Name of the calendar this bitmap belongs to.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the bitmap has an answer for `year`.
    #[inline]
    pub fn covers(year: i32) -> bool {
        (MIN_YEAR..=MAX_YEAR).contains(&year)
    }

    /// Mark a date as a holiday. Dates outside the covered years are ignored.
    pub fn add_holiday(&mut self, date: Date) {
        if let Some((word_idx, bit_idx)) = Self::date_to_indices(date) {
            self.bits[word_idx] |= 1u64 << bit_idx;
        }
    }

    /// Check if a date is a holiday.
    ///
    /// Always false outside the covered years; callers that need those
    /// years check [`covers`](Self::covers) first.
    #[inline]
    pub fn is_holiday(&self, date: Date) -> bool {
        if let Some((word_idx, bit_idx)) = Self::date_to_indices(date) {
            (self.bits[word_idx] & (1u64 << bit_idx)) != 0
        } else {
            false
        }
    }

    /// Count total holidays in the bitmap.
    pub fn count_holidays(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Convert a date to bitmap indices.
    ///
    /// Returns (word_index, bit_index) or None if date is out of range.
    #[inline]
    fn date_to_indices(date: Date) -> Option<(usize, usize)> {
        let year = date.year();
        if !Self::covers(year) {
            return None;
        }

        let year_offset = (year - MIN_YEAR) as usize;
        let day_of_year = date.as_naive_date().ordinal0() as usize;

        let bit_position = year_offset * MAX_DAYS_PER_YEAR + day_of_year;
        Some((bit_position / 64, bit_position % 64))
    }
}

/// Builder for holiday bitmaps from fixed-date and Easter-relative rules.
pub struct HolidayCalendarBuilder {
    bitmap: HolidayBitmap,
    start_year: i32,
    end_year: i32,
}

impl HolidayCalendarBuilder {
    /// Create a new builder spanning the full supported year range.
    pub fn new(name: &'static str) -> Self {
        Self {
            bitmap: HolidayBitmap::new(name),
            start_year: MIN_YEAR,
            end_year: MAX_YEAR,
        }
    }

    /// Restrict the years rules are expanded for.
    pub fn year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start.max(MIN_YEAR);
        self.end_year = end.min(MAX_YEAR);
        self
    }

    /// Add a holiday on the same month and day every year.
    pub fn add_fixed_holiday(mut self, month: u32, day: u32) -> Self {
        for year in self.start_year..=self.end_year {
            if let Ok(date) = Date::from_ymd(year, month, day) {
                self.bitmap.add_holiday(date);
            }
        }
        self
    }

    /// Add a holiday a fixed number of days from Easter Sunday.
    pub fn add_easter_holiday(mut self, offset_days: i64) -> Self {
        for year in self.start_year..=self.end_year {
            if let Some(easter) = easter_sunday(year) {
                self.bitmap.add_holiday(easter.add_days(offset_days));
            }
        }
        self
    }

    /// Build the holiday bitmap.
    pub fn build(self) -> HolidayBitmap {
        self.bitmap
    }
}

/// Calculate Easter Sunday using the Anonymous Gregorian algorithm.
///
/// Integer arithmetic only. Returns `None` when the result is not a
/// representable date (negative years).
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    let month = u32::try_from(month).ok()?;
    let day = u32::try_from(day).ok()?;
    Date::from_ymd(year, month, day).ok()
}
