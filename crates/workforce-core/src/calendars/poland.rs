//! Polish statutory public holidays.

use super::bitmap::{easter_sunday, HolidayBitmap, HolidayCalendarBuilder, MAX_YEAR, MIN_YEAR};
use super::Calendar;
use crate::types::{Date, Holiday};
use std::sync::OnceLock;

/// Static Polish calendar instance.
static POLISH_CALENDAR: OnceLock<PolishCalendar> = OnceLock::new();

/// One line of a holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed {
        /// Month (1-12).
        month: u32,
        /// Day of month.
        day: u32,
        /// Local name.
        name: &'static str,
    },
    /// A fixed number of days after Easter Sunday.
    Easter {
        /// Days after Easter Sunday (0 is Easter itself).
        offset: i64,
        /// Local name.
        name: &'static str,
    },
}

impl HolidayRule {
    /// Local name of the holiday.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fixed { name, .. } | Self::Easter { name, .. } => name,
        }
    }

    /// The date this rule produces in `year`, given that year's Easter.
    fn resolve(&self, year: i32, easter: Option<Date>) -> Option<Date> {
        match *self {
            Self::Fixed { month, day, .. } => Date::from_ymd(year, month, day).ok(),
            Self::Easter { offset, .. } => easter.map(|e| e.add_days(offset)),
        }
    }
}

/// The thirteen Polish public holidays: nine fixed, four movable.
pub const POLISH_HOLIDAYS: [HolidayRule; 13] = [
    HolidayRule::Fixed { month: 1, day: 1, name: "Nowy Rok" },
    HolidayRule::Fixed { month: 1, day: 6, name: "Trzech Króli" },
    HolidayRule::Fixed { month: 5, day: 1, name: "Święto Pracy" },
    HolidayRule::Fixed { month: 5, day: 3, name: "Konstytucja 3 Maja" },
    HolidayRule::Fixed { month: 8, day: 15, name: "Wniebowzięcie NMP" },
    HolidayRule::Fixed { month: 11, day: 1, name: "Wszystkich Świętych" },
    HolidayRule::Fixed { month: 11, day: 11, name: "Święto Niepodległości" },
    HolidayRule::Fixed { month: 12, day: 25, name: "Boże Narodzenie" },
    HolidayRule::Fixed { month: 12, day: 26, name: "Boże Narodzenie (2. dzień)" },
    HolidayRule::Easter { offset: 0, name: "Wielkanoc" },
    HolidayRule::Easter { offset: 1, name: "Poniedziałek Wielkanocny" },
    HolidayRule::Easter { offset: 49, name: "Zielone Świątki" },
    HolidayRule::Easter { offset: 60, name: "Boże Ciało" },
];

/// Polish public holiday calendar.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Epiphany (January 6)
/// - Labour Day (May 1)
/// - Constitution Day (May 3)
/// - Assumption of Mary (August 15)
/// - All Saints' Day (November 1)
/// - Independence Day (November 11)
/// - Christmas Day and Second Day of Christmas (December 25-26)
/// - Easter Sunday, Easter Monday, Pentecost (Easter + 49), Corpus Christi (Easter + 60)
///
/// Holidays falling on a weekend are not moved. Membership for 1970-2100 is
/// answered from a bitmap built once per process; other years are computed
/// from [`POLISH_HOLIDAYS`] on each call.
#[derive(Debug, Clone)]
pub struct PolishCalendar {
    bitmap: HolidayBitmap,
}

impl PolishCalendar {
    /// Create a new Polish calendar.
    pub fn new() -> Self {
        Self {
            bitmap: build_polish_holidays(),
        }
    }

    /// Get the global Polish calendar instance.
    pub fn global() -> &'static PolishCalendar {
        POLISH_CALENDAR.get_or_init(PolishCalendar::new)
    }
}

impl Default for PolishCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for PolishCalendar {
    fn name(&self) -> &'static str {
        "Poland"
    }

    fn is_holiday(&self, date: Date) -> bool {
        if HolidayBitmap::covers(date.year()) {
            self.bitmap.is_holiday(date)
        } else {
            self.holiday_name(date).is_some()
        }
    }

    fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        let easter = easter_sunday(year);
        let mut holidays: Vec<Holiday> = POLISH_HOLIDAYS
            .iter()
            .filter_map(|rule| {
                rule.resolve(year, easter)
                    .map(|date| Holiday::new(date, rule.name()))
            })
            .collect();
        holidays.sort();
        holidays
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        let fixed = POLISH_HOLIDAYS.iter().find(|rule| {
            matches!(rule, HolidayRule::Fixed { month, day, .. }
                if *month == date.month() && *day == date.day())
        });
        if let Some(rule) = fixed {
            return Some(rule.name());
        }

        let easter = easter_sunday(date.year())?;
        POLISH_HOLIDAYS
            .iter()
            .find(|rule| {
                matches!(rule, HolidayRule::Easter { offset, .. }
                    if easter.add_days(*offset) == date)
            })
            .map(HolidayRule::name)
    }
}

/// Build the Polish holiday bitmap.
fn build_polish_holidays() -> HolidayBitmap {
    log::debug!("building Polish holiday bitmap for {MIN_YEAR}-{MAX_YEAR}");
    POLISH_HOLIDAYS
        .iter()
        .fold(
            HolidayCalendarBuilder::new("Poland").year_range(MIN_YEAR, MAX_YEAR),
            |builder, rule| match *rule {
                HolidayRule::Fixed { month, day, .. } => builder.add_fixed_holiday(month, day),
                HolidayRule::Easter { offset, .. } => builder.add_easter_holiday(offset),
            },
        )
        .build()
}
