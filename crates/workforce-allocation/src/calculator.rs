//! The calendar-bound calculator that every hours operation hangs off.

use rust_decimal::Decimal;
use workforce_core::calendars::{Calendar, PolishCalendar};
use workforce_core::types::MonthKey;

use crate::config::UtilizationConfig;
use crate::error::AllocationResult;

/// Hours and utilization calculator over an injected holiday calendar.
///
/// The calendar is borrowed, so one process-wide calendar can serve any
/// number of calculators with different configurations.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use workforce_allocation::AllocationCalculator;
/// use workforce_core::types::{AllocationSpec, MonthKey};
///
/// let calc = AllocationCalculator::polish();
/// let feb = MonthKey::new(2026, 2).unwrap();
/// let spec = AllocationSpec::monthly_hours(dec!(30)).unwrap();
///
/// // 30 hours over February's 20 working days
/// assert_eq!(calc.daily_hours(&spec, feb), dec!(1.5));
/// ```
#[derive(Debug, Clone)]
pub struct AllocationCalculator<'c, C: Calendar + ?Sized = PolishCalendar> {
    calendar: &'c C,
    config: UtilizationConfig,
}

impl AllocationCalculator<'static, PolishCalendar> {
    /// Calculator over the global Polish calendar with default settings.
    #[must_use]
    pub fn polish() -> Self {
        Self::new(PolishCalendar::global(), UtilizationConfig::default())
    }
}

impl<'c, C: Calendar + ?Sized> AllocationCalculator<'c, C> {
    /// Creates a calculator.
    ///
    /// The configuration is taken as given; use
    /// [`try_new`](Self::try_new) for values from outside the program.
    #[must_use]
    pub fn new(calendar: &'c C, config: UtilizationConfig) -> Self {
        Self { calendar, config }
    }

    /// Creates a calculator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::InvalidConfig` if the configuration is unusable.
    pub fn try_new(calendar: &'c C, config: UtilizationConfig) -> AllocationResult<Self> {
        config.validate()?;
        Ok(Self::new(calendar, config))
    }

    /// The holiday calendar in use.
    #[must_use]
    pub fn calendar(&self) -> &'c C {
        self.calendar
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &UtilizationConfig {
        &self.config
    }

    /// Working days in `month` under this calculator's calendar.
    #[must_use]
    pub fn working_days(&self, month: MonthKey) -> u32 {
        self.calendar.working_days_in_month(month)
    }

    /// Capacity of one employee in `month`: working days times the standard day.
    #[must_use]
    pub fn available_hours(&self, month: MonthKey) -> Decimal {
        Decimal::from(self.working_days(month)) * self.config.hours_per_day
    }
}
