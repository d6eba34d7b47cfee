//! Monthly utilization of one employee.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use workforce_core::calendars::Calendar;
use workforce_core::types::MonthKey;

use crate::calculator::AllocationCalculator;
use crate::types::Allocated;

/// How heavily an employee is loaded in a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadLevel {
    /// At or below the high-load threshold.
    Normal,
    /// Above the high-load threshold, not overbooked.
    High,
    /// Above the overbooking threshold.
    Overbooked,
}

impl LoadLevel {
    /// Lowercase label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadLevel::Normal => "normal",
            LoadLevel::High => "high",
            LoadLevel::Overbooked => "overbooked",
        }
    }
}

impl fmt::Display for LoadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Utilization of one employee in one month.
///
/// All figures are rounded for presentation; `is_overbooked` and `load`
/// are decided on the rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationResult {
    /// Allocated share of capacity, in percent.
    pub percentage: Decimal,
    /// Allocated hours.
    pub hours: Decimal,
    /// Capacity in hours.
    pub available_hours: Decimal,
    /// Percentage exceeds the overbooking threshold.
    pub is_overbooked: bool,
    /// Load classification.
    pub load: LoadLevel,
}

impl UtilizationResult {
    /// Result for an employee with nothing allocated.
    #[must_use]
    pub fn idle(available_hours: Decimal) -> Self {
        Self {
            percentage: Decimal::ZERO,
            hours: Decimal::ZERO,
            available_hours,
            is_overbooked: false,
            load: LoadLevel::Normal,
        }
    }
}

impl<C: Calendar + ?Sized> AllocationCalculator<'_, C> {
    /// Utilization of one employee's `assignments` in `month`.
    ///
    /// Assignments are summed without clipping, so concurrent allocations
    /// can push the percentage past 100. Tentative assignments count unless
    /// the configuration excludes them. A month without working days yields
    /// 0%.
    pub fn utilization<A: Allocated>(&self, assignments: &[A], month: MonthKey) -> UtilizationResult {
        let config = self.config();
        let available = self.available_hours(month);

        let total: Decimal = assignments
            .iter()
            .filter(|a| config.include_tentative || !a.is_tentative())
            .map(|a| self.hours_in_month(&a.period(), &a.allocation(), month))
            .sum();

        let percentage = if available > Decimal::ZERO {
            present(total / available * dec!(100), config.percentage_precision)
        } else {
            present(Decimal::ZERO, config.percentage_precision)
        };

        let is_overbooked = percentage > config.overbooking_threshold;
        let load = if is_overbooked {
            LoadLevel::Overbooked
        } else if percentage > config.high_load_threshold {
            LoadLevel::High
        } else {
            LoadLevel::Normal
        };

        tracing::debug!(%month, %total, %available, %percentage, %load, "utilization");

        UtilizationResult {
            percentage,
            hours: present(total, config.hours_precision),
            available_hours: present(available, config.hours_precision),
            is_overbooked,
            load,
        }
    }
}

/// Rounds half-to-even and fixes the scale, so `100` reads as `100.0`.
fn present(value: Decimal, precision: u32) -> Decimal {
    let mut rounded = value.round_dp(precision);
    rounded.rescale(precision);
    rounded
}
