//! Configuration for hours and utilization computation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AllocationError, AllocationResult};

/// Configuration for hours and utilization computation.
///
/// Controls the standard working day, the overbooking and high-load
/// thresholds, presentation rounding and parallelism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilizationConfig {
    /// Length of a standard working day in hours.
    pub hours_per_day: Decimal,

    /// Utilization percentage above which an employee is overbooked.
    pub overbooking_threshold: Decimal,

    /// Utilization percentage above which load is reported as high.
    pub high_load_threshold: Decimal,

    /// Decimal places kept in reported utilization percentages.
    pub percentage_precision: u32,

    /// Decimal places kept in reported hours.
    pub hours_precision: u32,

    /// Decimal places kept in timeline daily hours.
    pub daily_hours_precision: u32,

    /// Count tentative assignments toward utilization.
    pub include_tentative: bool,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum employee count to trigger parallel processing.
    pub parallel_threshold: usize,
}

impl Default for UtilizationConfig {
    fn default() -> Self {
        Self {
            hours_per_day: dec!(8),
            overbooking_threshold: dec!(100),
            high_load_threshold: dec!(80),
            percentage_precision: 1,
            hours_precision: 1,
            daily_hours_precision: 2,
            include_tentative: true,
            parallel: true,
            parallel_threshold: 100,
        }
    }
}

impl UtilizationConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the standard working day length.
    #[must_use]
    pub fn with_hours_per_day(mut self, hours: Decimal) -> Self {
        self.hours_per_day = hours;
        self
    }

    /// Sets the overbooking threshold (percent).
    #[must_use]
    pub fn with_overbooking_threshold(mut self, threshold: Decimal) -> Self {
        self.overbooking_threshold = threshold;
        self
    }

    /// Sets the high-load threshold (percent).
    #[must_use]
    pub fn with_high_load_threshold(mut self, threshold: Decimal) -> Self {
        self.high_load_threshold = threshold;
        self
    }

    /// Sets whether tentative assignments count toward utilization.
    #[must_use]
    pub fn with_include_tentative(mut self, include: bool) -> Self {
        self.include_tentative = include;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::InvalidConfig` when the working day is not
    /// within (0, 24] hours, a threshold is negative, or the high-load
    /// threshold exceeds the overbooking threshold.
    pub fn validate(&self) -> AllocationResult<()> {
        if self.hours_per_day <= Decimal::ZERO || self.hours_per_day > dec!(24) {
            return Err(AllocationError::invalid_config(format!(
                "hours_per_day must be in (0, 24], got {}",
                self.hours_per_day
            )));
        }
        if self.overbooking_threshold < Decimal::ZERO || self.high_load_threshold < Decimal::ZERO {
            return Err(AllocationError::invalid_config(
                "thresholds must not be negative",
            ));
        }
        if self.high_load_threshold > self.overbooking_threshold {
            return Err(AllocationError::invalid_config(format!(
                "high_load_threshold ({}) exceeds overbooking_threshold ({})",
                self.high_load_threshold, self.overbooking_threshold
            )));
        }
        Ok(())
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
