//! CLI command implementations.

pub mod config;
pub mod daily_hours;
pub mod holidays;
pub mod hours;
pub mod month;
pub mod timeline;
pub mod utilization;
pub mod workdays;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use daily_hours::DailyHoursArgs;
pub use holidays::HolidaysArgs;
pub use hours::HoursArgs;
pub use month::MonthArgs;
pub use timeline::TimelineArgs;
pub use utilization::UtilizationArgs;
pub use workdays::WorkdaysArgs;

use workforce_allocation::AllocationCalculator;
use workforce_core::calendars::PolishCalendar;

use crate::cli::{Cli, OutputFormat};
use crate::error::CliResult;
use config::Settings;

/// What every command needs besides its own arguments.
pub struct Context {
    /// Resolved output format.
    pub format: OutputFormat,
    /// Loaded configuration.
    pub settings: Settings,
}

impl Context {
    /// Resolves the output format: flag first, then config, then table.
    pub fn new(cli: &Cli, settings: Settings) -> Self {
        Self {
            format: cli.format.unwrap_or(settings.default_format),
            settings,
        }
    }

    /// A calculator over the Polish calendar using the configured settings.
    pub fn calculator(&self) -> CliResult<AllocationCalculator<'static>> {
        Ok(AllocationCalculator::try_new(
            PolishCalendar::global(),
            self.settings.utilization_config(),
        )?)
    }
}
