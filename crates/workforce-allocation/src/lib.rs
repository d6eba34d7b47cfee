//! # Workforce Allocation
//!
//! Hours and utilization analytics over the Workforce Planner calendars.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Injected calendar**: Every operation runs against a [`Calendar`]
//!   borrowed by [`AllocationCalculator`]
//! - **Exact arithmetic**: `Decimal` throughout, rounded only in result structs
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use workforce_allocation::prelude::*;
//!
//! let calc = AllocationCalculator::polish();
//! let jan = MonthKey::new(2026, 1).unwrap();
//! let period = DateRange::new(
//!     Date::from_ymd(2026, 1, 15).unwrap(),
//!     Date::from_ymd(2026, 1, 31).unwrap(),
//! );
//! let half = AllocationSpec::percentage(dec!(50)).unwrap();
//!
//! // 12 working days at 4 hours
//! assert_eq!(calc.hours_in_month(&period, &half, jan), dec!(48));
//!
//! let result = calc.utilization(&[(period, half)], jan);
//! assert_eq!(result.percentage, dec!(30));
//! ```
//!
//! ## Module Overview
//!
//! - [`calculator`] - The calendar-bound calculator
//! - [`config`] - Thresholds, precision and parallelism settings
//! - [`types`] - Employees, projects, assignments
//! - [`roster`] - Validated collections of the above
//! - [`timeline`] - Multi-employee, multi-month views
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large timelines
//!
//! [`Calendar`]: workforce_core::calendars::Calendar

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod calculator;
pub mod config;
mod converter;
pub mod error;
mod monthly;
pub mod parallel;
pub mod roster;
pub mod timeline;
pub mod types;
mod utilization;

use rust_decimal::Decimal;
use workforce_core::types::{AllocationKind, AllocationSpec, Date, DateRange, MonthKey};

pub use calculator::AllocationCalculator;
pub use config::UtilizationConfig;
pub use error::{AllocationError, AllocationResult};
pub use roster::Roster;
pub use timeline::{EmployeeTimeline, Timeline, TimelineAssignment, TimelineFilter};
pub use types::{Allocated, Assignment, Employee, Project, Team};
pub use utilization::{LoadLevel, UtilizationResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::AllocationCalculator;
    pub use crate::config::UtilizationConfig;
    pub use crate::error::{AllocationError, AllocationResult};
    pub use crate::roster::Roster;
    pub use crate::timeline::{Timeline, TimelineFilter};
    pub use crate::types::{Allocated, Assignment, Employee, Project, Team};
    pub use crate::utilization::{LoadLevel, UtilizationResult};
    pub use workforce_core::prelude::*;
}

/// Hours per working day for an allocation in a month, on the Polish
/// calendar with an 8-hour day.
///
/// # Errors
///
/// Returns an error for a month outside 1-12 or a non-positive value.
pub fn daily_hours(
    kind: AllocationKind,
    value: Decimal,
    year: i32,
    month: u32,
) -> AllocationResult<Decimal> {
    let spec = AllocationSpec::new(kind, value)?;
    let month = MonthKey::new(year, month)?;
    Ok(AllocationCalculator::polish().daily_hours(&spec, month))
}

/// Hours an allocation over `start..=end` contributes to a month, on the
/// Polish calendar with an 8-hour day.
///
/// # Errors
///
/// Returns an error for a month outside 1-12 or a non-positive value.
pub fn hours_in_month(
    start: Date,
    end: Date,
    kind: AllocationKind,
    value: Decimal,
    year: i32,
    month: u32,
) -> AllocationResult<Decimal> {
    let spec = AllocationSpec::new(kind, value)?;
    let month = MonthKey::new(year, month)?;
    Ok(AllocationCalculator::polish().hours_in_month(&DateRange::new(start, end), &spec, month))
}

/// Utilization of one employee's assignments in a month, on the Polish
/// calendar with default settings.
///
/// # Errors
///
/// Returns an error for a month outside 1-12.
pub fn utilization<A: Allocated>(
    assignments: &[A],
    year: i32,
    month: u32,
) -> AllocationResult<UtilizationResult> {
    let month = MonthKey::new(year, month)?;
    Ok(AllocationCalculator::polish().utilization(assignments, month))
}
