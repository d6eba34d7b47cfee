//! # Workforce Core
//!
//! Core types and calendars for the Workforce Planner allocation engine.
//!
//! This crate provides the foundational building blocks used by the
//! utilization calculations:
//!
//! - **Types**: `Date`, `DateRange`, `MonthKey`, `AllocationSpec`, `Holiday`
//! - **Holiday Calendars**: Polish public holidays with an Easter computus
//! - **Working Days**: Monday-Friday non-holiday counting over ranges and months
//!
//! ## Example
//!
//! ```rust
//! use workforce_core::prelude::*;
//!
//! let calendar = PolishCalendar::global();
//! let jan = MonthKey::new(2026, 1).unwrap();
//!
//! // 22 weekdays minus New Year's Day and Epiphany
//! assert_eq!(calendar.working_days_in_month(jan), 20);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::similar_names)]

pub mod calendars;
pub mod error;
pub mod types;
pub mod working_days;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, PolishCalendar, WeekendCalendar};
    pub use crate::error::{WorkforceError, WorkforceResult};
    pub use crate::types::{
        AllocationKind, AllocationSpec, Date, DateRange, Holiday, MonthKey,
    };
}

// Re-export commonly used types at crate root
pub use error::{WorkforceError, WorkforceResult};
pub use types::{AllocationKind, AllocationSpec, Date, DateRange, Holiday, MonthKey};
pub use working_days::{
    holiday_name, holidays_for_year, working_day_count, working_days, working_days_in_month,
};
