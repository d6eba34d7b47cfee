//! Domain types for allocation and calendar calculations.
//!
//! - [`Date`]: Calendar date
//! - [`DateRange`]: Inclusive span of days, empty when inverted
//! - [`MonthKey`]: Calendar month used as the aggregation unit
//! - [`AllocationKind`] / [`AllocationSpec`]: How an assignment consumes time
//! - [`Holiday`]: Named non-working day

mod allocation;
mod date;
mod holiday;
mod month;
mod range;

pub use allocation::{AllocationKind, AllocationSpec, MAX_MONTHLY_HOURS, MAX_PERCENTAGE};
pub use date::Date;
pub use holiday::Holiday;
pub use month::MonthKey;
pub use range::{DateRange, Days};
