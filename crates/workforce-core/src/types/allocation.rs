//! Allocation specifications.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{WorkforceError, WorkforceResult};

/// How an assignment consumes an employee's time.
///
/// A closed two-variant set. Parsing rejects anything other than the exact
/// `percentage` / `monthly_hours` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKind {
    /// Share of a standard working day, in percent.
    Percentage,
    /// Fixed budget of hours per calendar month.
    MonthlyHours,
}

impl AllocationKind {
    /// The wire tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::MonthlyHours => "monthly_hours",
        }
    }
}

impl fmt::Display for AllocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationKind {
    type Err = WorkforceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::Percentage),
            "monthly_hours" => Ok(Self::MonthlyHours),
            other => Err(WorkforceError::unknown_allocation_kind(other)),
        }
    }
}

/// Largest accepted percentage allocation (one hundred full-time loads).
pub const MAX_PERCENTAGE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Largest accepted monthly-hours budget.
pub const MAX_MONTHLY_HOURS: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// An allocation: kind plus a strictly positive, bounded value.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use workforce_core::types::{AllocationKind, AllocationSpec};
///
/// let spec = AllocationSpec::percentage(dec!(50)).unwrap();
/// assert_eq!(spec.kind(), AllocationKind::Percentage);
/// assert!(AllocationSpec::monthly_hours(dec!(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAllocation")]
pub struct AllocationSpec {
    kind: AllocationKind,
    value: Decimal,
}

impl AllocationSpec {
    /// Creates a validated allocation.
    ///
    /// # Errors
    ///
    /// Returns `WorkforceError::InvalidAllocationValue` if `value <= 0` or
    /// above [`MAX_PERCENTAGE`] / [`MAX_MONTHLY_HOURS`].
    pub fn new(kind: AllocationKind, value: Decimal) -> WorkforceResult<Self> {
        if value <= Decimal::ZERO {
            return Err(WorkforceError::invalid_allocation_value(
                value,
                "allocation value must be > 0",
            ));
        }
        let max = match kind {
            AllocationKind::Percentage => MAX_PERCENTAGE,
            AllocationKind::MonthlyHours => MAX_MONTHLY_HOURS,
        };
        if value > max {
            return Err(WorkforceError::invalid_allocation_value(
                value,
                format!("{kind} allocation must be at most {max}"),
            ));
        }
        Ok(Self { kind, value })
    }

    /// Parses a wire tag and validates the value in one step.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAllocationKind` for an unrecognized tag and
    /// `InvalidAllocationValue` for a non-positive value.
    pub fn parse(kind: &str, value: Decimal) -> WorkforceResult<Self> {
        Self::new(kind.parse()?, value)
    }

    /// A percentage-of-capacity allocation.
    ///
    /// # Errors
    ///
    /// Returns `WorkforceError::InvalidAllocationValue` if `value <= 0`.
    pub fn percentage(value: Decimal) -> WorkforceResult<Self> {
        Self::new(AllocationKind::Percentage, value)
    }

    /// A monthly-hours-budget allocation.
    ///
    /// # Errors
    ///
    /// Returns `WorkforceError::InvalidAllocationValue` if `value <= 0`.
    pub fn monthly_hours(value: Decimal) -> WorkforceResult<Self> {
        Self::new(AllocationKind::MonthlyHours, value)
    }

    /// The allocation model.
    #[must_use]
    pub fn kind(&self) -> AllocationKind {
        self.kind
    }

    /// Percent or hours, depending on [`kind`](Self::kind).
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl fmt::Display for AllocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AllocationKind::Percentage => write!(f, "{}%", self.value.normalize()),
            AllocationKind::MonthlyHours => write!(f, "{}h/month", self.value.normalize()),
        }
    }
}

#[derive(Deserialize)]
struct RawAllocation {
    kind: AllocationKind,
    value: Decimal,
}

impl TryFrom<RawAllocation> for AllocationSpec {
    type Error = WorkforceError;

    fn try_from(raw: RawAllocation) -> Result<Self, Self::Error> {
        Self::new(raw.kind, raw.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_parsing_is_closed() {
        assert_eq!(
            "percentage".parse::<AllocationKind>().unwrap(),
            AllocationKind::Percentage
        );
        assert_eq!(
            "monthly_hours".parse::<AllocationKind>().unwrap(),
            AllocationKind::MonthlyHours
        );
        // No silent fallthrough to monthly hours
        assert!(matches!(
            "Percentage".parse::<AllocationKind>(),
            Err(WorkforceError::UnknownAllocationKind { .. })
        ));
        assert!("hours".parse::<AllocationKind>().is_err());
        assert!("".parse::<AllocationKind>().is_err());
    }

    #[test]
    fn test_value_must_be_positive() {
        assert!(AllocationSpec::percentage(dec!(0.01)).is_ok());
        assert!(matches!(
            AllocationSpec::percentage(dec!(0)),
            Err(WorkforceError::InvalidAllocationValue { .. })
        ));
        assert!(AllocationSpec::monthly_hours(dec!(-10)).is_err());
    }

    #[test]
    fn test_value_is_bounded() {
        assert!(AllocationSpec::percentage(MAX_PERCENTAGE).is_ok());
        assert!(AllocationSpec::monthly_hours(MAX_MONTHLY_HOURS).is_ok());
        assert!(matches!(
            AllocationSpec::percentage(Decimal::MAX),
            Err(WorkforceError::InvalidAllocationValue { .. })
        ));
        assert!(AllocationSpec::monthly_hours(dec!(10000.5)).is_err());
        assert!(serde_json::from_str::<AllocationSpec>(
            r#"{"kind":"monthly_hours","value":1e20}"#
        )
        .is_err());
    }

    #[test]
    fn test_parse_combines_checks() {
        let spec = AllocationSpec::parse("monthly_hours", dec!(30)).unwrap();
        assert_eq!(spec.kind(), AllocationKind::MonthlyHours);
        assert_eq!(spec.value(), dec!(30));
        assert!(AllocationSpec::parse("days", dec!(30)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(AllocationSpec::percentage(dec!(50.00)).unwrap().to_string(), "50%");
        assert_eq!(
            AllocationSpec::monthly_hours(dec!(30)).unwrap().to_string(),
            "30h/month"
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let spec: AllocationSpec =
            serde_json::from_str(r#"{"kind":"percentage","value":50}"#).unwrap();
        assert_eq!(spec, AllocationSpec::percentage(dec!(50)).unwrap());

        assert!(serde_json::from_str::<AllocationSpec>(r#"{"kind":"percentage","value":0}"#).is_err());
        assert!(serde_json::from_str::<AllocationSpec>(r#"{"kind":"days","value":5}"#).is_err());
    }
}
