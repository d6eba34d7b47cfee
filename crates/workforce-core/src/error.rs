//! Error types for the Workforce Planner core.
//!
//! The engine itself is arithmetic over already-validated inputs, so the
//! taxonomy is small: everything here is raised at a parsing or
//! construction boundary, never in the middle of a calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type WorkforceResult<T> = Result<T, WorkforceError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkforceError {
    /// Invalid or unparseable calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Month outside 1-12, or a malformed `YYYY-MM` key.
    #[error("Invalid month: {value}")]
    InvalidMonth {
        /// The offending input.
        value: String,
    },

    /// Allocation tag other than `percentage` or `monthly_hours`.
    #[error("Unknown allocation kind '{value}': expected 'percentage' or 'monthly_hours'")]
    UnknownAllocationKind {
        /// The rejected tag.
        value: String,
    },

    /// Allocation value that is zero or negative.
    #[error("Invalid allocation value: {value} - {reason}")]
    InvalidAllocationValue {
        /// The rejected value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Calendar or holiday computation error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl WorkforceError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid month error.
    #[must_use]
    pub fn invalid_month(value: impl Into<String>) -> Self {
        Self::InvalidMonth {
            value: value.into(),
        }
    }

    /// Creates an unknown allocation kind error.
    #[must_use]
    pub fn unknown_allocation_kind(value: impl Into<String>) -> Self {
        Self::UnknownAllocationKind {
            value: value.into(),
        }
    }

    /// Creates an invalid allocation value error.
    #[must_use]
    pub fn invalid_allocation_value(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAllocationValue {
            value,
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}
