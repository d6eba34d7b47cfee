//! Error types for allocation calculations.

use thiserror::Error;
use workforce_core::WorkforceError;

/// Result type for allocation operations.
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Errors that can occur while building or evaluating assignments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Error from the core date and calendar layer.
    #[error(transparent)]
    Core(#[from] WorkforceError),

    /// Assignment that cannot be evaluated.
    #[error("Invalid assignment {id}: {reason}")]
    InvalidAssignment {
        /// The assignment ID.
        id: u64,
        /// The reason the assignment is invalid.
        reason: String,
    },

    /// Assignment pointing at an employee that is not in the dataset.
    #[error("Assignment {assignment_id} references unknown employee {employee_id}")]
    UnknownEmployee {
        /// The referencing assignment.
        assignment_id: u64,
        /// The missing employee ID.
        employee_id: u64,
    },

    /// Two employees or two projects sharing an ID.
    #[error("Duplicate {entity} id {id}")]
    DuplicateId {
        /// `"employee"` or `"project"`.
        entity: &'static str,
        /// The repeated ID.
        id: u64,
    },

    /// Configuration value out of range.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl AllocationError {
    /// Creates an invalid assignment error.
    pub fn invalid_assignment(id: u64, reason: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            id,
            reason: reason.into(),
        }
    }

    /// Creates an unknown employee error.
    pub fn unknown_employee(assignment_id: u64, employee_id: u64) -> Self {
        Self::UnknownEmployee {
            assignment_id,
            employee_id,
        }
    }

    /// Creates a duplicate ID error.
    pub fn duplicate_id(entity: &'static str, id: u64) -> Self {
        Self::DuplicateId { entity, id }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AllocationError::invalid_assignment(7, "end date before start date");
        assert_eq!(
            err.to_string(),
            "Invalid assignment 7: end date before start date"
        );

        let err = AllocationError::unknown_employee(3, 42);
        assert!(err.to_string().contains("unknown employee 42"));
    }

    #[test]
    fn test_core_errors_pass_through() {
        let core = WorkforceError::invalid_month("2026-13");
        let err: AllocationError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
        assert_eq!(err, AllocationError::Core(core));
    }
}
