//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;
use workforce_allocation::AllocationError;
use workforce_core::WorkforceError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Dataset file that cannot be read or understood.
    #[error("Invalid dataset {path}: {reason}")]
    Dataset {
        /// The dataset file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Employee ID not present in the dataset.
    #[error("Employee {0} not found in dataset")]
    EmployeeNotFound(u64),

    /// Team code outside the known set.
    #[error("Unknown team: {0}. Use PM, QA, Frontend, Backend, Mobile, UX_UI_Designer, DevOps, BA or ML.")]
    UnknownTeam(String),

    /// Date, month or calendar error.
    #[error(transparent)]
    Core(#[from] WorkforceError),

    /// Assignment or utilization error.
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Creates a dataset error.
    pub fn dataset(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Dataset {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
