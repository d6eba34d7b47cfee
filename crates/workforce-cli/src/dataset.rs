//! Dataset loading.
//!
//! A dataset is a JSON or YAML document with `employees`, `projects` and
//! `assignments`. Assignment records use the flat wire shape
//! (`start_date`, `allocation_type`, ...) and are validated into a
//! [`Roster`] on load.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use workforce_allocation::{Assignment, Employee, Project, Roster};
use workforce_core::types::{AllocationSpec, Date, DateRange};

use crate::error::{CliError, CliResult};

#[derive(Debug, Deserialize)]
struct DatasetFile {
    employees: Vec<Employee>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    assignments: Vec<AssignmentRecord>,
}

#[derive(Debug, Deserialize)]
struct AssignmentRecord {
    id: u64,
    employee_id: u64,
    project_id: u64,
    start_date: Date,
    end_date: Date,
    allocation_type: String,
    allocation_value: Decimal,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    is_tentative: bool,
}

impl AssignmentRecord {
    fn into_assignment(self) -> CliResult<Assignment> {
        let spec = AllocationSpec::parse(&self.allocation_type, self.allocation_value)?;
        let mut assignment = Assignment::new(
            self.id,
            self.employee_id,
            self.project_id,
            DateRange::new(self.start_date, self.end_date),
            spec,
        )?
        .with_tentative(self.is_tentative);
        if let Some(note) = self.note {
            assignment = assignment.with_note(note);
        }
        Ok(assignment)
    }
}

enum Encoding {
    Json,
    Yaml,
}

impl Encoding {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Reads and validates a dataset file.
pub fn load(path: &Path) -> CliResult<Roster> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::dataset(path, e.to_string()))?;
    let roster = parse(&content, Encoding::of(path)).map_err(|e| match e {
        CliError::Dataset { reason, .. } => CliError::dataset(path, reason),
        other => other,
    })?;

    tracing::info!(
        path = %path.display(),
        employees = roster.employees().len(),
        projects = roster.projects().len(),
        assignments = roster.assignments().len(),
        "dataset loaded"
    );
    Ok(roster)
}

fn parse(content: &str, encoding: Encoding) -> CliResult<Roster> {
    let file: DatasetFile = match encoding {
        Encoding::Json => {
            serde_json::from_str(content).map_err(|e| CliError::dataset("", e.to_string()))?
        }
        Encoding::Yaml => {
            serde_yaml::from_str(content).map_err(|e| CliError::dataset("", e.to_string()))?
        }
    };

    let assignments = file
        .assignments
        .into_iter()
        .map(AssignmentRecord::into_assignment)
        .collect::<CliResult<Vec<_>>>()?;

    Ok(Roster::new(file.employees, file.projects, assignments)?)
}
