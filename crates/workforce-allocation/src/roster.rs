//! A consistent set of employees, projects and assignments.

use serde::Serialize;
use std::collections::HashSet;

use crate::error::{AllocationError, AllocationResult};
use crate::types::{Assignment, Employee, Project};

/// Employees, projects and the assignments between them.
///
/// Construction checks that employee, project and assignment IDs are
/// unique and that every assignment has a non-empty period and points at a
/// known employee. Projects are informational: an assignment may name a
/// project that is not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    employees: Vec<Employee>,
    projects: Vec<Project>,
    assignments: Vec<Assignment>,
}

impl Roster {
    /// Creates a validated roster.
    ///
    /// # Errors
    ///
    /// - `AllocationError::InvalidAssignment` for an inverted period or a
    ///   duplicate assignment ID
    /// - `AllocationError::UnknownEmployee` for a dangling employee reference
    /// - `AllocationError::DuplicateId` for a repeated employee or project ID
    pub fn new(
        employees: Vec<Employee>,
        projects: Vec<Project>,
        assignments: Vec<Assignment>,
    ) -> AllocationResult<Self> {
        let mut employee_ids = HashSet::with_capacity(employees.len());
        if let Some(e) = employees.iter().find(|e| !employee_ids.insert(e.id)) {
            return Err(AllocationError::duplicate_id("employee", e.id));
        }
        let mut project_ids = HashSet::with_capacity(projects.len());
        if let Some(p) = projects.iter().find(|p| !project_ids.insert(p.id)) {
            return Err(AllocationError::duplicate_id("project", p.id));
        }

        let mut assignment_ids = HashSet::with_capacity(assignments.len());

        for a in &assignments {
            if a.period.is_empty() {
                return Err(AllocationError::invalid_assignment(
                    a.id,
                    format!("end date {} is before start date {}", a.end(), a.start()),
                ));
            }
            if !assignment_ids.insert(a.id) {
                return Err(AllocationError::invalid_assignment(a.id, "duplicate assignment id"));
            }
            if !employee_ids.contains(&a.employee_id) {
                return Err(AllocationError::unknown_employee(a.id, a.employee_id));
            }
        }

        Ok(Self {
            employees,
            projects,
            assignments,
        })
    }

    /// All employees, in input order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All projects, in input order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All assignments, in input order.
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Looks up an employee.
    #[must_use]
    pub fn employee(&self, id: u64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Looks up a project.
    #[must_use]
    pub fn project(&self, id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Assignments of one employee, in input order.
    pub fn assignments_for(&self, employee_id: u64) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments
            .iter()
            .filter(move |a| a.employee_id == employee_id)
    }
}
