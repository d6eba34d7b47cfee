//! Employees, projects and assignments.

use serde::{Deserialize, Serialize};
use std::fmt;
use workforce_core::types::{AllocationSpec, Date, DateRange};

use crate::error::{AllocationError, AllocationResult};

/// Team an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// Project management.
    #[serde(rename = "PM")]
    ProjectManagement,
    /// Quality assurance.
    #[serde(rename = "QA")]
    QualityAssurance,
    /// Frontend development.
    Frontend,
    /// Backend development.
    Backend,
    /// Mobile development.
    Mobile,
    /// UX/UI design.
    #[serde(rename = "UX_UI_Designer")]
    UxUiDesigner,
    /// Infrastructure and operations.
    DevOps,
    /// Business analysis.
    #[serde(rename = "BA")]
    BusinessAnalysis,
    /// Machine learning.
    #[serde(rename = "ML")]
    MachineLearning,
}

impl Team {
    /// All teams, in display order.
    pub const ALL: [Team; 9] = [
        Team::ProjectManagement,
        Team::QualityAssurance,
        Team::Frontend,
        Team::Backend,
        Team::Mobile,
        Team::UxUiDesigner,
        Team::DevOps,
        Team::BusinessAnalysis,
        Team::MachineLearning,
    ];

    /// The wire tag.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Team::ProjectManagement => "PM",
            Team::QualityAssurance => "QA",
            Team::Frontend => "Frontend",
            Team::Backend => "Backend",
            Team::Mobile => "Mobile",
            Team::UxUiDesigner => "UX_UI_Designer",
            Team::DevOps => "DevOps",
            Team::BusinessAnalysis => "BA",
            Team::MachineLearning => "ML",
        }
    }

    /// Looks a team up by its wire tag.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Team> {
        Team::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A person whose time is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: u64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Team, if assigned.
    #[serde(default)]
    pub team: Option<Team>,
}

impl Employee {
    /// Creates an employee without a team.
    pub fn new(id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            team: None,
        }
    }

    /// Sets the team.
    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    /// "Last First", the form used in listings.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Case-insensitive substring match on either name.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
    }
}

/// A project assignments point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Hex colour used by front ends, e.g. `#3B82F6`.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#000000".to_string()
}

impl Project {
    /// Creates a project.
    pub fn new(id: u64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A time-bounded allocation of one employee to one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier.
    pub id: u64,
    /// Allocated employee.
    pub employee_id: u64,
    /// Target project.
    pub project_id: u64,
    /// Inclusive period of the assignment.
    pub period: DateRange,
    /// How much of the employee's time it takes.
    pub allocation: AllocationSpec,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
    /// Planned but not yet confirmed.
    #[serde(default)]
    pub tentative: bool,
}

impl Assignment {
    /// Creates a confirmed assignment.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::InvalidAssignment` if the period ends
    /// before it starts.
    pub fn new(
        id: u64,
        employee_id: u64,
        project_id: u64,
        period: DateRange,
        allocation: AllocationSpec,
    ) -> AllocationResult<Self> {
        if period.is_empty() {
            return Err(AllocationError::invalid_assignment(
                id,
                format!("end date {} is before start date {}", period.end(), period.start()),
            ));
        }
        Ok(Self {
            id,
            employee_id,
            project_id,
            period,
            allocation,
            note: None,
            tentative: false,
        })
    }

    /// Attaches a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Marks the assignment as tentative.
    #[must_use]
    pub fn with_tentative(mut self, tentative: bool) -> Self {
        self.tentative = tentative;
        self
    }

    /// First day.
    #[must_use]
    pub fn start(&self) -> Date {
        self.period.start()
    }

    /// Last day.
    #[must_use]
    pub fn end(&self) -> Date {
        self.period.end()
    }
}

/// Anything that occupies an employee for a period at some allocation.
///
/// Lets the calculators work on full [`Assignment`] records as well as on
/// bare `(DateRange, AllocationSpec)` pairs.
pub trait Allocated {
    /// Inclusive period the allocation covers.
    fn period(&self) -> DateRange;

    /// The allocation itself.
    fn allocation(&self) -> AllocationSpec;

    /// Whether the allocation is only planned.
    fn is_tentative(&self) -> bool {
        false
    }
}

impl Allocated for Assignment {
    fn period(&self) -> DateRange {
        self.period
    }

    fn allocation(&self) -> AllocationSpec {
        self.allocation
    }

    fn is_tentative(&self) -> bool {
        self.tentative
    }
}

impl Allocated for (DateRange, AllocationSpec) {
    fn period(&self) -> DateRange {
        self.0
    }

    fn allocation(&self) -> AllocationSpec {
        self.1
    }
}

impl<T: Allocated + ?Sized> Allocated for &T {
    fn period(&self) -> DateRange {
        (**self).period()
    }

    fn allocation(&self) -> AllocationSpec {
        (**self).allocation()
    }

    fn is_tentative(&self) -> bool {
        (**self).is_tentative()
    }
}
