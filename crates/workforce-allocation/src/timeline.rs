//! Multi-employee, multi-month utilization view over a date window.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use workforce_core::calendars::Calendar;
use workforce_core::types::{AllocationKind, Date, DateRange, Holiday, MonthKey};

use crate::calculator::AllocationCalculator;
use crate::parallel::maybe_parallel_map;
use crate::roster::Roster;
use crate::types::{Assignment, Employee, Team};
use crate::utilization::UtilizationResult;

/// Selects which employees appear in a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineFilter {
    /// Keep only these teams; empty keeps everyone.
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Case-insensitive substring of the first or last name.
    #[serde(default)]
    pub search: Option<String>,
}

impl TimelineFilter {
    /// A filter that keeps everyone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a team to the allowed set.
    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    /// Sets the name search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Whether `employee` passes the filter.
    #[must_use]
    pub fn accepts(&self, employee: &Employee) -> bool {
        let team_ok = self.teams.is_empty()
            || employee.team.is_some_and(|team| self.teams.contains(&team));
        let search_ok = self.search.as_deref().map_or(true, |s| employee.matches(s));
        team_ok && search_ok
    }
}

/// One assignment as shown on a timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineAssignment {
    /// Assignment ID.
    pub id: u64,
    /// Project ID.
    pub project_id: u64,
    /// Project name, empty if the project is not in the roster.
    pub project_name: String,
    /// Project colour, `#000000` if the project is not in the roster.
    pub project_color: String,
    /// First day.
    pub start_date: Date,
    /// Last day.
    pub end_date: Date,
    /// Allocation model.
    pub allocation_type: AllocationKind,
    /// Percent or monthly hours.
    pub allocation_value: Decimal,
    /// Free-form note.
    pub note: Option<String>,
    /// Planned but not confirmed.
    pub is_tentative: bool,
    /// Daily hours in the first month visible in the window.
    pub daily_hours: Decimal,
}

/// One employee's row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeTimeline {
    /// Employee ID.
    pub id: u64,
    /// "Last First".
    pub name: String,
    /// Team, if any.
    pub team: Option<Team>,
    /// Assignments overlapping the window, by start date.
    pub assignments: Vec<TimelineAssignment>,
    /// Utilization for every month the window touches.
    pub utilization: BTreeMap<MonthKey, UtilizationResult>,
}

/// Utilization of a set of employees over a date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// The requested window.
    pub window: DateRange,
    /// Rows, ordered by last then first name.
    pub employees: Vec<EmployeeTimeline>,
    /// Holidays inside the window.
    pub holidays: Vec<Holiday>,
    /// Working days of every month the window touches.
    pub working_days_per_month: BTreeMap<MonthKey, u32>,
}

impl<C: Calendar + ?Sized> AllocationCalculator<'_, C> {
    /// Builds the timeline of `roster` over `window`.
    ///
    /// Months are every calendar month the window touches, whole, so the
    /// first and last months report full-month utilization. An inverted
    /// window yields rows with no assignments and no months.
    pub fn timeline(&self, roster: &Roster, window: &DateRange, filter: &TimelineFilter) -> Timeline {
        let months = MonthKey::spanning(window);

        let mut employees: Vec<&Employee> = roster
            .employees()
            .iter()
            .filter(|e| filter.accepts(e))
            .collect();
        employees.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });

        tracing::debug!(
            %window,
            employees = employees.len(),
            months = months.len(),
            "building timeline"
        );

        let rows = maybe_parallel_map(&employees, self.config(), |employee| {
            self.employee_row(roster, employee, window, &months)
        });

        Timeline {
            window: *window,
            employees: rows,
            holidays: self.calendar().holidays_between(window),
            working_days_per_month: months
                .iter()
                .map(|m| (*m, self.working_days(*m)))
                .collect(),
        }
    }

    fn employee_row(
        &self,
        roster: &Roster,
        employee: &Employee,
        window: &DateRange,
        months: &[MonthKey],
    ) -> EmployeeTimeline {
        let mut visible: Vec<&Assignment> = roster
            .assignments_for(employee.id)
            .filter(|a| a.period.overlaps(window))
            .collect();
        visible.sort_by_key(|a| (a.start(), a.id));

        let assignments = visible
            .iter()
            .map(|a| self.timeline_assignment(roster, a, window))
            .collect();

        let utilization = months
            .iter()
            .map(|m| (*m, self.utilization(&visible, *m)))
            .collect();

        EmployeeTimeline {
            id: employee.id,
            name: employee.display_name(),
            team: employee.team,
            assignments,
            utilization,
        }
    }

    fn timeline_assignment(
        &self,
        roster: &Roster,
        assignment: &Assignment,
        window: &DateRange,
    ) -> TimelineAssignment {
        let first_visible = MonthKey::of(assignment.start().max(window.start()));
        let daily_hours = self
            .daily_hours(&assignment.allocation, first_visible)
            .round_dp(self.config().daily_hours_precision);
        let project = roster.project(assignment.project_id);

        TimelineAssignment {
            id: assignment.id,
            project_id: assignment.project_id,
            project_name: project.map(|p| p.name.clone()).unwrap_or_default(),
            project_color: project.map_or_else(|| "#000000".to_string(), |p| p.color.clone()),
            start_date: assignment.start(),
            end_date: assignment.end(),
            allocation_type: assignment.allocation.kind(),
            allocation_value: assignment.allocation.value(),
            note: assignment.note.clone(),
            is_tentative: assignment.tentative,
            daily_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Project;
    use rust_decimal_macros::dec;
    use workforce_core::types::AllocationSpec;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    fn roster() -> Roster {
        let employees = vec![
            Employee::new(1, "Jan", "Kowalski").with_team(Team::Frontend),
            Employee::new(2, "Anna", "Nowak").with_team(Team::Frontend),
            Employee::new(3, "Piotr", "Wiśniewski").with_team(Team::Backend),
            Employee::new(4, "Adam", "Kowalski"),
        ];
        let projects = vec![
            Project::new(1, "Projekt Alpha", "#3B82F6"),
            Project::new(2, "Projekt Beta", "#EF4444"),
        ];
        let assignments = vec![
            Assignment::new(
                10,
                1,
                2,
                DateRange::new(d(2026, 3, 1), d(2026, 5, 31)),
                AllocationSpec::percentage(dec!(50)).unwrap(),
            )
            .unwrap(),
            Assignment::new(
                11,
                1,
                1,
                DateRange::new(d(2026, 1, 1), d(2026, 6, 30)),
                AllocationSpec::percentage(dec!(80)).unwrap(),
            )
            .unwrap(),
            Assignment::new(
                12,
                3,
                7,
                DateRange::new(d(2025, 11, 1), d(2026, 2, 28)),
                AllocationSpec::monthly_hours(dec!(30)).unwrap(),
            )
            .unwrap()
            .with_tentative(true),
        ];
        Roster::new(employees, projects, assignments).unwrap()
    }

    #[test]
    fn test_months_and_working_days() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 1, 20), d(2026, 3, 10));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());

        let months: Vec<String> = timeline
            .working_days_per_month
            .keys()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2026-01", "2026-02", "2026-03"]);
        assert_eq!(timeline.working_days_per_month[&month(2026, 1)], 20);
        assert_eq!(timeline.working_days_per_month[&month(2026, 2)], 20);
    }

    #[test]
    fn test_holidays_inside_window_only() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 1, 2), d(2026, 4, 5));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());
        let names: Vec<&str> = timeline.holidays.iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Trzech Króli", "Wielkanoc"]);
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 1, 1), d(2026, 1, 31));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());
        let names: Vec<&str> = timeline.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Kowalski Adam", "Kowalski Jan", "Nowak Anna", "Wiśniewski Piotr"]
        );
    }

    #[test]
    fn test_assignments_and_utilization() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 3, 1), d(2026, 4, 30));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());
        let jan = timeline.employees.iter().find(|e| e.id == 1).unwrap();

        let ids: Vec<u64> = jan.assignments.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![11, 10]);
        assert_eq!(jan.assignments[0].project_name, "Projekt Alpha");
        assert_eq!(jan.assignments[0].daily_hours, dec!(6.4));
        assert_eq!(jan.assignments[1].daily_hours, dec!(4));

        let march = &jan.utilization[&month(2026, 3)];
        assert_eq!(march.percentage, dec!(130));
        assert!(march.is_overbooked);
    }

    #[test]
    fn test_unknown_project_and_first_visible_month_rate() {
        let calc = AllocationCalculator::polish();
        // Assignment 12 starts in November; its rate is taken from February
        let window = DateRange::new(d(2026, 2, 1), d(2026, 2, 28));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());
        let piotr = timeline.employees.iter().find(|e| e.id == 3).unwrap();

        let row = &piotr.assignments[0];
        assert_eq!(row.project_name, "");
        assert_eq!(row.project_color, "#000000");
        assert!(row.is_tentative);
        assert_eq!(row.daily_hours, dec!(1.5));
        assert_eq!(piotr.utilization[&month(2026, 2)].hours, dec!(30));
    }

    #[test]
    fn test_filters() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 1, 1), d(2026, 1, 31));

        let backend = TimelineFilter::new().with_team(Team::Backend);
        let timeline = calc.timeline(&roster(), &window, &backend);
        assert_eq!(timeline.employees.len(), 1);
        assert_eq!(timeline.employees[0].id, 3);

        let search = TimelineFilter::new().with_search("kowal");
        let timeline = calc.timeline(&roster(), &window, &search);
        assert_eq!(timeline.employees.len(), 2);
    }

    #[test]
    fn test_inverted_window() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 3, 1), d(2026, 1, 1));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());
        assert!(timeline.working_days_per_month.is_empty());
        assert!(timeline.holidays.is_empty());
        assert!(timeline.employees.iter().all(|e| e.assignments.is_empty()));
    }

    #[test]
    fn test_json_keys_are_month_strings() {
        let calc = AllocationCalculator::polish();
        let window = DateRange::new(d(2026, 1, 1), d(2026, 1, 31));
        let timeline = calc.timeline(&roster(), &window, &TimelineFilter::new());
        let json = serde_json::to_value(&timeline).unwrap();
        assert_eq!(json["working_days_per_month"]["2026-01"], serde_json::json!(20));
        assert_eq!(json["holidays"][0]["name"], serde_json::json!("Nowy Rok"));
        assert_eq!(json["holidays"][0]["date"], serde_json::json!("2026-01-01"));
    }
}
