//! Integration tests for workforce-allocation.
//!
//! These tests run the calculators end to end over a realistic team.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use workforce_allocation::prelude::*;
use workforce_core::calendars::WeekendCalendar;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn month(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

fn assignment(
    id: u64,
    employee_id: u64,
    project_id: u64,
    start: Date,
    end: Date,
    spec: AllocationSpec,
) -> Assignment {
    Assignment::new(id, employee_id, project_id, DateRange::new(start, end), spec).unwrap()
}

fn pct(value: Decimal) -> AllocationSpec {
    AllocationSpec::percentage(value).unwrap()
}

fn hours(value: Decimal) -> AllocationSpec {
    AllocationSpec::monthly_hours(value).unwrap()
}

/// A small slice of a delivery team in the first half of 2026.
fn create_team_roster() -> Roster {
    let employees = vec![
        Employee::new(1, "Jan", "Kowalski").with_team(Team::Frontend),
        Employee::new(2, "Anna", "Nowak").with_team(Team::Frontend),
        Employee::new(3, "Piotr", "Wiśniewski").with_team(Team::Backend),
        Employee::new(4, "Katarzyna", "Lewandowska").with_team(Team::QualityAssurance),
        Employee::new(5, "Agnieszka", "Szymańska").with_team(Team::ProjectManagement),
    ];
    let projects = vec![
        Project::new(1, "Projekt Alpha", "#3B82F6"),
        Project::new(2, "Projekt Beta", "#EF4444"),
        Project::new(3, "Projekt Gamma", "#10B981"),
    ];
    let assignments = vec![
        // Jan Kowalski: two projects, overbooked March-May
        assignment(1, 1, 1, d(2026, 1, 1), d(2026, 6, 30), pct(dec!(80))),
        assignment(2, 1, 3, d(2026, 3, 1), d(2026, 5, 31), pct(dec!(50))),
        // Anna Nowak: full time from February
        assignment(3, 2, 1, d(2026, 2, 1), d(2026, 7, 31), pct(dec!(100))),
        // Piotr: mid-January start
        assignment(4, 3, 2, d(2026, 1, 15), d(2026, 4, 30), pct(dec!(75))),
        // Katarzyna: fixed monthly budget
        assignment(5, 4, 2, d(2026, 1, 1), d(2026, 6, 30), hours(dec!(40))),
        assignment(6, 4, 3, d(2026, 4, 1), d(2026, 6, 30), hours(dec!(60)))
            .with_tentative(true),
    ];
    Roster::new(employees, projects, assignments).unwrap()
}

fn utilization_of(calc: &AllocationCalculator<'_>, roster: &Roster, id: u64, m: MonthKey) -> UtilizationResult {
    let assignments: Vec<&Assignment> = roster.assignments_for(id).collect();
    calc.utilization(&assignments, m)
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn overbooked_employee_in_overlap_months_only() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();

    let feb = utilization_of(&calc, &roster, 1, month(2026, 2));
    assert_eq!(feb.percentage, dec!(80));
    assert_eq!(feb.load, LoadLevel::Normal);

    for m in [3, 4, 5] {
        let result = utilization_of(&calc, &roster, 1, month(2026, m));
        assert_eq!(result.percentage, dec!(130), "month {m}");
        assert!(result.is_overbooked);
    }

    let june = utilization_of(&calc, &roster, 1, month(2026, 6));
    assert!(!june.is_overbooked);
}

#[test]
fn partial_first_month() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();

    // 12 working days from Jan 15 at 6h
    let jan = utilization_of(&calc, &roster, 3, month(2026, 1));
    assert_eq!(jan.hours, dec!(72.0));
    assert_eq!(jan.available_hours, dec!(160.0));
    assert_eq!(jan.percentage, dec!(45.0));
}

#[test]
fn employee_without_assignments_in_month() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();

    let jan = utilization_of(&calc, &roster, 2, month(2026, 1));
    assert_eq!(jan, UtilizationResult::idle(dec!(160)));

    let pm = utilization_of(&calc, &roster, 5, month(2026, 3));
    assert_eq!(pm.percentage, Decimal::ZERO);
}

#[test]
fn monthly_budgets_fill_exactly() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();

    // 40h in February (160h available)
    let feb = utilization_of(&calc, &roster, 4, month(2026, 2));
    assert_eq!(feb.hours, dec!(40));
    assert_eq!(feb.percentage, dec!(25));

    // April adds the tentative 60h budget
    let apr = utilization_of(&calc, &roster, 4, month(2026, 4));
    assert_eq!(apr.hours, dec!(100));
}

#[test]
fn tentative_work_can_be_excluded() {
    let config = UtilizationConfig::new().with_include_tentative(false);
    let calc = AllocationCalculator::new(PolishCalendar::global(), config);
    let roster = create_team_roster();

    let apr = utilization_of(&calc, &roster, 4, month(2026, 4));
    assert_eq!(apr.hours, dec!(40));
}

#[test]
fn hours_by_month_covers_whole_assignment() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();
    let a = &roster.assignments()[3];

    let by_month = calc.hours_by_month(&a.period, &a.allocation);
    let keys: Vec<String> = by_month.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["2026-01", "2026-02", "2026-03", "2026-04"]);

    let independent: Decimal = [1, 2, 3, 4]
        .into_iter()
        .map(|m| calc.hours_in_month(&a.period, &a.allocation, month(2026, m)))
        .sum();
    assert_eq!(by_month.values().copied().sum::<Decimal>(), independent);
}

#[test]
fn weekend_only_calendar_gives_more_capacity() {
    let polish = AllocationCalculator::polish();
    let weekend = AllocationCalculator::new(&WeekendCalendar, UtilizationConfig::default());
    let jan = month(2026, 1);

    assert_eq!(polish.available_hours(jan), dec!(160));
    assert_eq!(weekend.available_hours(jan), dec!(176));
}

#[test]
fn full_timeline() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();
    let window = DateRange::new(d(2026, 1, 1), d(2026, 6, 30));

    let timeline = calc.timeline(&roster, &window, &TimelineFilter::new());

    assert_eq!(timeline.employees.len(), 5);
    assert_eq!(timeline.working_days_per_month.len(), 6);
    // Jan 1, Jan 6, Easter, Easter Monday, May 1, May 3, Pentecost, Corpus Christi
    assert_eq!(timeline.holidays.len(), 8);

    let names: Vec<&str> = timeline.employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Kowalski Jan",
            "Lewandowska Katarzyna",
            "Nowak Anna",
            "Szymańska Agnieszka",
            "Wiśniewski Piotr",
        ]
    );

    let overbooked_months: Vec<String> = timeline.employees[0]
        .utilization
        .iter()
        .filter(|(_, u)| u.is_overbooked)
        .map(|(m, _)| m.to_string())
        .collect();
    assert_eq!(overbooked_months, vec!["2026-03", "2026-04", "2026-05"]);
}

#[test]
fn timeline_filtered_by_team() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();
    let window = DateRange::new(d(2026, 3, 1), d(2026, 3, 31));
    let filter = TimelineFilter::new()
        .with_team(Team::Frontend)
        .with_team(Team::QualityAssurance);

    let timeline = calc.timeline(&roster, &window, &filter);
    let ids: Vec<u64> = timeline.employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 4, 2]);
}

#[test]
fn timeline_matches_direct_utilization() {
    let calc = AllocationCalculator::polish();
    let roster = create_team_roster();
    let window = DateRange::new(d(2026, 1, 10), d(2026, 5, 20));

    let timeline = calc.timeline(&roster, &window, &TimelineFilter::new());
    for row in &timeline.employees {
        for (m, result) in &row.utilization {
            assert_eq!(*result, utilization_of(&calc, &roster, row.id, *m), "{} {m}", row.name);
        }
    }
}
