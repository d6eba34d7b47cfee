//! Benchmarks for the utilization hot path.
//!
//! Run with: cargo bench -p workforce-allocation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use std::hint::black_box;

use workforce_allocation::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn create_roster(employees: usize) -> Roster {
    let teams = Team::ALL;
    let staff: Vec<Employee> = (0..employees)
        .map(|i| {
            Employee::new(i as u64, format!("First{i}"), format!("Last{:04}", i % 997))
                .with_team(teams[i % teams.len()])
        })
        .collect();

    let mut assignments = Vec::with_capacity(employees * 3);
    for i in 0..employees {
        for j in 0..3u64 {
            let id = i as u64 * 3 + j;
            let start = d(2026, 1, 1).add_days((id * 37 % 200) as i64);
            let end = start.add_days(30 + (id * 11 % 150) as i64);
            let spec = if j == 2 {
                AllocationSpec::monthly_hours(Decimal::from(20 + id % 60)).unwrap()
            } else {
                AllocationSpec::percentage(Decimal::from(10 + id % 70)).unwrap()
            };
            assignments.push(
                Assignment::new(id, i as u64, j + 1, DateRange::new(start, end), spec).unwrap(),
            );
        }
    }

    let projects = vec![
        Project::new(1, "Projekt Alpha", "#3B82F6"),
        Project::new(2, "Projekt Beta", "#EF4444"),
        Project::new(3, "Projekt Gamma", "#10B981"),
    ];
    Roster::new(staff, projects, assignments).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_working_days(c: &mut Criterion) {
    let calendar = PolishCalendar::global();
    let year = DateRange::new(d(2026, 1, 1), d(2026, 12, 31));

    c.bench_function("working_day_count_year", |b| {
        b.iter(|| calendar.working_day_count(black_box(&year)))
    });

    c.bench_function("holidays_for_year", |b| {
        b.iter(|| calendar.holidays_for_year(black_box(2026)))
    });
}

fn bench_utilization(c: &mut Criterion) {
    let calc = AllocationCalculator::polish();
    let roster = create_roster(1);
    let assignments = roster.assignments();
    let month = MonthKey::new(2026, 3).unwrap();

    c.bench_function("utilization_single_employee", |b| {
        b.iter(|| calc.utilization(black_box(assignments), black_box(month)))
    });
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");
    let window = DateRange::new(d(2026, 1, 1), d(2026, 12, 31));
    let filter = TimelineFilter::new();

    for size in [10usize, 100, 500] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));

        let sequential = AllocationCalculator::new(
            PolishCalendar::global(),
            UtilizationConfig::sequential(),
        );
        group.bench_with_input(BenchmarkId::new("sequential", size), &roster, |b, r| {
            b.iter(|| sequential.timeline(black_box(r), &window, &filter))
        });

        let parallel = AllocationCalculator::new(
            PolishCalendar::global(),
            UtilizationConfig::new().with_threshold(50),
        );
        group.bench_with_input(BenchmarkId::new("configured", size), &roster, |b, r| {
            b.iter(|| parallel.timeline(black_box(r), &window, &filter))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_working_days, bench_utilization, bench_timeline);
criterion_main!(benches);
