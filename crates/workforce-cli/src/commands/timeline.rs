//! Timeline command implementation.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use workforce_allocation::{Team, Timeline, TimelineFilter, UtilizationResult};
use workforce_core::types::{Date, DateRange, MonthKey};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::dataset;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_load, print_csv_records, print_dynamic_table, print_header, print_info,
    print_json_value,
};

/// Arguments for the timeline command.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Dataset file (JSON or YAML)
    #[arg(short, long, env = "WORKFORCE_DATA")]
    pub data: PathBuf,

    /// First day of the window (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Date,

    /// Last day of the window (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Date,

    /// Only show these teams (repeatable, e.g. --team Backend --team QA)
    #[arg(short, long = "team")]
    pub teams: Vec<String>,

    /// Case-insensitive name search
    #[arg(long)]
    pub search: Option<String>,
}

fn build_filter(args: &TimelineArgs) -> CliResult<TimelineFilter> {
    let mut filter = TimelineFilter::new();
    for code in &args.teams {
        let team = Team::from_code(code).ok_or_else(|| CliError::UnknownTeam(code.clone()))?;
        filter = filter.with_team(team);
    }
    if let Some(search) = &args.search {
        filter = filter.with_search(search.clone());
    }
    Ok(filter)
}

/// Execute the timeline command.
pub fn execute(args: TimelineArgs, ctx: &Context) -> Result<()> {
    let filter = build_filter(&args)?;
    let roster = dataset::load(&args.data)?;
    let calculator = ctx.calculator()?;

    let window = DateRange::new(args.start, args.end);
    let timeline = calculator.timeline(&roster, &window, &filter);

    match ctx.format {
        OutputFormat::Json => print_json_value(&timeline)?,
        OutputFormat::Csv => {
            let (header, rows) = percentage_grid(&timeline, |r| r.percentage.to_string());
            print_csv_records(&header, &rows)?;
        }
        OutputFormat::Minimal => {
            for row in &timeline.employees {
                let overbooked: Vec<String> = row
                    .utilization
                    .iter()
                    .filter(|(_, r)| r.is_overbooked)
                    .map(|(m, _)| m.to_string())
                    .collect();
                println!("{}\t{}\t{}", row.id, row.name, overbooked.join(","));
            }
        }
        OutputFormat::Table => {
            print_header(&format!("Timeline {window}"));
            let (header, rows) = percentage_grid(&timeline, format_load);
            print_dynamic_table(header, rows);

            let working_days: Vec<String> = timeline
                .working_days_per_month
                .iter()
                .map(|(m, days)| format!("{m}: {days}"))
                .collect();
            print_info(&format!("Working days: {}", working_days.join(", ")));
            for h in &timeline.holidays {
                print_info(&format!("{} {}", h.date, h.name));
            }
        }
    }

    Ok(())
}

/// One row per employee, one column per month.
fn percentage_grid<F>(timeline: &Timeline, cell: F) -> (Vec<String>, Vec<Vec<String>>)
where
    F: Fn(&UtilizationResult) -> String,
{
    let months: Vec<MonthKey> = timeline.working_days_per_month.keys().copied().collect();

    let mut header = vec!["Employee".to_string(), "Team".to_string()];
    header.extend(months.iter().map(MonthKey::to_string));

    let rows = timeline
        .employees
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.name.clone(),
                row.team.map(|t| t.code().to_string()).unwrap_or_default(),
            ];
            cells.extend(
                months
                    .iter()
                    .map(|m| row.utilization.get(m).map(&cell).unwrap_or_default()),
            );
            cells
        })
        .collect();

    (header, rows)
}
