//! Workdays command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use workforce_core::calendars::{Calendar, PolishCalendar};
use workforce_core::types::{Date, DateRange};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_json_value, print_output, KeyValue};

/// Arguments for the workdays command.
#[derive(Args, Debug)]
pub struct WorkdaysArgs {
    /// First day (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub start: Date,

    /// Last day (YYYY-MM-DD, inclusive)
    #[arg(short, long)]
    pub end: Date,

    /// List the working days instead of counting them
    #[arg(short, long)]
    pub list: bool,
}

#[derive(Serialize)]
struct WorkdaysReport {
    start: Date,
    end: Date,
    working_days: u32,
    holidays: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    dates: Option<Vec<Date>>,
}

/// Execute the workdays command.
pub fn execute(args: WorkdaysArgs, ctx: &Context) -> Result<()> {
    let calendar = PolishCalendar::global();
    let range = DateRange::new(args.start, args.end);

    let days = calendar.working_days(&range);
    let count = u32::try_from(days.len())?;
    let holidays = u32::try_from(
        calendar
            .holidays_between(&range)
            .iter()
            .filter(|h| h.date.is_weekday())
            .count(),
    )?;

    match ctx.format {
        OutputFormat::Json => {
            let report = WorkdaysReport {
                start: args.start,
                end: args.end,
                working_days: count,
                holidays,
                dates: args.list.then_some(days),
            };
            print_json_value(&report)?;
        }
        OutputFormat::Minimal => {
            if args.list {
                for day in &days {
                    println!("{day}");
                }
            } else {
                println!("{count}");
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if args.list {
                let rows: Vec<KeyValue> = days
                    .iter()
                    .map(|d| KeyValue::new(d.to_string(), d.weekday().to_string()))
                    .collect();
                print_output(&rows, ctx.format)?;
            } else {
                let rows = vec![
                    KeyValue::new("Working days", count.to_string()),
                    KeyValue::new("Weekday holidays", holidays.to_string()),
                    KeyValue::new("Calendar days", range.len_days().to_string()),
                ];
                if ctx.format == OutputFormat::Table {
                    print_header(&format!("Working days {range}"));
                }
                print_output(&rows, ctx.format)?;
            }
        }
    }

    Ok(())
}
