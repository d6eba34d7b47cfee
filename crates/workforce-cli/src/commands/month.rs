//! Month command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use workforce_core::calendars::Calendar;
use workforce_core::types::{Holiday, MonthKey};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_info, print_json_value, print_output, KeyValue};

/// Arguments for the month command.
#[derive(Args, Debug)]
pub struct MonthArgs {
    /// Month (YYYY-MM)
    pub month: MonthKey,
}

#[derive(Serialize)]
struct MonthReport {
    month: MonthKey,
    calendar_days: u32,
    working_days: u32,
    hours_per_day: Decimal,
    available_hours: Decimal,
    holidays: Vec<Holiday>,
}

/// Execute the month command.
pub fn execute(args: MonthArgs, ctx: &Context) -> Result<()> {
    let calculator = ctx.calculator()?;
    let month = args.month;

    let report = MonthReport {
        month,
        calendar_days: month.days(),
        working_days: calculator.working_days(month),
        hours_per_day: calculator.config().hours_per_day,
        available_hours: calculator.available_hours(month),
        holidays: calculator.calendar().holidays_between(&month.range()),
    };

    match ctx.format {
        OutputFormat::Json => print_json_value(&report)?,
        OutputFormat::Minimal => println!("{}", report.working_days),
        OutputFormat::Table | OutputFormat::Csv => {
            let precision = calculator.config().hours_precision;
            let rows = vec![
                KeyValue::new("Calendar days", report.calendar_days.to_string()),
                KeyValue::new("Working days", report.working_days.to_string()),
                KeyValue::from_decimal("Hours per day", report.hours_per_day, precision),
                KeyValue::from_decimal("Available hours", report.available_hours, precision),
            ];
            if ctx.format == OutputFormat::Table {
                print_header(&format!("Month {month}"));
            }
            print_output(&rows, ctx.format)?;

            if ctx.format == OutputFormat::Table {
                for h in &report.holidays {
                    print_info(&format!("{} ({}): {}", h.date, h.date.weekday(), h.name));
                }
            }
        }
    }

    Ok(())
}
