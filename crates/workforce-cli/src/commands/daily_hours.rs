//! Daily-hours command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use workforce_core::types::{AllocationKind, AllocationSpec, MonthKey};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_hours, print_json_value, print_output, KeyValue};

/// Arguments for the daily-hours command.
#[derive(Args, Debug)]
pub struct DailyHoursArgs {
    /// Allocation kind (percentage, monthly_hours)
    #[arg(short, long)]
    pub kind: AllocationKind,

    /// Percent of a working day, or hours per month
    #[arg(short = 'n', long)]
    pub value: Decimal,

    /// Month the rate applies to (YYYY-MM)
    #[arg(short, long)]
    pub month: MonthKey,
}

#[derive(Serialize)]
struct DailyHoursReport {
    month: MonthKey,
    allocation_type: AllocationKind,
    allocation_value: Decimal,
    working_days: u32,
    daily_hours: Decimal,
}

/// Execute the daily-hours command.
pub fn execute(args: DailyHoursArgs, ctx: &Context) -> Result<()> {
    let calculator = ctx.calculator()?;
    let spec = AllocationSpec::new(args.kind, args.value)?;
    let precision = calculator.config().daily_hours_precision;

    let report = DailyHoursReport {
        month: args.month,
        allocation_type: spec.kind(),
        allocation_value: spec.value(),
        working_days: calculator.working_days(args.month),
        daily_hours: calculator.daily_hours(&spec, args.month).round_dp(precision),
    };

    match ctx.format {
        OutputFormat::Json => print_json_value(&report)?,
        OutputFormat::Minimal => println!("{}", report.daily_hours),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Allocation", spec.to_string()),
                KeyValue::new("Month", args.month.to_string()),
                KeyValue::new("Working days", report.working_days.to_string()),
                KeyValue::new("Daily hours", format_hours(report.daily_hours, precision)),
            ];
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
