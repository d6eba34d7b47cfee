//! Hours command implementation.
//!
//! Hours an allocated period contributes to one month, or to every month it
//! touches when no month is given.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use workforce_core::types::{AllocationKind, AllocationSpec, Date, DateRange, MonthKey};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_hours, print_header, print_json_value, print_output, KeyValue};

/// Arguments for the hours command.
#[derive(Args, Debug)]
pub struct HoursArgs {
    /// First day of the assignment (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Date,

    /// Last day of the assignment (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Date,

    /// Allocation kind (percentage, monthly_hours)
    #[arg(short, long)]
    pub kind: AllocationKind,

    /// Percent of a working day, or hours per month
    #[arg(short = 'n', long)]
    pub value: Decimal,

    /// Single month to report (YYYY-MM); defaults to every month spanned
    #[arg(short, long)]
    pub month: Option<MonthKey>,
}

#[derive(Serialize)]
struct MonthHours {
    month: MonthKey,
    hours: Decimal,
}

/// Execute the hours command.
pub fn execute(args: HoursArgs, ctx: &Context) -> Result<()> {
    let calculator = ctx.calculator()?;
    let spec = AllocationSpec::new(args.kind, args.value)?;
    let period = DateRange::new(args.start, args.end);
    let precision = calculator.config().hours_precision;

    let rows: Vec<MonthHours> = match args.month {
        Some(month) => vec![MonthHours {
            month,
            hours: calculator.hours_in_month(&period, &spec, month),
        }],
        None => calculator
            .hours_by_month(&period, &spec)
            .into_iter()
            .map(|(month, hours)| MonthHours { month, hours })
            .collect(),
    };
    let total: Decimal = rows.iter().map(|r| r.hours).sum();

    match ctx.format {
        OutputFormat::Json => {
            let rounded: Vec<MonthHours> = rows
                .into_iter()
                .map(|r| MonthHours {
                    month: r.month,
                    hours: r.hours.round_dp(precision),
                })
                .collect();
            print_json_value(&serde_json::json!({
                "allocation_type": spec.kind(),
                "allocation_value": spec.value(),
                "start_date": args.start,
                "end_date": args.end,
                "months": rounded,
                "total_hours": total.round_dp(precision),
            }))?;
        }
        OutputFormat::Minimal => println!("{}", total.round_dp(precision)),
        OutputFormat::Table | OutputFormat::Csv => {
            let mut table: Vec<KeyValue> = rows
                .iter()
                .map(|r| KeyValue::new(r.month.to_string(), format_hours(r.hours, precision)))
                .collect();
            if table.len() > 1 {
                table.push(KeyValue::new("Total", format_hours(total, precision)));
            }
            if ctx.format == OutputFormat::Table {
                print_header(&format!("{spec} over {period}"));
            }
            print_output(&table, ctx.format)?;
        }
    }

    Ok(())
}
