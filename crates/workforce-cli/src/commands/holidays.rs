//! Holidays command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use workforce_core::calendars::{Calendar, PolishCalendar};
use workforce_core::WorkforceError;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// First year of the Gregorian calendar the Easter rule applies to.
const FIRST_GREGORIAN_YEAR: i32 = 1583;

/// Arguments for the holidays command.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Calendar year
    pub year: i32,
}

#[derive(Debug, Serialize, Tabled)]
struct HolidayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Weekday")]
    weekday: String,
    #[tabled(rename = "Name")]
    name: &'static str,
}

/// Execute the holidays command.
pub fn execute(args: HolidaysArgs, ctx: &Context) -> Result<()> {
    if args.year < FIRST_GREGORIAN_YEAR {
        return Err(WorkforceError::calendar_error(format!(
            "year {} predates the Gregorian calendar ({FIRST_GREGORIAN_YEAR})",
            args.year
        ))
        .into());
    }

    let holidays = PolishCalendar::global().holidays_for_year(args.year);
    let rows: Vec<HolidayRow> = holidays
        .iter()
        .map(|h| HolidayRow {
            date: h.date.to_string(),
            weekday: h.date.weekday().to_string(),
            name: h.name,
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("Public holidays in Poland, {}", args.year));
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => {
            for h in &holidays {
                println!("{}", h.date);
            }
        }
        _ => print_output(&rows, ctx.format)?,
    }

    Ok(())
}
