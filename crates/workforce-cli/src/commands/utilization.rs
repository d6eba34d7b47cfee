//! Utilization command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;
use workforce_allocation::{Assignment, Employee, LoadLevel, Team, UtilizationResult};
use workforce_core::types::MonthKey;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::dataset;
use crate::error::CliError;
use crate::output::{
    format_hours, format_load, format_status, print_csv, print_header, print_json_value,
    print_output,
};

/// Arguments for the utilization command.
#[derive(Args, Debug)]
pub struct UtilizationArgs {
    /// Dataset file (JSON or YAML)
    #[arg(short, long, env = "WORKFORCE_DATA")]
    pub data: PathBuf,

    /// Month (YYYY-MM)
    #[arg(short, long)]
    pub month: MonthKey,

    /// Report a single employee
    #[arg(short, long)]
    pub employee: Option<u64>,
}

#[derive(Debug, Serialize)]
struct UtilizationRecord {
    employee_id: u64,
    name: String,
    team: Option<Team>,
    month: MonthKey,
    hours: Decimal,
    available_hours: Decimal,
    percentage: Decimal,
    is_overbooked: bool,
    load: LoadLevel,
}

#[derive(Serialize, Tabled)]
struct UtilizationRow {
    #[tabled(rename = "Employee")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Utilization")]
    utilization: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Execute the utilization command.
pub fn execute(args: UtilizationArgs, ctx: &Context) -> Result<()> {
    let roster = dataset::load(&args.data)?;
    let calculator = ctx.calculator()?;

    let mut employees: Vec<&Employee> = match args.employee {
        Some(id) => vec![roster.employee(id).ok_or(CliError::EmployeeNotFound(id))?],
        None => roster.employees().iter().collect(),
    };
    employees.sort_by(|a, b| {
        (a.last_name.as_str(), a.first_name.as_str())
            .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
    });

    let results: Vec<(&Employee, UtilizationResult)> = employees
        .into_iter()
        .map(|employee| {
            let assignments: Vec<&Assignment> = roster.assignments_for(employee.id).collect();
            (employee, calculator.utilization(&assignments, args.month))
        })
        .collect();

    match ctx.format {
        OutputFormat::Json | OutputFormat::Csv => {
            let records: Vec<UtilizationRecord> = results
                .iter()
                .map(|(employee, result)| UtilizationRecord {
                    employee_id: employee.id,
                    name: employee.display_name(),
                    team: employee.team,
                    month: args.month,
                    hours: result.hours,
                    available_hours: result.available_hours,
                    percentage: result.percentage,
                    is_overbooked: result.is_overbooked,
                    load: result.load,
                })
                .collect();
            if ctx.format == OutputFormat::Json {
                print_json_value(&records)?;
            } else {
                print_csv(&records)?;
            }
        }
        OutputFormat::Minimal => {
            for (employee, result) in &results {
                println!("{}\t{}", employee.id, result.percentage);
            }
        }
        OutputFormat::Table => {
            let precision = calculator.config().hours_precision;
            let rows: Vec<UtilizationRow> = results
                .iter()
                .map(|(employee, result)| UtilizationRow {
                    name: employee.display_name(),
                    team: employee.team.map(|t| t.code().to_string()).unwrap_or_default(),
                    hours: format_hours(result.hours, precision),
                    available: format_hours(result.available_hours, precision),
                    utilization: format_load(result),
                    status: format_status(result.load),
                })
                .collect();
            print_header(&format!("Utilization {}", args.month));
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
