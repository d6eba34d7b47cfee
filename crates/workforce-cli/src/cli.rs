//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{
    ConfigArgs, DailyHoursArgs, HolidaysArgs, HoursArgs, MonthArgs, TimelineArgs,
    UtilizationArgs, WorkdaysArgs,
};

/// Workforce - Polish working-day calendar and utilization CLI
#[derive(Parser)]
#[command(name = "workforce")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format [default: from config, else table]
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the per-user one
    #[arg(long, env = "WORKFORCE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the Polish public holidays of a year
    Holidays(HolidaysArgs),

    /// Count working days between two dates
    Workdays(WorkdaysArgs),

    /// Show working days, capacity and holidays of a month
    Month(MonthArgs),

    /// Convert an allocation to hours per working day
    DailyHours(DailyHoursArgs),

    /// Hours an allocation contributes to a month
    Hours(HoursArgs),

    /// Monthly utilization of the employees in a dataset
    Utilization(UtilizationArgs),

    /// Per-employee, per-month utilization over a date window
    Timeline(TimelineArgs),

    /// Manage configurations
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
