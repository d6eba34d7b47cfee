//! Workforce CLI - working days, allocations and utilization from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Polish public holidays
//! workforce holidays 2026
//!
//! # Working days in a span
//! workforce workdays --start 2026-01-28 --end 2026-02-03
//!
//! # Hours a 50% allocation contributes to February
//! workforce hours --start 2026-01-15 --end 2026-02-15 --kind percentage --value 50 --month 2026-02
//!
//! # Utilization of everyone in a dataset
//! workforce utilization --data team.json --month 2026-03
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod dataset;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::Settings;
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workforce=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workforce=info"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // The config command must still run when the stored settings are broken
    let settings = match cli.command {
        Commands::Config(_) => Settings::load_or_default(cli.config.as_deref())?,
        _ => Settings::load(cli.config.as_deref())?,
    };
    let ctx = Context::new(&cli, settings);
    output::configure(cli.quiet, ctx.settings.use_colors);

    // Execute command
    match cli.command {
        Commands::Holidays(args) => commands::holidays::execute(args, &ctx)?,
        Commands::Workdays(args) => commands::workdays::execute(args, &ctx)?,
        Commands::Month(args) => commands::month::execute(args, &ctx)?,
        Commands::DailyHours(args) => commands::daily_hours::execute(args, &ctx)?,
        Commands::Hours(args) => commands::hours::execute(args, &ctx)?,
        Commands::Utilization(args) => commands::utilization::execute(args, &ctx)?,
        Commands::Timeline(args) => commands::timeline::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
