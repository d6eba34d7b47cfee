//! Output formatting utilities.

use colored::Colorize;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use workforce_allocation::{LoadLevel, UtilizationResult};

use crate::cli::OutputFormat;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Applies the global `--quiet` flag and the colour setting.
pub fn configure(quiet: bool, use_colors: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    if !use_colors {
        colored::control::set_override(false);
    }
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Formats and prints output based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a single JSON document.
pub fn print_json_value<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints a table whose columns are only known at runtime.
pub fn print_dynamic_table(header: Vec<String>, rows: Vec<Vec<String>>) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints raw CSV records.
pub fn print_csv_records(header: &[String], rows: &[Vec<String>]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Formats a utilization percentage, e.g. `130.0%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", value)
}

/// Formats hours, e.g. `48.0h`.
pub fn format_hours(value: Decimal, precision: u32) -> String {
    format!("{:.prec$}h", value, prec = precision as usize)
}

/// Colours a utilization figure by load level.
pub fn format_load(result: &UtilizationResult) -> String {
    let text = format_percent(result.percentage);
    match result.load {
        LoadLevel::Overbooked => text.red().bold().to_string(),
        LoadLevel::High => text.yellow().to_string(),
        LoadLevel::Normal => text,
    }
}

/// Status label for a load level.
pub fn format_status(load: LoadLevel) -> String {
    match load {
        LoadLevel::Overbooked => "Overbooked".red().bold().to_string(),
        LoadLevel::High => "High".yellow().to_string(),
        LoadLevel::Normal => "OK".green().to_string(),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), message);
    }
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue(), message);
    }
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a decimal value.
    pub fn from_decimal(key: impl Into<String>, value: Decimal, precision: u32) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.prec$}", value, prec = precision as usize),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    if !is_quiet() {
        println!("\n{}", title.bold().underline());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_number_formats() {
        assert_eq!(format_percent(dec!(130)), "130.0%");
        assert_eq!(format_percent(dec!(6.2)), "6.2%");
        assert_eq!(format_hours(dec!(1.5), 2), "1.50h");
        assert_eq!(KeyValue::from_decimal("x", dec!(4), 1).value, "4.0");
    }
}
