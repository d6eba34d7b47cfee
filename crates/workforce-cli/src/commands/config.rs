//! Config command implementation.
//!
//! Manages the key/value settings file and turns it into typed settings.

use anyhow::Result;
use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use workforce_allocation::UtilizationConfig;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Length of a working day
    HoursPerDay,
    /// Overbooking threshold
    OverbookingThreshold,
    /// High-load threshold
    HighLoadThreshold,
    /// Whether tentative assignments count
    IncludeTentative,
    /// Whether to use colors
    UseColors,
}

impl ConfigKey {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Some(Self::DefaultFormat),
            "hours_per_day" | "hours" => Some(Self::HoursPerDay),
            "overbooking_threshold" | "overbooking" => Some(Self::OverbookingThreshold),
            "high_load_threshold" | "high_load" => Some(Self::HighLoadThreshold),
            "include_tentative" | "tentative" => Some(Self::IncludeTentative),
            "use_colors" | "colors" => Some(Self::UseColors),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::HoursPerDay => "hours_per_day",
            Self::OverbookingThreshold => "overbooking_threshold",
            Self::HighLoadThreshold => "high_load_threshold",
            Self::IncludeTentative => "include_tentative",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::HoursPerDay => "Hours in a standard working day (0-24]",
            Self::OverbookingThreshold => "Utilization percent above which an employee is overbooked",
            Self::HighLoadThreshold => "Utilization percent above which load is reported as high",
            Self::IncludeTentative => "Count tentative assignments (true, false)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::HoursPerDay => "8",
            Self::OverbookingThreshold => "100",
            Self::HighLoadThreshold => "80",
            Self::IncludeTentative => "true",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultFormat,
            Self::HoursPerDay,
            Self::OverbookingThreshold,
            Self::HighLoadThreshold,
            Self::IncludeTentative,
            Self::UseColors,
        ]
    }
}

/// Simple config storage.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl Config {
    fn load(path: &Path) -> CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    fn set(&mut self, key: String, value: String) {
        self.values.insert(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

}

/// Typed view of the configuration file.
#[derive(Debug, Clone)]
pub struct Settings {
    /// File the settings were read from.
    pub path: PathBuf,
    /// Format used when `--format` is absent.
    pub default_format: OutputFormat,
    /// Length of a working day.
    pub hours_per_day: Decimal,
    /// Overbooking threshold (percent).
    pub overbooking_threshold: Decimal,
    /// High-load threshold (percent).
    pub high_load_threshold: Decimal,
    /// Count tentative assignments.
    pub include_tentative: bool,
    /// Colour terminal output.
    pub use_colors: bool,
}

impl Settings {
    /// Reads settings from `path`, or from the per-user file when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = resolve_path(path)?;
        let config = Config::load(&path)?;
        Self::from_config(path, &config)
    }

    /// Like [`load`](Self::load), but an unreadable or invalid file yields
    /// the defaults with a warning, so the `config` command can repair it.
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        let path = resolve_path(path)?;
        match Config::load(&path).and_then(|config| Self::from_config(path.clone(), &config)) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                print_warning(&format!("{e}; using defaults"));
                Ok(Self::defaults(path))
            }
        }
    }

    fn defaults(path: PathBuf) -> Self {
        let engine = UtilizationConfig::default();
        Self {
            path,
            default_format: OutputFormat::default(),
            hours_per_day: engine.hours_per_day,
            overbooking_threshold: engine.overbooking_threshold,
            high_load_threshold: engine.high_load_threshold,
            include_tentative: engine.include_tentative,
            use_colors: true,
        }
    }

    fn from_config(path: PathBuf, config: &Config) -> CliResult<Self> {
        let setting = |key: ConfigKey| -> CliResult<&str> {
            let value = config.value(key);
            validate_config_value(key, value)?;
            Ok(value)
        };

        Ok(Self {
            default_format: parse_format(setting(ConfigKey::DefaultFormat)?)?,
            hours_per_day: parse_decimal(setting(ConfigKey::HoursPerDay)?)?,
            overbooking_threshold: parse_decimal(setting(ConfigKey::OverbookingThreshold)?)?,
            high_load_threshold: parse_decimal(setting(ConfigKey::HighLoadThreshold)?)?,
            include_tentative: parse_bool(setting(ConfigKey::IncludeTentative)?)?,
            use_colors: parse_bool(setting(ConfigKey::UseColors)?)?,
            path,
        })
    }

    /// Calculation settings for the allocation engine.
    pub fn utilization_config(&self) -> UtilizationConfig {
        UtilizationConfig::new()
            .with_hours_per_day(self.hours_per_day)
            .with_overbooking_threshold(self.overbooking_threshold)
            .with_high_load_threshold(self.high_load_threshold)
            .with_include_tentative(self.include_tentative)
    }
}

fn resolve_path(path: Option<&Path>) -> CliResult<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

/// Get the per-user config file path.
fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("workforce").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let path = ctx.settings.path.as_path();
    match args.command {
        ConfigCommand::Show => execute_show(path, ctx.format),
        ConfigCommand::Get(get_args) => execute_get(path, get_args, ctx.format),
        ConfigCommand::Set(set_args) => execute_set(path, set_args),
        ConfigCommand::List => execute_list(ctx.format),
        ConfigCommand::Reset(reset_args) => execute_reset(path, reset_args),
        ConfigCommand::Path => execute_path(path, ctx.format),
    }
}

fn lookup_key(name: &str) -> Result<ConfigKey> {
    ConfigKey::parse(name).ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", name))
}

/// Show current configuration.
fn execute_show(path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load(path)?;

    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), config.value(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.value(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(path: &Path, args: GetArgs, format: OutputFormat) -> Result<()> {
    let config = Config::load(path)?;
    let key = lookup_key(&args.key)?;
    let value = config.value(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(path: &Path, args: SetArgs) -> Result<()> {
    let key = lookup_key(&args.key)?;
    validate_config_value(key, &args.value)?;

    let mut config = Config::load(path)?;
    config.set(key.as_str().to_string(), args.value.clone());

    // Thresholds are checked together
    Settings::from_config(path.to_path_buf(), &config)?
        .utilization_config()
        .validate()?;

    config.save(path)?;
    tracing::debug!(key = key.as_str(), value = %args.value, path = %path.display(), "config updated");

    print_success(&format!("Set {} = {}", key.as_str(), args.value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| {
            KeyValue::new(
                key.as_str(),
                format!("{} (default: {})", key.description(), key.default_value()),
            )
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Available Configuration Keys");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(path: &Path, args: ResetArgs) -> Result<()> {
    if args.all {
        // Overwrite without reading; the old file may not parse
        Config::default().save(path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = lookup_key(&key_str)?;
        let mut config = Config::load(path)?;
        config.remove(key.as_str());
        config.save(path)?;
        print_success(&format!("Reset {} to default ({})", key.as_str(), key.default_value()));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path: &Path, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn parse_format(value: &str) -> CliResult<OutputFormat> {
    match value.to_lowercase().as_str() {
        "table" => Ok(OutputFormat::Table),
        "json" => Ok(OutputFormat::Json),
        "csv" => Ok(OutputFormat::Csv),
        "minimal" => Ok(OutputFormat::Minimal),
        _ => Err(CliError::Config(format!(
            "Invalid format: {value}. Use table, json, csv, or minimal."
        ))),
    }
}

fn parse_decimal(value: &str) -> CliResult<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|_| CliError::Config(format!("Invalid number: {value}")))
}

fn parse_bool(value: &str) -> CliResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CliError::Config(format!(
            "Invalid boolean: {value}. Use true or false."
        ))),
    }
}

/// Validate a configuration value.
fn validate_config_value(key: ConfigKey, value: &str) -> CliResult<()> {
    match key {
        ConfigKey::DefaultFormat => {
            parse_format(value)?;
        }
        ConfigKey::HoursPerDay => {
            let hours = parse_decimal(value)?;
            if hours <= Decimal::ZERO || hours > Decimal::from(24) {
                return Err(CliError::Config(format!(
                    "Invalid hours_per_day: {value}. Must be greater than 0 and at most 24."
                )));
            }
        }
        ConfigKey::OverbookingThreshold | ConfigKey::HighLoadThreshold => {
            if parse_decimal(value)? < Decimal::ZERO {
                return Err(CliError::Config(format!(
                    "Invalid threshold: {value}. Must not be negative."
                )));
            }
        }
        ConfigKey::IncludeTentative | ConfigKey::UseColors => {
            parse_bool(value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_key_aliases() {
        assert_eq!(ConfigKey::parse("hours"), Some(ConfigKey::HoursPerDay));
        assert_eq!(ConfigKey::parse("INCLUDE_TENTATIVE"), Some(ConfigKey::IncludeTentative));
        assert_eq!(ConfigKey::parse("currency"), None);
    }

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(Some(&dir.path().join("none.json"))).unwrap();
        assert_eq!(settings.default_format, OutputFormat::Table);
        assert_eq!(settings.hours_per_day, dec!(8));
        assert!(settings.include_tentative);
        assert_eq!(settings.utilization_config(), UtilizationConfig::default());
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hours_per_day": "7.5", "include_tentative": "no"}"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.hours_per_day, dec!(7.5));
        assert!(!settings.include_tentative);
    }

    #[test]
    fn test_bad_stored_value_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hours_per_day": "-1"}"#).unwrap();
        assert!(matches!(Settings::load(Some(&path)), Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hours_per_day": "abc"}"#).unwrap();

        assert!(Settings::load(Some(&path)).is_err());
        let settings = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(settings.path, path);
        assert_eq!(settings.hours_per_day, dec!(8));
        assert_eq!(settings.default_format, OutputFormat::Table);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_or_default(Some(&path)).is_ok());
    }

    #[test]
    fn test_validate_values() {
        assert!(validate_config_value(ConfigKey::DefaultFormat, "JSON").is_ok());
        assert!(validate_config_value(ConfigKey::DefaultFormat, "xml").is_err());
        assert!(validate_config_value(ConfigKey::HoursPerDay, "25").is_err());
        assert!(validate_config_value(ConfigKey::OverbookingThreshold, "-5").is_err());
        assert!(validate_config_value(ConfigKey::UseColors, "maybe").is_err());
    }
}
