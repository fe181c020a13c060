//! Configuration management command
//!
//! Provides CLI interface to view and edit system configuration.

use crate::system_config::{self, SystemConfig, MAX_DELAY_MS};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// List all configuration values
pub fn run_list() -> Result<()> {
    let config = system_config::load()?;
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "System Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[debounce]".yellow());
    println!(
        "  {} = {} {}",
        "delay_ms".cyan(),
        config.debounce.delay_ms,
        format!("({}ms)", config.debounce.delay_ms).dimmed()
    );

    println!("\n{}", "[storage]".yellow());
    println!(
        "  {} = {}",
        "data_dir".cyan(),
        match &config.storage.data_dir {
            Some(dir) => dir.display().to_string(),
            None => "(platform default)".dimmed().to_string(),
        }
    );

    println!("\n{}", "[cookie]".yellow());
    println!("  {} = {}", "default_path".cyan(), config.cookie.default_path);
    println!("  {} = {}", "secure".cyan(), config.cookie.secure);

    println!("\n{}", "Valid Ranges:".bold());
    println!("  delay_ms: 0-{}", MAX_DELAY_MS);
    println!("  default_path: must start with '/'");

    Ok(())
}

/// Get a single configuration value
pub fn run_get(key: &str) -> Result<()> {
    let config = system_config::load()?;
    println!("{}", get_value(&config, key)?);
    Ok(())
}

/// Set a configuration value
pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = system_config::load()?;
    set_value(&mut config, key, value)?;

    // Validate before saving
    config.validate().context("Invalid configuration value")?;

    system_config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    Ok(())
}

/// Show the config file path and optionally create it
pub fn run_path(create: bool) -> Result<()> {
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        system_config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    print!("{}", system_config::example_config());
    Ok(())
}

fn get_value(config: &SystemConfig, key: &str) -> Result<String> {
    let value = match key {
        "debounce.delay_ms" => config.debounce.delay_ms.to_string(),
        "storage.data_dir" => config
            .storage
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        "cookie.default_path" => config.cookie.default_path.clone(),
        "cookie.secure" => config.cookie.secure.to_string(),
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'lull config list' to see available keys.",
            key
        ),
    };
    Ok(value)
}

fn set_value(config: &mut SystemConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "debounce.delay_ms" => {
            let val: u64 = value.parse()
                .context("Invalid value: must be a non-negative integer")?;
            config.debounce.delay_ms = val;
        }
        "storage.data_dir" => {
            config.storage.data_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "cookie.default_path" => {
            config.cookie.default_path = value.to_string();
        }
        "cookie.secure" => {
            let val: bool = value.parse()
                .context("Invalid value: must be 'true' or 'false'")?;
            config.cookie.secure = val;
        }
        _ => anyhow::bail!(
            "Unknown config key: {}. Use 'lull config list' to see available keys.",
            key
        ),
    }
    Ok(())
}
