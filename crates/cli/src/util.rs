//! Shared utilities for CLI commands

use crate::system_config::SystemConfig;
use anyhow::{Context, Result};
use lull_storage::SledStore;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pick the database directory: `--data-dir`, then config, then platform default
pub fn resolve_data_dir(override_dir: Option<PathBuf>, config: &SystemConfig) -> Result<PathBuf> {
    if let Some(dir) = override_dir.or_else(|| config.storage.data_dir.clone()) {
        return Ok(dir);
    }
    dirs::data_dir()
        .map(|dir| dir.join("lull"))
        .context("Could not determine data directory (use --data-dir)")
}

/// Open tree `name` of the database in `data_dir`
pub fn open_tree(data_dir: &Path, name: &str) -> Result<SledStore> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let db = sled::open(data_dir.join("kv"))
        .with_context(|| format!("Failed to open database in {}", data_dir.display()))?;
    SledStore::with_db(&db, name).with_context(|| format!("Failed to open tree '{}'", name))
}

/// Parse `raw` as JSON, falling back to a JSON string
pub fn parse_json_or_string(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Format a delay for display ("300ms", "1.5s")
pub fn format_delay(delay: Duration) -> String {
    let ms = delay.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{}s", delay.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_or_string() {
        assert_eq!(parse_json_or_string("42"), Value::from(42));
        assert_eq!(parse_json_or_string("true"), Value::Bool(true));
        assert_eq!(parse_json_or_string("{\"a\":1}")["a"], Value::from(1));
        assert_eq!(parse_json_or_string("\"quoted\""), Value::from("quoted"));
        assert_eq!(parse_json_or_string("plain text"), Value::from("plain text"));
    }

    #[test]
    fn test_format_delay() {
        assert_eq!(format_delay(Duration::from_millis(0)), "0ms");
        assert_eq!(format_delay(Duration::from_millis(300)), "300ms");
        assert_eq!(format_delay(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_delay(Duration::from_secs(2)), "2s");
    }

    #[test]
    fn test_data_dir_precedence() {
        let mut config = SystemConfig::default();
        config.storage.data_dir = Some(PathBuf::from("/from/config"));

        let dir = resolve_data_dir(Some(PathBuf::from("/from/flag")), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));

        let dir = resolve_data_dir(None, &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }
}
