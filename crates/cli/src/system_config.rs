//! System configuration file
//!
//! Loaded from `$LULL_CONFIG` when set, otherwise from
//! `<config dir>/lull/config.toml`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for the debounce delay
pub const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub debounce: DebounceConfig,
    pub storage: StorageConfig,
    pub cookie: CookieConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period before a debounced line is emitted (default: 300ms)
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 300 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database directory (default: `<data dir>/lull`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Path attribute used when `--path` is not given
    pub default_path: String,
    /// Mark written cookies secure
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            default_path: "/".to_string(),
            secure: false,
        }
    }
}

impl SystemConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.debounce.delay_ms > MAX_DELAY_MS {
            anyhow::bail!(
                "debounce.delay_ms must be between 0 and {} (got {})",
                MAX_DELAY_MS,
                self.debounce.delay_ms
            );
        }

        if !self.cookie.default_path.starts_with('/') {
            anyhow::bail!(
                "cookie.default_path must start with '/' (got '{}')",
                self.cookie.default_path
            );
        }

        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("storage.data_dir must not be empty");
            }
        }

        Ok(())
    }
}

/// Location of the config file
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("LULL_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("lull").join("config.toml"))
}

/// Load the config, falling back to defaults when no file exists
pub fn load() -> Result<SystemConfig> {
    match config_file_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(SystemConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<SystemConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: SystemConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Write the config file, creating its directory
pub fn save(config: &SystemConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    save_to(config, &path)
}

pub fn save_to(config: &SystemConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Write a default config file unless one exists
pub fn init_if_missing() -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save_to(&SystemConfig::default(), &path)?;
    }
    Ok(())
}

pub fn example_config() -> &'static str {
    r#"# lull configuration

[debounce]
# Quiet period before a debounced line is emitted (0-60000)
delay_ms = 300

[storage]
# Database directory (default: platform data dir + /lull)
# data_dir = "/home/me/.local/share/lull"

[cookie]
# Path attribute used when --path is not given
default_path = "/"
# Mark written cookies secure
secure = false
"#
}
