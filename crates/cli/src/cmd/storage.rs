//! Local storage commands

use crate::system_config;
use crate::util;
use anyhow::Result;
use lull_storage::{LocalStorage, SledStore};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::PathBuf;

/// Open local storage in the configured data directory
pub fn open(data_dir: Option<PathBuf>) -> Result<LocalStorage<SledStore>> {
    let config = system_config::load()?;
    let dir = util::resolve_data_dir(data_dir, &config)?;
    Ok(LocalStorage::new(util::open_tree(&dir, "local")?))
}

pub fn run_set(storage: &LocalStorage<SledStore>, key: &str, value: &str) -> Result<()> {
    let value = util::parse_json_or_string(value);
    storage.set_item(key, &value);

    // The adapter swallows write failures; check it landed
    if storage.get_item::<Value>(key).as_ref() != Some(&value) {
        anyhow::bail!("Failed to store '{}' (see log output)", key);
    }

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    Ok(())
}

pub fn run_get(storage: &LocalStorage<SledStore>, key: &str) -> Result<()> {
    match storage.get_item::<Value>(key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => anyhow::bail!("No item stored under '{}'", key),
    }
}

pub fn run_remove(storage: &LocalStorage<SledStore>, key: &str) -> Result<()> {
    storage.remove_item(key);
    println!("{} Removed {}", "✓".green(), key.cyan());
    Ok(())
}

pub fn run_exists(storage: &LocalStorage<SledStore>, key: &str) -> Result<()> {
    println!("{}", storage.item_exists(key));
    Ok(())
}

pub fn run_clear(storage: &LocalStorage<SledStore>) -> Result<()> {
    let count = storage.size();
    storage.clear();
    println!("{} Cleared {} items", "✓".green(), count);
    Ok(())
}

pub fn run_keys(storage: &LocalStorage<SledStore>) -> Result<()> {
    for key in storage.keys() {
        println!("{}", key);
    }
    Ok(())
}

pub fn run_size(storage: &LocalStorage<SledStore>) -> Result<()> {
    println!("{}", storage.size());
    Ok(())
}
