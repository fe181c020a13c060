//! Cookie commands

use crate::system_config;
use crate::util;
use anyhow::Result;
use lull_storage::{cookie, CookieJar, CookieOptions, SledStore};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Cookie jar plus the configured defaults
pub struct Cookies {
    jar: CookieJar<SledStore>,
    default_path: String,
}

/// Open the cookie jar in the configured data directory
pub fn open(data_dir: Option<PathBuf>) -> Result<Cookies> {
    let config = system_config::load()?;
    let dir = util::resolve_data_dir(data_dir, &config)?;
    let jar = CookieJar::new(util::open_tree(&dir, "cookies")?).secure(config.cookie.secure);

    Ok(Cookies {
        jar,
        default_path: config.cookie.default_path,
    })
}

pub fn run_set(
    cookies: &Cookies,
    name: &str,
    value: &str,
    expires_minutes: Option<i64>,
    path: Option<String>,
    domain: Option<String>,
) -> Result<()> {
    if !cookie::is_valid_name(name) {
        anyhow::bail!("Invalid cookie name: '{}'", name);
    }

    let mut options = CookieOptions::new().path(path.unwrap_or_else(|| cookies.default_path.clone()));
    if let Some(minutes) = expires_minutes {
        options = options.expires_in_minutes(minutes);
    }
    if let Some(domain) = domain {
        options = options.domain(domain);
    }
    cookies.jar.set_cookie(name, value, &options);

    match cookies.jar.get(name) {
        Some(stored) => println!("{} {}", "✓".green(), stored.to_set_cookie_string()),
        None if expires_minutes.is_some_and(|m| m < 0) => {
            println!("{} Expired {}", "✓".green(), name.cyan())
        }
        None => anyhow::bail!("Failed to store cookie '{}' (see log output)", name),
    }
    Ok(())
}

pub fn run_get(cookies: &Cookies, name: &str) -> Result<()> {
    match cookies.jar.get_cookie(name) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => anyhow::bail!("No cookie named '{}'", name),
    }
}

pub fn run_remove(cookies: &Cookies, name: &str, path: Option<&str>, domain: Option<&str>) -> Result<()> {
    cookies.jar.remove_cookie(name, path, domain);
    println!("{} Removed {}", "✓".green(), name.cyan());
    Ok(())
}

pub fn run_exists(cookies: &Cookies, name: &str) -> Result<()> {
    println!("{}", cookies.jar.cookie_exists(name));
    Ok(())
}

pub fn run_header(cookies: &Cookies) -> Result<()> {
    println!("{}", cookies.jar.header());
    Ok(())
}
