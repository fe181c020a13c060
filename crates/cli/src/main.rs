//! Lull CLI - lull command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

mod cmd;
mod system_config;
mod util;

/// Lull - debounced input and persistent client-side state
#[derive(Parser)]
#[command(name = "lull")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database directory (overrides storage.data_dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Echo stdin lines once input has been quiet for the delay
    Debounce {
        /// Quiet period in milliseconds (default: debounce.delay_ms)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Emit the pending line immediately at end of input
        #[arg(long)]
        flush_on_eof: bool,
    },
    /// Read and write JSON values in local storage
    #[command(subcommand)]
    Storage(StorageCommands),
    /// Read and write cookies
    #[command(subcommand)]
    Cookie(CookieCommands),
    /// View and edit configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum StorageCommands {
    /// Store a value (parsed as JSON, otherwise stored as a string)
    Set { key: String, value: String },
    /// Print a stored value as JSON
    Get { key: String },
    /// Remove a value
    Remove { key: String },
    /// Print whether a key exists
    Exists { key: String },
    /// Remove every value
    Clear,
    /// List stored keys
    Keys,
    /// Print the number of stored values
    Size,
}

#[derive(Subcommand)]
enum CookieCommands {
    /// Set a cookie
    Set {
        name: String,
        value: String,
        /// Lifetime in minutes (omit for a session cookie, negative expires now)
        #[arg(long, allow_hyphen_values = true)]
        expires_minutes: Option<i64>,
        /// Path attribute (default: cookie.default_path)
        #[arg(long)]
        path: Option<String>,
        /// Domain attribute
        #[arg(long)]
        domain: Option<String>,
    },
    /// Print a cookie's value
    Get { name: String },
    /// Remove a cookie
    Remove {
        name: String,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        domain: Option<String>,
    },
    /// Print whether a cookie exists
    Exists { name: String },
    /// Print live cookies as a request header
    Header,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show every configuration value
    List,
    /// Print one value
    Get { key: String },
    /// Change one value
    Set { key: String, value: String },
    /// Print the config file location
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },
    /// Print an annotated example config
    Example,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let data_dir = cli.data_dir;

    match cli.command {
        Commands::Debounce { delay_ms, flush_on_eof } => {
            cmd::debounce::run(delay_ms, flush_on_eof).await
        }
        Commands::Storage(storage_cmd) => {
            let storage = cmd::storage::open(data_dir)?;
            match storage_cmd {
                StorageCommands::Set { key, value } => cmd::storage::run_set(&storage, &key, &value),
                StorageCommands::Get { key } => cmd::storage::run_get(&storage, &key),
                StorageCommands::Remove { key } => cmd::storage::run_remove(&storage, &key),
                StorageCommands::Exists { key } => cmd::storage::run_exists(&storage, &key),
                StorageCommands::Clear => cmd::storage::run_clear(&storage),
                StorageCommands::Keys => cmd::storage::run_keys(&storage),
                StorageCommands::Size => cmd::storage::run_size(&storage),
            }
        }
        Commands::Cookie(cookie_cmd) => {
            let cookies = cmd::cookie::open(data_dir)?;
            match cookie_cmd {
                CookieCommands::Set { name, value, expires_minutes, path, domain } => {
                    cmd::cookie::run_set(&cookies, &name, &value, expires_minutes, path, domain)
                }
                CookieCommands::Get { name } => cmd::cookie::run_get(&cookies, &name),
                CookieCommands::Remove { name, path, domain } => {
                    cmd::cookie::run_remove(&cookies, &name, path.as_deref(), domain.as_deref())
                }
                CookieCommands::Exists { name } => cmd::cookie::run_exists(&cookies, &name),
                CookieCommands::Header => cmd::cookie::run_header(&cookies),
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list(),
            ConfigCommands::Get { key } => cmd::config::run_get(&key),
            ConfigCommands::Set { key, value } => cmd::config::run_set(&key, &value),
            ConfigCommands::Path { create } => cmd::config::run_path(create),
            ConfigCommands::Example => cmd::config::run_example(),
        },
    }
}
