//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Carry the run-setting overrides that outrank the environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photosync")]
#[command(about = "Inspect the photosync deployment configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  photosync show\n  photosync -o json accounts\n  photosync pairing alice\n  photosync check --strict\n  photosync --dry-run --log-level debug show\n"
)]
pub struct Cli {
    /// Force dry-run mode regardless of DRY_RUN
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log level or tracing filter (overrides LOG_LEVEL; RUST_LOG wins over both)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Path to the sync state database (overrides DATABASE_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub database_path: Option<PathBuf>,

    /// Storage usage percentage (0-100) at which syncing stops
    #[arg(long, global = true, value_name = "PERCENT")]
    pub storage_threshold: Option<u8>,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved configuration (passwords redacted)
    Show,

    /// List Google and Synology accounts with their pairings
    Accounts,

    /// Print the Synology account paired with a Google account
    Pairing {
        /// Google account name, matched exactly
        google_account: String,
    },

    /// Report suspicious configuration details
    Check {
        /// Exit with a validation error when any issue is found
        #[arg(long)]
        strict: bool,
    },
}
