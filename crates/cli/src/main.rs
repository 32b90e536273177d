//! photosync - inspect and validate the photo sync deployment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load the deployment configuration with CLI flags layered on top.
//! - Format and display results (table or JSON).
//!
//! Does NOT handle:
//! - Resolving accounts or pairings (see `crates/config`).
//! - Transferring photos.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values reach the loader.
//! - Tracing is installed BEFORE config loading so loader events reach stderr.
//! - Logs and errors go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use photosync_config::{ConfigLoader, env_var_or_none};
use photosync_config::constants::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so every later read sees its values
    if let Err(e) = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load environment")
    {
        eprintln!("{:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }

    let cli = Cli::parse();

    // Install logging before loading so the loader's own events are kept
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env_var_or_none("LOG_LEVEL"))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_tracing(&log_level);

    let ctx = match ConfigCommandContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    for warning in ctx.config.diagnostics() {
        tracing::warn!("{}", warning);
    }

    let exit_code = match run_command(cli, &ctx) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Install the stderr subscriber. `RUST_LOG` wins over `log_level`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
