//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `config_context`).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - Every command reads the same already-built config.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, ctx: &ConfigCommandContext) -> Result<()> {
    match cli.command {
        Commands::Show => commands::show::run(&ctx.config, ctx.synology_tier, &cli.output),
        Commands::Accounts => commands::accounts::run(&ctx.config, &cli.output),
        Commands::Pairing { google_account } => {
            commands::pairing::run(&ctx.config, &google_account, &cli.output)
        }
        Commands::Check { strict } => commands::check::run(&ctx.config, strict, &cli.output),
    }
}
