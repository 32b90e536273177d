//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Run the `ConfigLoader` chain with CLI flags layered over the environment.
//! - Keep the Synology tier alongside the built config for reporting.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before argument parsing).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - CLI flags are applied after `from_env()`, so they win over the environment.
//! - `--dry-run` can only force dry-run on; it never turns DRY_RUN off.

use anyhow::{Context, Result};
use photosync_config::{Config, ConfigLoader, SynologyTier};

use crate::args::Cli;

/// A built config plus how its Synology accounts were discovered.
pub(crate) struct ConfigCommandContext {
    pub(crate) config: Config,
    pub(crate) synology_tier: SynologyTier,
}

impl ConfigCommandContext {
    /// Load configuration for `cli` from the process environment.
    pub(crate) fn load(cli: &Cli) -> Result<Self> {
        Self::load_with(ConfigLoader::new(), cli)
    }

    /// Load configuration for `cli` through an existing loader.
    pub(crate) fn load_with(loader: ConfigLoader<'_>, cli: &Cli) -> Result<Self> {
        let mut loader = loader
            .from_env()
            .context("Failed to load configuration from environment")?;

        if cli.dry_run {
            loader = loader.with_dry_run(true);
        }
        if let Some(ref level) = cli.log_level {
            loader = loader.with_log_level(level.clone());
        }
        if let Some(ref path) = cli.database_path {
            loader = loader.with_database_path(path.clone());
        }
        if let Some(percent) = cli.storage_threshold {
            loader = loader.with_storage_threshold_percent(percent);
        }

        let synology_tier = loader.synology_tier();
        let config = loader.build().context("Failed to build configuration")?;

        Ok(Self {
            config,
            synology_tier,
        })
    }
}
