//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` over an injectable `EnvSource`.
//! - Collect accounts, pairings, and run settings from the source.
//! - Build the final `Config`, applying defaults and auto-pairing.
//!
//! Does NOT handle:
//! - Parsing individual values (delegated to env.rs).
//! - Synology tier selection (delegated to synology.rs).
//! - Reporting suspicious configurations (see diagnostics.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods applied after `from_env()` take precedence over environment values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::{parse_percent, read_bool, split_names, value_or_none};
use super::error::ConfigError;
use super::pairing::{auto_pair, read_explicit_pairings};
use super::source::{EnvSource, ProcessEnv};
use super::synology::{SynologyTier, resolve_synology_accounts};
use crate::constants::{
    DEFAULT_DATABASE_PATH, DEFAULT_GOOGLE_ACCOUNTS, DEFAULT_LOG_LEVEL,
    DEFAULT_STORAGE_THRESHOLD_PERCENT, MAX_STORAGE_THRESHOLD_PERCENT,
};
use crate::types::{AccountPairing, Config, GoogleAccountConfig, SynologyAccountConfig};

/// Configuration loader that builds config from an environment source.
///
/// The lifetime ties the loader to a borrowed source; loaders over owned
/// sources such as [`ProcessEnv`] are `ConfigLoader<'static>`.
pub struct ConfigLoader<'a> {
    source: Box<dyn EnvSource + 'a>,
    synology_tier: SynologyTier,
    synology_accounts: Vec<SynologyAccountConfig>,
    google_accounts: Option<Vec<GoogleAccountConfig>>,
    explicit_pairings: Vec<AccountPairing>,
    storage_threshold_percent: Option<u8>,
    database_path: Option<PathBuf>,
    dry_run: Option<bool>,
    log_level: Option<String>,
}

impl Default for ConfigLoader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConfigLoader<'a> {
    /// Create a loader that reads the process environment.
    pub fn new() -> Self {
        Self::with_source(ProcessEnv)
    }

    /// Create a loader that reads from the given source instead of the process environment.
    pub fn with_source(source: impl EnvSource + 'a) -> Self {
        Self {
            source: Box::new(source),
            synology_tier: SynologyTier::Unconfigured,
            synology_accounts: Vec::new(),
            google_accounts: None,
            explicit_pairings: Vec::new(),
            storage_threshold_percent: None,
            database_path: None,
            dry_run: None,
            log_level: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing). Variables
    /// already present in the process environment are never overwritten.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read accounts, pairings, and run settings from the source.
    ///
    /// Values set through builder methods before this call are overwritten
    /// by any variable that is present.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        let source = &*self.source;

        let (tier, synology_accounts) = resolve_synology_accounts(source)?;
        let google_accounts = value_or_none(source, "GOOGLE_ACCOUNTS").map(|raw| {
            split_names(&raw)
                .into_iter()
                .map(GoogleAccountConfig::new)
                .collect()
        });
        let explicit_pairings = read_explicit_pairings(source)?;

        let storage_threshold_percent = value_or_none(source, "STORAGE_THRESHOLD_PERCENT")
            .map(|raw| parse_percent("STORAGE_THRESHOLD_PERCENT", &raw))
            .transpose()?;
        let database_path = value_or_none(source, "DATABASE_PATH").map(PathBuf::from);
        let dry_run = read_bool(source, "DRY_RUN")?;
        let log_level = value_or_none(source, "LOG_LEVEL");

        tracing::debug!(
            tier = ?tier,
            synology_accounts = synology_accounts.len(),
            explicit_pairings = explicit_pairings.len(),
            "Read configuration from environment"
        );

        self.synology_tier = tier;
        self.synology_accounts = synology_accounts;
        if google_accounts.is_some() {
            self.google_accounts = google_accounts;
        }
        self.explicit_pairings = explicit_pairings;
        if storage_threshold_percent.is_some() {
            self.storage_threshold_percent = storage_threshold_percent;
        }
        if database_path.is_some() {
            self.database_path = database_path;
        }
        if dry_run.is_some() {
            self.dry_run = dry_run;
        }
        if log_level.is_some() {
            self.log_level = log_level;
        }
        Ok(self)
    }

    /// Set dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: String) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the sync state database path.
    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = Some(path);
        self
    }

    /// Set the storage threshold percentage (validated in `build()`).
    pub fn with_storage_threshold_percent(mut self, percent: u8) -> Self {
        self.storage_threshold_percent = Some(percent);
        self
    }

    /// The Synology tier selected by the last `from_env()` call.
    pub fn synology_tier(&self) -> SynologyTier {
        self.synology_tier
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let storage_threshold_percent = self
            .storage_threshold_percent
            .unwrap_or(DEFAULT_STORAGE_THRESHOLD_PERCENT);
        if storage_threshold_percent > MAX_STORAGE_THRESHOLD_PERCENT {
            return Err(ConfigError::invalid(
                "storage_threshold_percent",
                format!(
                    "must be an integer between 0 and {} (got {})",
                    MAX_STORAGE_THRESHOLD_PERCENT, storage_threshold_percent
                ),
            ));
        }

        let google_accounts = self.google_accounts.unwrap_or_else(|| {
            split_names(DEFAULT_GOOGLE_ACCOUNTS)
                .into_iter()
                .map(GoogleAccountConfig::new)
                .collect()
        });

        let auto_paired = self.explicit_pairings.is_empty();
        let account_pairings = if auto_paired {
            auto_pair(&google_accounts, &self.synology_accounts)
        } else {
            self.explicit_pairings
        };

        tracing::debug!(
            google_accounts = google_accounts.len(),
            synology_accounts = self.synology_accounts.len(),
            pairings = account_pairings.len(),
            auto_paired,
            "Built configuration"
        );

        Ok(Config {
            google_accounts,
            synology_accounts: self.synology_accounts,
            account_pairings,
            storage_threshold_percent,
            database_path: self
                .database_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            dry_run: self.dry_run.unwrap_or(false),
            log_level: self
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

/// Load the configuration from the process environment.
///
/// Does not read `.env`; call [`ConfigLoader::load_dotenv`] first for that.
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new().from_env()?.build()
}

/// Load the configuration from an explicit source.
pub fn load_config_from<'a>(source: impl EnvSource + 'a) -> Result<Config, ConfigError> {
    ConfigLoader::with_source(source).from_env()?.build()
}
