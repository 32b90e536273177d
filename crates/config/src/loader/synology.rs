//! Synology account discovery.
//!
//! Responsibilities:
//! - Resolve NAS accounts from one of three mutually exclusive tiers.
//! - Layer per-account values over global defaults over hardcoded defaults.
//!
//! Does NOT handle:
//! - Detecting duplicate account names (see diagnostics.rs).
//!
//! Invariants:
//! - Tiers are tried in order (named, legacy numbered, single host); the first
//!   non-empty tier wins and tiers are never merged.
//! - A missing name in a legacy slot is skipped without ending the scan.
//! - Per-account values override globals in both directions, including SSL.

use secrecy::SecretString;
use serde::Serialize;

use super::env::{
    env_key_segment, read_bool, read_host, read_port, read_slot_count, split_names,
    value_or_none,
};
use super::error::ConfigError;
use super::source::EnvSource;
use crate::constants::{
    DEFAULT_LEGACY_ACCOUNT_SLOTS, DEFAULT_PHOTO_LIBRARY_PATH, DEFAULT_SYNOLOGY_HOST,
    DEFAULT_SYNOLOGY_PORT, SINGLE_HOST_ACCOUNT_NAME,
};
use crate::types::SynologyAccountConfig;

/// Which discovery strategy produced the Synology accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SynologyTier {
    /// `SYNOLOGY_ACCOUNTS` plus `SYNOLOGY_{NAME}_*`.
    Named,
    /// `SYNOLOGY_ACCOUNT_{i}_*` slots.
    Legacy,
    /// A single `NAS` account from `SYNOLOGY_HOST`.
    SingleHost,
    /// No Synology configuration at all.
    Unconfigured,
}

/// Host, port, and SSL values shared by every account that doesn't override them.
struct GlobalDefaults {
    host: String,
    port: u16,
    use_ssl: bool,
}

impl GlobalDefaults {
    fn read(source: &dyn EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            host: read_host(source, "SYNOLOGY_HOST")?
                .unwrap_or_else(|| DEFAULT_SYNOLOGY_HOST.to_string()),
            port: read_port(source, "SYNOLOGY_PORT")?.unwrap_or(DEFAULT_SYNOLOGY_PORT),
            use_ssl: read_bool(source, "SYNOLOGY_SECURE")?.unwrap_or(false),
        })
    }
}

/// Variable names holding one account's fields.
struct AccountKeys {
    host: String,
    port: String,
    username: String,
    password: String,
    photo_path: String,
    use_ssl: String,
}

impl AccountKeys {
    /// Keys for a named account, preferring the verbatim name and falling back
    /// to the normalized upper-case form per field.
    fn named(source: &dyn EnvSource, name: &str) -> Self {
        let segment = env_key_segment(name);
        let key = |field: &str| {
            let verbatim = format!("SYNOLOGY_{name}_{field}");
            if segment == name || value_or_none(source, &verbatim).is_some() {
                return verbatim;
            }
            let normalized = format!("SYNOLOGY_{segment}_{field}");
            if value_or_none(source, &normalized).is_some() {
                normalized
            } else {
                verbatim
            }
        };
        Self {
            host: key("HOST"),
            port: key("PORT"),
            username: key("USERNAME"),
            password: key("PASSWORD"),
            photo_path: key("PHOTO_PATH"),
            use_ssl: key("SECURE"),
        }
    }

    fn legacy(index: usize) -> Self {
        let key = |field: &str| format!("SYNOLOGY_ACCOUNT_{index}_{field}");
        Self {
            host: key("HOST"),
            port: key("PORT"),
            username: key("USERNAME"),
            password: key("PASSWORD"),
            photo_path: key("PHOTO_PATH"),
            use_ssl: key("USE_SSL"),
        }
    }

    fn single_host() -> Self {
        Self {
            host: "SYNOLOGY_HOST".to_string(),
            port: "SYNOLOGY_PORT".to_string(),
            username: "SYNOLOGY_USERNAME".to_string(),
            password: "SYNOLOGY_PASSWORD".to_string(),
            photo_path: "SYNOLOGY_PHOTO_LIBRARY_PATH".to_string(),
            use_ssl: "SYNOLOGY_USE_SSL".to_string(),
        }
    }
}

fn build_account(
    source: &dyn EnvSource,
    name: String,
    keys: &AccountKeys,
    defaults: &GlobalDefaults,
) -> Result<SynologyAccountConfig, ConfigError> {
    Ok(SynologyAccountConfig {
        host: read_host(source, &keys.host)?.unwrap_or_else(|| defaults.host.clone()),
        port: read_port(source, &keys.port)?.unwrap_or(defaults.port),
        username: value_or_none(source, &keys.username).unwrap_or_default(),
        password: SecretString::new(
            value_or_none(source, &keys.password)
                .unwrap_or_default()
                .into(),
        ),
        photo_library_path: value_or_none(source, &keys.photo_path)
            .unwrap_or_else(|| DEFAULT_PHOTO_LIBRARY_PATH.to_string()),
        use_ssl: read_bool(source, &keys.use_ssl)?.unwrap_or(defaults.use_ssl),
        name,
    })
}

fn read_named_accounts(
    source: &dyn EnvSource,
    defaults: &GlobalDefaults,
) -> Result<Vec<SynologyAccountConfig>, ConfigError> {
    let names = value_or_none(source, "SYNOLOGY_ACCOUNTS")
        .map(|raw| split_names(&raw))
        .unwrap_or_default();

    names
        .into_iter()
        .map(|name| {
            let keys = AccountKeys::named(source, &name);
            build_account(source, name, &keys, defaults)
        })
        .collect()
}

fn read_legacy_accounts(
    source: &dyn EnvSource,
    defaults: &GlobalDefaults,
) -> Result<Vec<SynologyAccountConfig>, ConfigError> {
    let slots = read_slot_count(
        source,
        "SYNOLOGY_ACCOUNT_COUNT",
        DEFAULT_LEGACY_ACCOUNT_SLOTS,
    )?;

    let mut accounts = Vec::new();
    for index in 1..=slots {
        let Some(name) = value_or_none(source, &format!("SYNOLOGY_ACCOUNT_{index}_NAME")) else {
            continue;
        };
        accounts.push(build_account(
            source,
            name,
            &AccountKeys::legacy(index),
            defaults,
        )?);
    }
    Ok(accounts)
}

fn read_single_host_account(
    source: &dyn EnvSource,
) -> Result<Option<SynologyAccountConfig>, ConfigError> {
    let Some(host) = read_host(source, "SYNOLOGY_HOST")? else {
        return Ok(None);
    };
    let defaults = GlobalDefaults {
        host,
        port: DEFAULT_SYNOLOGY_PORT,
        use_ssl: false,
    };
    build_account(
        source,
        SINGLE_HOST_ACCOUNT_NAME.to_string(),
        &AccountKeys::single_host(),
        &defaults,
    )
    .map(Some)
}

/// Resolve Synology accounts from the first populated tier.
pub(crate) fn resolve_synology_accounts(
    source: &dyn EnvSource,
) -> Result<(SynologyTier, Vec<SynologyAccountConfig>), ConfigError> {
    let defaults = GlobalDefaults::read(source)?;

    let named = read_named_accounts(source, &defaults)?;
    if !named.is_empty() {
        return Ok((SynologyTier::Named, named));
    }

    let legacy = read_legacy_accounts(source, &defaults)?;
    if !legacy.is_empty() {
        return Ok((SynologyTier::Legacy, legacy));
    }

    if let Some(account) = read_single_host_account(source)? {
        return Ok((SynologyTier::SingleHost, vec![account]));
    }

    Ok((SynologyTier::Unconfigured, Vec::new()))
}
