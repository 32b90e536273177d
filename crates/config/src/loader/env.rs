//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read values from an `EnvSource` with empty/whitespace filtering.
//! - Parse and validate typed values (bools, ports, percentages, slot counts, hosts).
//! - Split comma-separated name lists.
//!
//! Does NOT handle:
//! - Tier selection for Synology accounts (see synology.rs).
//! - Pairing resolution (see pairing.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use std::net::{IpAddr, Ipv6Addr};

use super::error::ConfigError;
use super::source::EnvSource;
use crate::constants::{MAX_NUMBERED_SLOTS, MAX_STORAGE_THRESHOLD_PERCENT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

/// Same filtering as [`env_var_or_none`], against an arbitrary source.
pub(crate) fn value_or_none(source: &dyn EnvSource, key: &str) -> Option<String> {
    non_blank(source.get(key))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub(crate) fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(var, "must be true or false")),
    }
}

pub(crate) fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::invalid(
            var,
            "must be a port number between 1 and 65535",
        )),
        Ok(port) => Ok(port),
    }
}

pub(crate) fn parse_percent(var: &str, raw: &str) -> Result<u8, ConfigError> {
    let message = format!(
        "must be an integer between 0 and {}",
        MAX_STORAGE_THRESHOLD_PERCENT
    );
    let value = raw
        .parse::<u8>()
        .map_err(|_| ConfigError::invalid(var, message.clone()))?;
    if value > MAX_STORAGE_THRESHOLD_PERCENT {
        return Err(ConfigError::invalid(var, message));
    }
    Ok(value)
}

pub(crate) fn parse_slot_count(var: &str, raw: &str) -> Result<usize, ConfigError> {
    let value: usize = raw
        .parse()
        .map_err(|_| ConfigError::invalid(var, "must be a non-negative integer"))?;
    if value > MAX_NUMBERED_SLOTS {
        return Err(ConfigError::SlotCountTooLarge {
            var: var.to_string(),
            max: MAX_NUMBERED_SLOTS,
            got: value,
        });
    }
    Ok(value)
}

/// Validates a bare NAS host name or IP address.
///
/// Rejects values carrying a scheme, port, or path (e.g. `http://nas:5000`);
/// those belong in the dedicated port/SSL variables.
pub(crate) fn validate_host(var: &str, raw: &str) -> Result<String, ConfigError> {
    if is_ip_literal(raw) {
        return Ok(raw.to_string());
    }
    url::Host::parse(raw).map_err(|e| {
        ConfigError::invalid(
            var,
            format!("must be a host name or IP address without scheme or port (e.g. nas.local): {e}"),
        )
    })?;
    Ok(raw.to_string())
}

/// Bare IPv4/IPv6 address, including a scoped link-local IPv6 (`fe80::1%eth0`).
fn is_ip_literal(raw: &str) -> bool {
    if raw.parse::<IpAddr>().is_ok() {
        return true;
    }
    match raw.split_once('%') {
        Some((addr, zone)) => {
            !zone.is_empty()
                && zone
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && addr.parse::<Ipv6Addr>().is_ok()
        }
        None => false,
    }
}

/// Read an optional bool.
pub(crate) fn read_bool(source: &dyn EnvSource, key: &str) -> Result<Option<bool>, ConfigError> {
    value_or_none(source, key)
        .map(|raw| parse_bool(key, &raw))
        .transpose()
}

/// Read an optional port.
pub(crate) fn read_port(source: &dyn EnvSource, key: &str) -> Result<Option<u16>, ConfigError> {
    value_or_none(source, key)
        .map(|raw| parse_port(key, &raw))
        .transpose()
}

/// Read an optional host.
pub(crate) fn read_host(source: &dyn EnvSource, key: &str) -> Result<Option<String>, ConfigError> {
    value_or_none(source, key)
        .map(|raw| validate_host(key, &raw))
        .transpose()
}

/// Read a slot count, falling back to `default` when unset.
pub(crate) fn read_slot_count(
    source: &dyn EnvSource,
    key: &str,
    default: usize,
) -> Result<usize, ConfigError> {
    value_or_none(source, key)
        .map(|raw| parse_slot_count(key, &raw))
        .transpose()
        .map(|count| count.unwrap_or(default))
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub(crate) fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-case an account name into a form usable inside a variable name.
///
/// Every character outside `[A-Z0-9]` becomes `_`.
pub(crate) fn env_key_segment(name: &str) -> String {
    name.chars()
        .map(|c| {
            let upper = c.to_ascii_uppercase();
            if upper.is_ascii_uppercase() || upper.is_ascii_digit() {
                upper
            } else {
                '_'
            }
        })
        .collect()
}
