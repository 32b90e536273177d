//! Google-to-Synology pairing resolution.
//!
//! Invariants:
//! - A `PAIRING_{i}_*` slot counts only when both halves are set.
//! - Any explicit pairing suppresses auto-pairing entirely.
//! - Auto-pairing emits pairings in Google-account order.

use super::env::{read_slot_count, value_or_none};
use super::error::ConfigError;
use super::source::EnvSource;
use crate::constants::DEFAULT_PAIRING_SLOTS;
use crate::types::{AccountPairing, GoogleAccountConfig, SynologyAccountConfig};

/// Read the explicit `PAIRING_{i}_GOOGLE` / `PAIRING_{i}_SYNOLOGY` slots.
pub(crate) fn read_explicit_pairings(
    source: &dyn EnvSource,
) -> Result<Vec<AccountPairing>, ConfigError> {
    let slots = read_slot_count(source, "PAIRING_COUNT", DEFAULT_PAIRING_SLOTS)?;

    let mut pairings = Vec::new();
    for index in 1..=slots {
        let google = value_or_none(source, &format!("PAIRING_{index}_GOOGLE"));
        let synology = value_or_none(source, &format!("PAIRING_{index}_SYNOLOGY"));
        match (google, synology) {
            (Some(google), Some(synology)) => {
                pairings.push(AccountPairing::new(google, synology));
            }
            (Some(_), None) => {
                tracing::warn!(
                    slot = index,
                    "PAIRING_{}_GOOGLE is set without PAIRING_{}_SYNOLOGY; ignoring slot",
                    index,
                    index
                );
            }
            (None, Some(_)) => {
                tracing::warn!(
                    slot = index,
                    "PAIRING_{}_SYNOLOGY is set without PAIRING_{}_GOOGLE; ignoring slot",
                    index,
                    index
                );
            }
            (None, None) => {}
        }
    }
    Ok(pairings)
}

/// Pair every Google account with the Synology account of the same name.
pub(crate) fn auto_pair(
    google_accounts: &[GoogleAccountConfig],
    synology_accounts: &[SynologyAccountConfig],
) -> Vec<AccountPairing> {
    google_accounts
        .iter()
        .filter_map(|google| {
            synology_accounts
                .iter()
                .find(|s| s.name == google.name)
                .map(|s| AccountPairing::new(google.name.clone(), s.name.clone()))
        })
        .collect()
}
