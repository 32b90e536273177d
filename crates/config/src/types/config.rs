use serde::Serialize;
use std::path::PathBuf;

use super::account::{GoogleAccountConfig, SynologyAccountConfig};
use super::pairing::AccountPairing;

/// Fully resolved deployment configuration.
///
/// Built once per process by `ConfigLoader` and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub google_accounts: Vec<GoogleAccountConfig>,
    pub synology_accounts: Vec<SynologyAccountConfig>,
    pub account_pairings: Vec<AccountPairing>,
    /// NAS usage percentage above which imports should stop.
    pub storage_threshold_percent: u8,
    pub database_path: PathBuf,
    pub dry_run: bool,
    pub log_level: String,
}

impl Config {
    /// Find a Google account by exact name.
    pub fn google_account(&self, name: &str) -> Option<&GoogleAccountConfig> {
        self.google_accounts.iter().find(|g| g.name == name)
    }

    /// Find a Synology account by exact name.
    pub fn synology_account(&self, name: &str) -> Option<&SynologyAccountConfig> {
        self.synology_accounts.iter().find(|s| s.name == name)
    }

    /// Find the first pairing whose source is `google_account_name`.
    pub fn pairing_for(&self, google_account_name: &str) -> Option<&AccountPairing> {
        self.account_pairings
            .iter()
            .find(|p| p.google_account_name == google_account_name)
    }

    /// Resolve the Synology account paired with a Google account.
    ///
    /// Returns `None` if the Google account has no pairing, or if the pairing
    /// names a Synology account that is not configured.
    pub fn paired_synology_account(
        &self,
        google_account_name: &str,
    ) -> Option<&SynologyAccountConfig> {
        let pairing = self.pairing_for(google_account_name)?;
        self.synology_account(&pairing.synology_account_name)
    }
}
