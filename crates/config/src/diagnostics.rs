//! Non-fatal findings about a loaded configuration.
//!
//! Responsibilities:
//! - Surface duplicates, dangling pairings, and missing credentials that the
//!   loader accepts silently.
//!
//! Does NOT handle:
//! - Rejecting configurations; every finding here is a warning.
//!
//! Invariants:
//! - Findings are reported in a deterministic order: duplicate Google names,
//!   duplicate Synology names, pairing problems in pairing order, unpaired
//!   Google accounts, then Synology accounts missing credentials.
//! - Each duplicate name is reported once, however often it repeats.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::types::Config;

/// A suspicious but loadable configuration detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigWarning {
    DuplicateGoogleAccount { name: String },
    DuplicateSynologyAccount { name: String },
    UnknownPairingGoogleAccount { google: String },
    UnknownPairingSynologyAccount { google: String, synology: String },
    /// The Google account appears in more than one pairing; only the first is used.
    DuplicatePairing { google: String },
    UnpairedGoogleAccount { name: String },
    MissingCredentials { synology: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGoogleAccount { name } => {
                write!(f, "Google account '{name}' is listed more than once")
            }
            Self::DuplicateSynologyAccount { name } => write!(
                f,
                "Synology account '{name}' is defined more than once; the first definition wins"
            ),
            Self::UnknownPairingGoogleAccount { google } => {
                write!(f, "pairing references unknown Google account '{google}'")
            }
            Self::UnknownPairingSynologyAccount { google, synology } => write!(
                f,
                "pairing for Google account '{google}' references unknown Synology account '{synology}'"
            ),
            Self::DuplicatePairing { google } => write!(
                f,
                "Google account '{google}' is paired more than once; only the first pairing is used"
            ),
            Self::UnpairedGoogleAccount { name } => {
                write!(f, "Google account '{name}' has no Synology pairing")
            }
            Self::MissingCredentials { synology } => {
                write!(f, "Synology account '{synology}' has no username or password")
            }
        }
    }
}

/// Names that occur more than once, in order of their second occurrence.
fn duplicates<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for name in names {
        if !seen.insert(name) && reported.insert(name) {
            dups.push(name.to_string());
        }
    }
    dups
}

impl Config {
    /// Report suspicious details of this configuration.
    pub fn diagnostics(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        warnings.extend(
            duplicates(self.google_accounts.iter().map(|g| g.name.as_str()))
                .into_iter()
                .map(|name| ConfigWarning::DuplicateGoogleAccount { name }),
        );
        warnings.extend(
            duplicates(self.synology_accounts.iter().map(|s| s.name.as_str()))
                .into_iter()
                .map(|name| ConfigWarning::DuplicateSynologyAccount { name }),
        );

        let mut paired = HashSet::new();
        for pairing in &self.account_pairings {
            let google = pairing.google_account_name.as_str();
            if !paired.insert(google) {
                warnings.push(ConfigWarning::DuplicatePairing {
                    google: google.to_string(),
                });
                continue;
            }
            if self.google_account(google).is_none() {
                warnings.push(ConfigWarning::UnknownPairingGoogleAccount {
                    google: google.to_string(),
                });
            }
            if self
                .synology_account(&pairing.synology_account_name)
                .is_none()
            {
                warnings.push(ConfigWarning::UnknownPairingSynologyAccount {
                    google: google.to_string(),
                    synology: pairing.synology_account_name.clone(),
                });
            }
        }

        let mut reported_unpaired = HashSet::new();
        for google in &self.google_accounts {
            if !paired.contains(google.name.as_str()) && reported_unpaired.insert(&google.name) {
                warnings.push(ConfigWarning::UnpairedGoogleAccount {
                    name: google.name.clone(),
                });
            }
        }

        warnings.extend(
            self.synology_accounts
                .iter()
                .filter(|s| !s.has_credentials())
                .map(|s| ConfigWarning::MissingCredentials {
                    synology: s.name.clone(),
                }),
        );

        warnings
    }
}
