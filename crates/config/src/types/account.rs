//! Account types for Google sources and Synology destinations.
//!
//! Responsibilities:
//! - Define the label-only Google account and the Synology connection record.
//! - Serialize Synology passwords as a redaction marker.
//!
//! Invariants:
//! - Google accounts carry no credentials; photos arrive via Takeout exports.
//! - `SynologyAccountConfig::password` never appears in `Debug` or serialized output.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Marker written in place of a non-empty password.
pub(crate) const REDACTED: &str = "********";

/// Module for serializing SecretString as a redaction marker.
mod redacted_secret {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    use super::REDACTED;

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if secret.expose_secret().is_empty() {
            serializer.serialize_str("")
        } else {
            serializer.serialize_str(REDACTED)
        }
    }
}

/// A Google account whose Takeout exports feed the sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleAccountConfig {
    /// Label used to organize imports and to pair with a NAS account.
    pub name: String,
}

impl GoogleAccountConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Connection parameters for one Synology NAS account.
#[derive(Debug, Clone, Serialize)]
pub struct SynologyAccountConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(serialize_with = "redacted_secret::serialize")]
    pub password: SecretString,
    /// Share path of the photo library on the NAS (e.g. `/photo`).
    pub photo_library_path: String,
    pub use_ssl: bool,
}

impl SynologyAccountConfig {
    /// Whether both a username and a password are configured.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.expose_secret().is_empty()
    }

    /// Base URL of the DSM web API for this account.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal
            format!("{}://[{}]:{}", scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", scheme, self.host, self.port)
        }
    }
}
