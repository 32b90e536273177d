use serde::Serialize;

/// Links one Google source account to one Synology destination by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountPairing {
    pub google_account_name: String,
    pub synology_account_name: String,
}

impl AccountPairing {
    pub fn new(google: impl Into<String>, synology: impl Into<String>) -> Self {
        Self {
            google_account_name: google.into(),
            synology_account_name: synology.into(),
        }
    }
}
