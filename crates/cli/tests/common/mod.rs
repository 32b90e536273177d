//! Shared test utilities for photosync integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Strip every variable the loader reads so the host cannot leak config in.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Tests that exercise `.env` loading must remove `DOTENV_DISABLED` themselves.

use assert_cmd::Command;

/// Variable prefixes owned by the loader.
const LOADER_PREFIXES: &[&str] = &["SYNOLOGY_", "GOOGLE_", "PAIRING_"];

/// Standalone variables read by the loader or the logging setup.
const LOADER_VARS: &[&str] = &[
    "STORAGE_THRESHOLD_PERCENT",
    "DATABASE_PATH",
    "DRY_RUN",
    "LOG_LEVEL",
    "RUST_LOG",
];

/// Returns a hermetic `photosync` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Loader and logging variables are cleared to ensure no leakage from the host.
pub fn photosync_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("photosync");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for (key, _) in std::env::vars() {
        if LOADER_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
            cmd.env_remove(&key);
        }
    }
    for key in LOADER_VARS {
        cmd.env_remove(key);
    }

    cmd
}

/// Returns a hermetic command with a two-household named deployment.
///
/// `pete` and `becca` are auto-paired with NAS accounts of the same name.
#[allow(dead_code)]
pub fn household_cmd() -> Command {
    let mut cmd = photosync_cmd();
    cmd.env("GOOGLE_ACCOUNTS", "pete,becca")
        .env("SYNOLOGY_ACCOUNTS", "pete,becca")
        .env("SYNOLOGY_HOST", "nas.home.arpa")
        .env("SYNOLOGY_pete_USERNAME", "pete")
        .env("SYNOLOGY_pete_PASSWORD", "pete-secret")
        .env("SYNOLOGY_becca_USERNAME", "becca")
        .env("SYNOLOGY_becca_PASSWORD", "becca-secret")
        .env("SYNOLOGY_becca_PORT", "5001");
    cmd
}
