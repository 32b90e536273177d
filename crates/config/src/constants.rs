//! Centralized constants for the photosync workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Synology Defaults
// =============================================================================

/// Host used when neither a per-account nor a global host is configured.
pub const DEFAULT_SYNOLOGY_HOST: &str = "localhost";

/// Default DSM HTTP port.
pub const DEFAULT_SYNOLOGY_PORT: u16 = 5000;

/// Default photo library share on the NAS.
pub const DEFAULT_PHOTO_LIBRARY_PATH: &str = "/photo";

/// Name given to the synthetic account built from `SYNOLOGY_HOST` alone.
pub const SINGLE_HOST_ACCOUNT_NAME: &str = "NAS";

// =============================================================================
// Numbered Slot Bounds
// =============================================================================

/// Legacy `SYNOLOGY_ACCOUNT_{i}_*` slots scanned when no count is given.
pub const DEFAULT_LEGACY_ACCOUNT_SLOTS: usize = 3;

/// Explicit `PAIRING_{i}_*` slots scanned when no count is given.
pub const DEFAULT_PAIRING_SLOTS: usize = 2;

/// Upper bound for `SYNOLOGY_ACCOUNT_COUNT` and `PAIRING_COUNT`.
pub const MAX_NUMBERED_SLOTS: usize = 100;

// =============================================================================
// Google Defaults
// =============================================================================

/// Google account labels used when `GOOGLE_ACCOUNTS` is unset.
pub const DEFAULT_GOOGLE_ACCOUNTS: &str = "account_1,account_2";

// =============================================================================
// Run Settings
// =============================================================================

/// Default free-space threshold, as a percentage of NAS capacity.
pub const DEFAULT_STORAGE_THRESHOLD_PERCENT: u8 = 80;

/// Maximum accepted storage threshold.
pub const MAX_STORAGE_THRESHOLD_PERCENT: u8 = 100;

/// Default location of the sync state database.
pub const DEFAULT_DATABASE_PATH: &str = "./data/photos.db";

/// Default log level applied when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";
