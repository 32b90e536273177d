//! Configuration loader for environment variables.
//!
//! Responsibilities:
//! - Load configuration from `.env` files and an injectable `EnvSource`.
//! - Provide a builder-pattern `ConfigLoader` for layered defaulting.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Actual photo transfer or NAS connections.
//! - Reporting suspicious configurations (see `diagnostics`).
//!
//! Invariants / Assumptions:
//! - Per-account values override global defaults, which override hardcoded defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod pairing;
mod source;
mod synology;

pub use builder::{ConfigLoader, load_config, load_config_from};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use source::{EnvSource, MapEnv, ProcessEnv};
pub use synology::SynologyTier;

#[cfg(test)]
mod tests;
