//! Deployment configuration for photosync.
//!
//! This crate resolves Google source accounts, Synology NAS accounts, and
//! the pairings between them from environment variables (optionally seeded
//! from a `.env` file).

pub mod constants;
mod diagnostics;
mod loader;
pub mod types;

pub use diagnostics::ConfigWarning;
pub use loader::{
    ConfigError, ConfigLoader, EnvSource, MapEnv, ProcessEnv, SynologyTier, env_var_or_none,
    load_config, load_config_from,
};
pub use types::{AccountPairing, Config, GoogleAccountConfig, SynologyAccountConfig};
