//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test Synology tier selection and per-account layering.
//! - Test Google account parsing, explicit pairings, and auto-pairing.
//! - Test run settings, validation errors, and builder overrides.
//! - Test process environment and dotenv handling.
//!
//! Invariants:
//! - Most tests load from `MapEnv` and never touch process state.
//! - Tests that do touch process state use `serial_test` and `env_lock()`.

use std::sync::Mutex;

use crate::loader::source::MapEnv;
use crate::loader::{ConfigError, load_config_from};
use crate::types::Config;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build a `MapEnv` from key/value pairs.
pub fn env(vars: &[(&str, &str)]) -> MapEnv {
    vars.iter().copied().collect()
}

/// Load a config from key/value pairs, panicking on error.
pub fn load(vars: &[(&str, &str)]) -> Config {
    load_config_from(env(vars)).expect("configuration should load")
}

/// Load a config from key/value pairs, expecting an error.
pub fn load_err(vars: &[(&str, &str)]) -> ConfigError {
    match load_config_from(env(vars)) {
        Ok(config) => panic!("expected a configuration error, got {config:?}"),
        Err(e) => e,
    }
}
