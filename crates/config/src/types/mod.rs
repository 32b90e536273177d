//! Configuration type definitions for photosync.
//!
//! Responsibilities:
//! - Define the account, pairing, and aggregate configuration types.
//! - Provide the pure lookup helpers over a loaded `Config`.
//! - Keep NAS passwords out of `Debug` and serialized output.
//!
//! Does NOT handle:
//! - Reading environment variables (see `loader` module).
//! - Reporting suspicious configurations (see `diagnostics` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Lookups resolve names by exact string match and return the first match.

mod account;
mod config;
mod pairing;

pub use account::{GoogleAccountConfig, SynologyAccountConfig};
pub use config::Config;
pub use pairing::AccountPairing;
