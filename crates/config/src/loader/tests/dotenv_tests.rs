//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - `.env` values reach the loader through the process environment.
//! - Process variables win over `.env` values.
//! - Invalid `.env` files fail without leaking secrets.
//! - `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests hold `env_lock()` and run `#[serial]` because they change cwd and env.
//! - Every variable a `.env` fixture introduces is removed again by `EnvCleanup`.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Removes the listed variables (and `DOTENV_DISABLED`) on drop.
struct EnvCleanup(&'static [&'static str]);

impl Drop for EnvCleanup {
    fn drop(&mut self) {
        for key in self.0.iter().chain(["DOTENV_DISABLED"].iter()) {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }
}

fn set_dotenv_disabled(value: Option<&str>) {
    unsafe {
        match value {
            Some(v) => std::env::set_var("DOTENV_DISABLED", v),
            None => std::env::remove_var("DOTENV_DISABLED"),
        }
    }
}

fn write_dotenv(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join(".env"), contents).unwrap();
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&[]);
    set_dotenv_disabled(None);

    assert!(
        ConfigLoader::new().load_dotenv().is_ok(),
        "Missing .env file should be silently ignored"
    );
}

#[test]
#[serial]
fn test_dotenv_values_feed_the_loader() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&["_PHOTOSYNC_DOTENV_ACCOUNTS", "_PHOTOSYNC_DOTENV_DRY_RUN"]);
    set_dotenv_disabled(None);

    write_dotenv(
        &temp_dir,
        "_PHOTOSYNC_DOTENV_ACCOUNTS=pete,becca\n_PHOTOSYNC_DOTENV_DRY_RUN=true\n",
    );

    ConfigLoader::new().load_dotenv().unwrap();

    assert_eq!(
        std::env::var("_PHOTOSYNC_DOTENV_ACCOUNTS").as_deref(),
        Ok("pete,becca")
    );
    assert_eq!(
        std::env::var("_PHOTOSYNC_DOTENV_DRY_RUN").as_deref(),
        Ok("true")
    );
}

#[test]
#[serial]
fn test_process_env_wins_over_dotenv() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&["_PHOTOSYNC_DOTENV_HOST"]);
    set_dotenv_disabled(None);

    unsafe {
        std::env::set_var("_PHOTOSYNC_DOTENV_HOST", "from-process.local");
    }
    write_dotenv(&temp_dir, "_PHOTOSYNC_DOTENV_HOST=from-dotenv.local\n");

    ConfigLoader::new().load_dotenv().unwrap();

    assert_eq!(
        std::env::var("_PHOTOSYNC_DOTENV_HOST").as_deref(),
        Ok("from-process.local")
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&[]);
    set_dotenv_disabled(None);

    write_dotenv(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    match ConfigLoader::new().load_dotenv() {
        Err(ConfigError::DotenvParse { .. }) => {}
        Err(other) => panic!("Invalid .env should return DotenvParse error, got {other}"),
        Ok(_) => panic!("Invalid .env should return DotenvParse error, got Ok"),
    }
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&["_PHOTOSYNC_DOTENV_NAS_PASSWORD"]);
    set_dotenv_disabled(None);

    let secret_value = "nas-password-12345";
    write_dotenv(
        &temp_dir,
        &format!("_PHOTOSYNC_DOTENV_NAS_PASSWORD={secret_value}\nINVALID_LINE_WITHOUT_EQUALS"),
    );

    let err = match ConfigLoader::new().load_dotenv() {
        Err(e) => e.to_string(),
        Ok(_) => panic!("Expected error for invalid .env file, got Ok"),
    };
    assert!(
        !err.contains(secret_value),
        "Error message should NOT contain the secret value: {err}"
    );
    assert!(err.contains(".env"), "Error should mention .env: {err}");
    assert!(
        err.contains("DOTENV_DISABLED"),
        "Error should hint about DOTENV_DISABLED: {err}"
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_values() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&[]);

    write_dotenv(&temp_dir, "INVALID_LINE_WITHOUT_EQUALS");

    for value in ["1", "true"] {
        set_dotenv_disabled(Some(value));
        assert!(
            ConfigLoader::new().load_dotenv().is_ok(),
            "DOTENV_DISABLED={value} should skip .env loading even if file is invalid"
        );
    }

    set_dotenv_disabled(Some("false"));
    assert!(
        matches!(
            ConfigLoader::new().load_dotenv(),
            Err(ConfigError::DotenvParse { .. })
        ),
        "DOTENV_DISABLED=false should NOT disable dotenv loading"
    );
}

#[cfg(unix)]
#[test]
#[serial]
fn test_dotenv_io_error_on_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let _cleanup = EnvCleanup(&["_PHOTOSYNC_DOTENV_UNREADABLE"]);
    set_dotenv_disabled(None);

    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "_PHOTOSYNC_DOTENV_UNREADABLE=1\n").unwrap();

    let mut permissions = fs::metadata(&env_path).unwrap().permissions();
    permissions.set_mode(0o000);
    fs::set_permissions(&env_path, permissions).unwrap();

    let result = ConfigLoader::new().load_dotenv();

    // Restore permissions for cleanup
    let mut permissions = fs::metadata(&env_path).unwrap().permissions();
    permissions.set_mode(0o644);
    fs::set_permissions(&env_path, permissions).unwrap();

    match &result {
        Err(ConfigError::DotenvIo { kind }) => {
            assert!(
                matches!(
                    kind,
                    std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::Other
                ),
                "Expected PermissionDenied or Other, got {kind:?}"
            );
        }
        // Running as root can still read the file.
        Ok(_) => {}
        Err(other) => panic!("Expected DotenvIo error, got {other}"),
    }
}
