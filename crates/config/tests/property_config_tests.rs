//! Property-based tests for configuration loading.
//!
//! These tests drive the loader with randomly generated environments to catch
//! ordering and parsing edge cases that hand-written cases might miss.
//!
//! Test coverage:
//! - Named Synology accounts: order and count follow `SYNOLOGY_ACCOUNTS`
//! - Auto-pairing: exactly the Google names that match a Synology name, in Google order
//! - Ports and thresholds: accepted inside their ranges, rejected outside
//! - Serialization: NAS passwords never reach serialized output

use proptest::prelude::*;
use proptest::sample::subsequence;

use photosync_config::{ConfigError, MapEnv, load_config_from};

/// Strategy for generating account names usable in variable names.
fn account_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,10}".prop_map(String::from)
}

/// Strategy for generating a list of distinct account names.
fn distinct_names_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set(account_name_strategy(), 1..=max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Strategy for generating NAS passwords with a recognizable prefix.
fn password_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%^&*]{8,32}".prop_map(|s| format!("pw-{}", s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Named accounts come back in list order, one per name.
    #[test]
    fn test_named_accounts_preserve_order(names in distinct_names_strategy(8)) {
        let env = MapEnv::new().with("SYNOLOGY_ACCOUNTS", names.join(","));
        let config = load_config_from(env).expect("named accounts should load");

        let loaded: Vec<&str> = config.synology_accounts.iter().map(|s| s.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(loaded, expected);
    }

    /// Auto-pairing yields exactly the shared names, in Google order.
    #[test]
    fn test_auto_pairing_matches_shared_names(
        (google, synology) in distinct_names_strategy(8).prop_flat_map(|google| {
            let len = google.len();
            (Just(google.clone()), subsequence(google, 0..=len))
        })
    ) {
        let env = MapEnv::new()
            .with("GOOGLE_ACCOUNTS", google.join(","))
            .with("SYNOLOGY_ACCOUNTS", format!("{},unmatched-nas", synology.join(",")));
        let config = load_config_from(env).expect("accounts should load");

        let expected: Vec<&String> = google.iter().filter(|g| synology.contains(g)).collect();
        prop_assert_eq!(config.account_pairings.len(), expected.len());
        for (pairing, name) in config.account_pairings.iter().zip(expected) {
            prop_assert_eq!(&pairing.google_account_name, name);
            prop_assert_eq!(&pairing.synology_account_name, name);
            prop_assert!(config.paired_synology_account(name).is_some());
        }
    }

    /// Every non-zero port is accepted as-is.
    #[test]
    fn test_valid_ports_accepted(port in 1u16..=u16::MAX) {
        let env = MapEnv::new()
            .with("SYNOLOGY_HOST", "nas.local")
            .with("SYNOLOGY_PORT", port.to_string());
        let config = load_config_from(env).expect("valid port should load");
        prop_assert_eq!(config.synology_accounts[0].port, port);
    }

    /// Ports beyond the u16 range are rejected, naming the variable.
    #[test]
    fn test_out_of_range_ports_rejected(port in 65536u32..=1_000_000u32) {
        let env = MapEnv::new()
            .with("SYNOLOGY_ACCOUNTS", "pete")
            .with("SYNOLOGY_pete_PORT", port.to_string());
        let err = load_config_from(env).expect_err("out-of-range port should fail");
        prop_assert!(matches!(err, ConfigError::InvalidValue { .. }), "expected InvalidValue, got {:?}", err);
        prop_assert_eq!(err.var(), Some("SYNOLOGY_pete_PORT"));
    }

    /// Thresholds load inside 0..=100 and fail above it.
    #[test]
    fn test_threshold_range(percent in 0u32..=300u32) {
        let env = MapEnv::new().with("STORAGE_THRESHOLD_PERCENT", percent.to_string());
        let result = load_config_from(env);
        if percent <= 100 {
            prop_assert_eq!(result.expect("in-range threshold").storage_threshold_percent as u32, percent);
        } else {
            prop_assert!(result.is_err());
        }
    }

    /// Serialized configs and Debug output never contain a NAS password.
    #[test]
    fn test_passwords_never_serialized(
        name in account_name_strategy(),
        password in password_strategy(),
    ) {
        let env = MapEnv::new()
            .with("SYNOLOGY_ACCOUNTS", name.clone())
            .with(format!("SYNOLOGY_{}_USERNAME", name), "user")
            .with(format!("SYNOLOGY_{}_PASSWORD", name), password.clone());
        let config = load_config_from(env).expect("account should load");

        let json = serde_json::to_string(&config).expect("config should serialize");
        prop_assert!(!json.contains(&password));
        prop_assert!(!format!("{:?}", config).contains(&password), "Debug output leaked password");
    }
}
