use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, FetchFailurePolicy};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use serial_test::serial;

#[test]
fn test_fetch_failure_policy_from_str() {
    assert_eq!(
        FetchFailurePolicy::from_str("register"),
        Ok(FetchFailurePolicy::Register)
    );
    assert_eq!(
        FetchFailurePolicy::from_str("OFFLINE"),
        Ok(FetchFailurePolicy::Offline)
    );
    assert!(FetchFailurePolicy::from_str("retry").is_err());
}

#[test]
#[serial]
fn given_policy_env_when_load_then_policy_applied() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _policy = EnvGuard::set("SKUD_STARTUP_ON_FETCH_FAILURE", "offline");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.startup.on_fetch_failure,
        eq(FetchFailurePolicy::Offline)
    );
}

#[test]
#[serial]
fn given_unknown_policy_env_when_load_then_default_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _policy = EnvGuard::set("SKUD_STARTUP_ON_FETCH_FAILURE", "panic");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.startup.on_fetch_failure,
        eq(FetchFailurePolicy::Register)
    );
}
