use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, FetchFailurePolicy};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(crate::DEFAULT_BASE_URL));
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
    assert_that!(config.geolocation.timeout_ms, eq(5000));
    assert_that!(config.geolocation.maximum_age_ms, eq(60000));
    assert_that!(config.geolocation.high_accuracy, eq(true));
    assert_that!(config.notification.duration_secs, eq(3));
    assert_that!(
        config.startup.on_fetch_failure,
        eq(FetchFailurePolicy::Register)
    );
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("skud");
    let _dir = EnvGuard::set(crate::CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(crate::CONFIG_FILENAME),
        r#"
              [api]
              base_url = "http://skud.local:9000"
              timeout_secs = 20

              [geolocation]
              enabled = false

              [startup]
              on_fetch_failure = "offline"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://skud.local:9000"));
    assert_that!(config.api.timeout_secs, eq(20));
    assert_that!(config.geolocation.enabled, eq(false));
    assert_that!(
        config.startup.on_fetch_failure,
        eq(FetchFailurePolicy::Offline)
    );
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(crate::CONFIG_FILENAME),
        "[api]\ntimeout_secs = 20\n",
    )
    .unwrap();
    let _timeout = EnvGuard::set("SKUD_API_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_invalid_env_value_when_load_then_keeps_default() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("SKUD_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.timeout_secs, eq(crate::DEFAULT_TIMEOUT_SECS));
}

#[test]
#[serial]
fn given_env_position_when_load_then_fixed_position_set() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _lat = EnvGuard::set("SKUD_GEO_LATITUDE", "55.75");
    let _lon = EnvGuard::set("SKUD_GEO_LONGITUDE", "37.61");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.geolocation.fixed_position(), some(eq((55.75, 37.61))));
}

#[test]
#[serial]
fn given_default_config_when_identity_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.identity_path().unwrap(),
        temp.path().join("identity.json")
    );
}

#[test]
#[serial]
fn given_log_file_env_when_load_then_set() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.file, none());

    let _file = EnvGuard::set("SKUD_LOG_FILE", "skud.log");
    let config = Config::load().unwrap();
    assert_that!(config.logging.file.as_deref(), some(eq("skud.log")));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(crate::CONFIG_FILENAME), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_absolute_identity_file_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("SKUD_IDENTITY_FILE", "/etc/identity.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_parent_escape_in_identity_file_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("SKUD_IDENTITY_FILE", "../identity.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
