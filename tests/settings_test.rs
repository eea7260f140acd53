//! Settings loading tests: file values, environment overrides, defaults.
//!
//! Every test here is `#[serial]` because `Settings::load_from` reads
//! `TOASTBUS_` environment variables, and the override tests mutate them.

use serial_test::serial;
use std::time::Duration;
use toastbus::config::Settings;

#[test]
#[serial]
fn missing_file_yields_defaults() {
    let settings = Settings::load_from("does/not/exist.toml").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toastbus.toml");
    std::fs::write(
        &path,
        r#"
[application]
log_level = "debug"

[store]
max_visible = 5

[store.display]
warning = "10s"
error = "30s"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.application.log_level, "debug");
    assert_eq!(settings.store.max_visible, 5);
    assert_eq!(settings.store.display.warning, Duration::from_secs(10));
    assert_eq!(settings.store.display.error, Some(Duration::from_secs(30)));

    // Keys the file does not mention keep their defaults
    assert_eq!(settings.application.name, "toastbus");
    assert_eq!(settings.store.display.success, Duration::from_secs(3));
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn environment_overrides_file_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toastbus.toml");
    std::fs::write(&path, "[store]\nmax_visible = 5\n").unwrap();

    std::env::set_var("TOASTBUS_STORE__MAX_VISIBLE", "7");
    std::env::set_var("TOASTBUS_APPLICATION__LOG_LEVEL", "warn");
    let settings = Settings::load_from(&path);
    std::env::remove_var("TOASTBUS_STORE__MAX_VISIBLE");
    std::env::remove_var("TOASTBUS_APPLICATION__LOG_LEVEL");

    let settings = settings.unwrap();
    assert_eq!(settings.store.max_visible, 7);
    assert_eq!(settings.application.log_level, "warn");
}

#[test]
#[serial]
fn environment_duration_strings_parse() {
    std::env::set_var("TOASTBUS_STORE__DISPLAY__SUCCESS", "750ms");
    let settings = Settings::load_from("does/not/exist.toml");
    std::env::remove_var("TOASTBUS_STORE__DISPLAY__SUCCESS");

    let settings = settings.unwrap();
    assert_eq!(settings.store.display.success, Duration::from_millis(750));
}

#[test]
#[serial]
fn malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toastbus.toml");
    std::fs::write(&path, "[store\nmax_visible = ").unwrap();

    assert!(Settings::load_from(&path).is_err());
}

#[test]
#[serial]
fn out_of_range_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toastbus.toml");
    std::fs::write(&path, "[store]\nmax_visible = 0\n").unwrap();

    // Loading succeeds; the value is rejected by validation
    let settings = Settings::load_from(&path).unwrap();
    let err = settings.validate().unwrap_err();
    assert!(err.contains("max_visible"), "unexpected message: {err}");
}
