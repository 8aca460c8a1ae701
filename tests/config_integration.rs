use maanasa::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("MAANASA_SERVER__PORT");
        env::remove_var("MAANASA_SERVER__HOST");
        env::remove_var("MAANASA_RESILIENCE__TIMEOUT_DISABLED");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("TIMEOUT_DISABLED");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["maanasa"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(!config.resilience.timeout_disabled);
    assert_eq!(config.resilience.request_timeout_secs, 30);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("MAANASA_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["maanasa"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("MAANASA_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["maanasa", "--port", "7171", "--host", "127.0.0.1"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7171);
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("config.yaml");
    fs::write(
        &file_path,
        "server:\n  port: 7070\nresilience:\n  timeout_disabled: true\n",
    )
    .expect("Failed to write temp config");

    let config = AppConfig::load_from_args([
        "maanasa".to_string(),
        "--config".to_string(),
        file_path.display().to_string(),
    ])
    .expect("Failed to load config from file");

    assert_eq!(config.server.port, 7070);
    assert!(config.resilience.timeout_disabled);
    // Values the file omits keep their defaults.
    assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_invalid_flag_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["maanasa", "--port", "not-a-port"]);
    assert!(result.is_err());
}
