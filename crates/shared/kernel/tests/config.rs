use pcat_kernel::config::{ConfigError, load_config};
use pcat_kernel::domain::config::AppConfig;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg: AppConfig = load_config(Some(dir.path().join("absent")))?;

    assert_eq!(cfg.window.title, "Product Categories");
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
#[serial]
fn extensionless_path_tries_known_formats() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("catalog.json"), r#"{ "window": { "title": "From JSON" } }"#)?;

    let cfg: AppConfig = load_config(Some(dir.path().join("catalog")))?;
    assert_eq!(cfg.window.title, "From JSON");
    Ok(())
}

#[test]
#[serial]
fn toml_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[window]
title = "Shop floor"
width = 800.0

[logging]
level = "debug"
json = true
"#,
    )?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.window.title, "Shop floor");
    assert!((cfg.window.width - 800.0).abs() < f64::EPSILON);
    assert!((cfg.window.height - 800.0).abs() < f64::EPSILON);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    Ok(())
}

#[test]
#[serial]
fn malformed_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[window\ntitle = ")?;

    let err = load_config::<AppConfig>(Some(&path)).expect_err("malformed toml must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    Ok(())
}

/// Set by the parent run; points the re-executed test at its config file.
const CHILD_CONFIG: &str = "CATALOG_KERNEL_TEST_CONFIG";

#[test]
#[serial]
fn environment_overrides_win_over_file_and_defaults() -> Result<(), Box<dyn std::error::Error>> {
    // The overrides only exist in a re-executed copy of this test binary, which keeps the
    // process environment of the parent untouched.
    if let Some(path) = std::env::var_os(CHILD_CONFIG) {
        let cfg: AppConfig = load_config(Some(std::path::PathBuf::from(path)))?;

        assert_eq!(cfg.window.title, "From env");
        assert!((cfg.window.width - 640.0).abs() < f64::EPSILON);
        assert!((cfg.window.height - 800.0).abs() < f64::EPSILON);
        assert!(!cfg.logging.console);
        assert!(cfg.logging.json);
        assert_eq!(cfg.logging.level, "debug");
        return Ok(());
    }

    let dir = tempdir()?;
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "[window]\ntitle = \"From file\"\nwidth = 1024.0\n\n[logging]\nlevel = \"debug\"\n")?;

    let output = std::process::Command::new(std::env::current_exe()?)
        .args(["environment_overrides_win_over_file_and_defaults", "--exact", "--test-threads=1"])
        .env(CHILD_CONFIG, &path)
        .env("PCAT__WINDOW__TITLE", "From env")
        .env("PCAT__WINDOW__WIDTH", "640")
        .env("PCAT__LOGGING__CONSOLE", "false")
        .env("PCAT__LOGGING__JSON", "true")
        .output()?;

    assert!(
        output.status.success(),
        "overridden config should load: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("1 passed"));
    Ok(())
}
