//! Configuration, export and logging setup tests
//!
//! Covers the startup pieces that touch the filesystem: loading the config
//! file, saving the source, and opening the log file.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use chainforge::config::Config;
use chainforge::content::SOURCE_CODE;
use chainforge::export::{save_source, SOURCE_FILENAME};
use chainforge::ui::theme::Theme;

#[test]
fn test_missing_default_config_is_not_an_error() {
    let temp_dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&temp_dir.path().join("config.json")).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_explicit_config_path_must_exist() {
    let temp_dir = TempDir::new().expect("temp dir");
    let missing = temp_dir.path().join("missing.json");
    let err = Config::load(Some(&missing)).expect_err("must fail");
    assert!(format!("{:#}", err).contains("missing.json"));
}

#[test]
fn test_full_config_file() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "theme": "Tokyo Night",
            "model": "gemini-2.0-flash",
            "temperature": 0.2,
            "base_url": "http://localhost:9999",
            "reveal_pre_delay_ms": 0,
            "reveal_line_delay_ms": 25
        }"#,
    )
    .expect("write config");

    let config = Config::load(Some(&path)).expect("load");
    assert!(Theme::by_name(&config.theme).is_some());

    let settings = config.generation_settings();
    assert_eq!(settings.model, "gemini-2.0-flash");
    assert!((settings.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(settings.base_url, "http://localhost:9999");

    let pacing = config.pacing();
    assert_eq!(pacing.pre_delay, Duration::ZERO);
    assert_eq!(pacing.line_delay, Duration::from_millis(25));
}

#[test]
fn test_config_with_typo_is_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"themee": "Nord"}"#).expect("write config");

    let err = Config::load(Some(&path)).expect_err("unknown field");
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_default_config_theme_exists() {
    assert_eq!(
        Theme::by_name(&Config::default().theme).map(|t| t.name),
        Some(Theme::default_theme().name)
    );
}

#[test]
fn test_download_writes_exact_source() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = save_source(temp_dir.path(), SOURCE_CODE).expect("save");

    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(SOURCE_FILENAME));
    assert_eq!(fs::read(&path).expect("read"), SOURCE_CODE.as_bytes());
}

#[test]
fn test_download_twice_overwrites() {
    let temp_dir = TempDir::new().expect("temp dir");
    save_source(temp_dir.path(), SOURCE_CODE).expect("first save");
    save_source(temp_dir.path(), SOURCE_CODE).expect("second save");

    let entries = fs::read_dir(temp_dir.path()).expect("list").count();
    assert_eq!(entries, 1);
}

#[test]
fn test_log_file_is_created() {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join("logs").join("studio.log");

    // A global subscriber may already be installed by another test in this
    // binary; the file must exist either way.
    let _ = chainforge::logging::init_file(&path);
    assert!(path.exists());
}
