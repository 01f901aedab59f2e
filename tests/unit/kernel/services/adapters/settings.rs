use super::*;
use tempfile::tempdir;

#[test]
fn missing_settings_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config(&dir.path().join("settings.json")).unwrap();
    assert_eq!(config, DeckConfig::default());
}

#[test]
fn partial_settings_keep_other_defaults() {
    let config = parse_config(r#"{"release_threshold": 90.0, "window": 5}"#).unwrap();
    assert_eq!(config.release_threshold, 90.0);
    assert_eq!(config.window(), 5);
    assert_eq!(config.intent_threshold, 50.0);
    assert_eq!(config.exit_duration_ms, 600);
}

#[test]
fn invalid_settings_are_an_error_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{\"window\": \"three\"}").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("settings.json"));
    assert_eq!(load_config_or_default(&path), DeckConfig::default());
}
