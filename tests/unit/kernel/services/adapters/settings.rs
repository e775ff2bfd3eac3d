use super::*;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("settings.json"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_settings_from(&path), Settings::default());
}

#[test]
fn reads_overrides() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"recent_capacity": 3, "font": {"families": ["Mono"], "size": 20}}"#,
    )
    .unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.recent_capacity, 3);
    assert_eq!(settings.font.families, vec!["Mono".to_string()]);
    assert_eq!(settings.font.size, 20);
}

#[test]
fn settings_path_ends_with_app_file() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".quill/settings.json"));
    }
}
