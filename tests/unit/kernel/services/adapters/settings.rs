use super::*;

#[test]
fn settings_path_lives_under_app_dir() {
    let path = get_settings_path().unwrap();
    assert!(path.ends_with(".labterm/settings.json"));
}

#[test]
fn ensure_writes_defaults_once() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join(SETTINGS_FILE);

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path), Some(Settings::default()));

    std::fs::write(&path, r#"{"prompt":"lab> "}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.prompt, "lab> ");
    assert_eq!(settings.history, Settings::default().history);
}

#[test]
fn invalid_or_missing_file_loads_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(SETTINGS_FILE);
    assert_eq!(load_settings_from(&path), None);

    std::fs::write(&path, "{ prompt: ").unwrap();
    assert_eq!(load_settings_from(&path), None);
}
