use super::*;

#[test]
fn empty_object_yields_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.prompt, "$ ");
    assert_eq!(settings.history.capacity, 100);
    assert_eq!(settings.completion.max_candidates, 10);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"history":{"capacity":5},"progress":{"pod":"cart"}}"#)
            .unwrap();
    assert_eq!(settings.history.capacity, 5);
    assert!(settings.history.persist);
    assert_eq!(settings.progress.pod, "cart");
    assert_eq!(settings.progress.namespace, "production");
    assert!(!settings.completion.catalog.is_empty());
}
