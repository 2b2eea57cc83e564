use super::*;

#[test]
fn memory_store_dedups_and_bounds() {
    let store = MemoryHistoryStore::new(2);
    store.append("a", "ls");
    store.append("a", "ls");
    store.append("a", "  ");
    assert_eq!(store.load("a"), vec!["ls"]);

    store.append("a", "pwd");
    store.append("a", "help");
    assert_eq!(store.load("a"), vec!["pwd", "help"]);
}

#[test]
fn memory_store_keeps_sessions_apart() {
    let store = MemoryHistoryStore::default();
    store.append("a", "ls");
    store.append("b", "pwd");
    assert_eq!(store.load("a"), vec!["ls"]);
    assert_eq!(store.load("b"), vec!["pwd"]);
    assert!(store.load("unknown").is_empty());

    store.clear("a");
    assert!(store.load("a").is_empty());
    assert_eq!(store.load("b"), vec!["pwd"]);
}

#[test]
fn file_store_survives_a_restart() {
    let tmp = tempfile::tempdir().unwrap();
    {
        let store = FileHistoryStore::new(tmp.path(), 10);
        store.append("lab-1", "kubectl get pods -n production");
        store.append("lab-1", "kubectl get pods -n production");
        store.append("lab-1", "kubectl get events");
    }

    let store = FileHistoryStore::new(tmp.path(), 10);
    assert_eq!(
        store.load("lab-1"),
        vec!["kubectl get pods -n production", "kubectl get events"]
    );
    assert!(store.path_for("lab-1").ends_with("lab-1.json"));
}

#[test]
fn file_store_clear_removes_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    let store = FileHistoryStore::new(tmp.path(), 10);
    store.append("s", "ls");
    let path = store.path_for("s");
    assert!(path.exists());

    store.clear("s");
    assert!(!path.exists());
    assert!(store.load("s").is_empty());

    // Clearing an unknown session is fine.
    store.clear("never-seen");
}

#[test]
fn file_store_reapplies_capacity_on_load() {
    let tmp = tempfile::tempdir().unwrap();
    let raw = serde_json::json!({
        "session_id": "s",
        "entries": ["a", "a", "b", "c", ""],
    });
    std::fs::write(tmp.path().join("s.json"), raw.to_string()).unwrap();

    let store = FileHistoryStore::new(tmp.path(), 2);
    assert_eq!(store.load("s"), vec!["b", "c"]);
}

#[test]
fn file_store_degrades_on_corrupt_file() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("s.json"), "not json").unwrap();

    let store = FileHistoryStore::new(tmp.path(), 10);
    assert!(store.load("s").is_empty());
    store.append("s", "ls");
    assert_eq!(store.load("s"), vec!["ls"]);
}

#[test]
fn file_store_degrades_when_directory_is_unwritable() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where the history directory should be.
    let blocker = tmp.path().join("history");
    std::fs::write(&blocker, "").unwrap();

    let store = FileHistoryStore::new(&blocker, 10);
    store.append("s", "ls");
    store.append("s", "pwd");
    assert_eq!(store.load("s"), vec!["ls", "pwd"]);
}

#[test]
fn odd_session_ids_map_to_distinct_safe_files() {
    let a = file_stem("../etc/passwd");
    let b = file_stem("__etc_passwd");
    assert!(!a.contains('/'));
    assert!(!a.contains('.'));
    assert_ne!(a, b);
    assert_eq!(file_stem("lab_1-x"), "lab_1-x");
    assert!(!file_stem("").is_empty());
}
