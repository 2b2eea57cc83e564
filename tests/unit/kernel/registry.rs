use super::*;
use crate::kernel::services::adapters::MemoryHistoryStore;
use crate::kernel::session::SessionConfig;
use std::sync::Arc;

fn session(id: &str) -> TerminalSession {
    TerminalSession::new(
        id,
        Arc::new(SessionConfig::default()),
        Arc::new(MemoryHistoryStore::default()),
    )
}

#[test]
fn insert_get_remove() {
    let mut registry = SessionRegistry::new();
    registry.insert(session("b")).unwrap();
    registry.insert(session("a")).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.ids(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(registry.get("a").map(TerminalSession::id), Some("a"));

    registry.get_mut("a").unwrap().feed("ls");
    assert_eq!(registry.get("a").unwrap().line(), "ls");

    assert!(registry.remove("a").is_some());
    assert!(!registry.contains("a"));
    assert!(registry.remove("a").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut registry = SessionRegistry::new();
    registry.insert(session("a")).unwrap().feed("draft");

    let err = registry.insert(session("a")).unwrap_err();
    assert_eq!(err, RegistryError::AlreadyOpen("a".into()));
    assert_eq!(err.to_string(), "Session already open: a");
    // The open session is untouched.
    assert_eq!(registry.get("a").unwrap().line(), "draft");
}

#[test]
fn missing_session_is_an_error() {
    let mut registry = SessionRegistry::new();
    assert_eq!(
        registry.try_get_mut("nope").unwrap_err(),
        RegistryError::NotFound("nope".into())
    );
}
