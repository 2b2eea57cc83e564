use super::*;

fn entries(history: &CommandHistory) -> Vec<String> {
    history.to_vec()
}

#[test]
fn push_appends_trimmed_commands() {
    let mut history = CommandHistory::default();
    assert!(history.push("  kubectl get pods -n production  "));
    assert_eq!(entries(&history), vec!["kubectl get pods -n production"]);
}

#[test]
fn push_ignores_blank_commands() {
    let mut history = CommandHistory::default();
    assert!(!history.push(""));
    assert!(!history.push("   \t "));
    assert!(history.is_empty());
}

#[test]
fn push_skips_consecutive_duplicates_only() {
    let mut history = CommandHistory::default();
    assert!(history.push("kubectl get pods"));
    assert!(!history.push("kubectl get pods"));
    assert!(history.push("kubectl get events"));
    assert!(history.push("kubectl get pods"));
    assert_eq!(
        entries(&history),
        vec!["kubectl get pods", "kubectl get events", "kubectl get pods"]
    );
}

#[test]
fn push_drops_oldest_beyond_capacity() {
    let mut history = CommandHistory::new(3);
    for cmd in ["a", "b", "c", "d", "e"] {
        history.push(cmd);
    }
    assert_eq!(entries(&history), vec!["c", "d", "e"]);
    assert_eq!(history.len(), 3);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut history = CommandHistory::new(0);
    history.push("a");
    history.push("b");
    assert_eq!(history.capacity(), 1);
    assert_eq!(entries(&history), vec!["b"]);
}

#[test]
fn from_entries_reapplies_rules() {
    let history = CommandHistory::from_entries(2, ["x", "x", " ", "y", "z"]);
    assert_eq!(entries(&history), vec!["y", "z"]);
}

#[test]
fn entry_from_newest_counts_backwards() {
    let list = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    assert_eq!(entry_from_newest(&list, 0), Some("c"));
    assert_eq!(entry_from_newest(&list, 2), Some("a"));
    assert_eq!(entry_from_newest(&list, 3), None);
    assert_eq!(entry_from_newest(&[], 0), None);
}

#[test]
fn find_recent_prefers_newest_and_skips_repeats() {
    let list: Vec<String> = [
        "kubectl get pods",
        "kubectl logs payment-service",
        "kubectl get pods",
        "kubectl get events",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    assert_eq!(find_recent(&list, "get", 0), Some("kubectl get events"));
    assert_eq!(find_recent(&list, "get", 1), Some("kubectl get pods"));
    assert_eq!(find_recent(&list, "get", 2), None);
    assert_eq!(find_recent(&list, "logs", 0), Some("kubectl logs payment-service"));
    assert_eq!(find_recent(&list, "nothing", 0), None);
}
