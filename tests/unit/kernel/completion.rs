use super::*;

fn catalog() -> CommandCatalog {
    CommandCatalog::new(
        [
            "help",
            "kubectl get pods",
            "kubectl get events",
            "kubectl describe pod web",
            "Kubectl Get Nodes",
        ],
        10,
    )
}

#[test]
fn matches_substring_case_insensitively_in_catalog_order() {
    assert_eq!(
        catalog().candidates("GET"),
        vec!["kubectl get pods", "kubectl get events", "Kubectl Get Nodes"]
    );
    assert_eq!(catalog().candidates("pod"), vec!["kubectl get pods", "kubectl describe pod web"]);
}

#[test]
fn blank_input_offers_the_head_of_the_catalog() {
    let small = CommandCatalog::new(["a", "b", "c"], 2);
    assert_eq!(small.candidates(""), vec!["a", "b"]);
    assert_eq!(small.candidates("   "), vec!["a", "b"]);
}

#[test]
fn results_are_capped() {
    let many = CommandCatalog::new((0..30).map(|i| format!("cmd {i}")), 10);
    assert_eq!(many.candidates("cmd").len(), 10);
    assert_eq!(many.candidates("cmd")[0], "cmd 0");
}

#[test]
fn zero_cap_falls_back_to_default_and_blank_entries_are_dropped() {
    let c = CommandCatalog::new(["", "  ", "ls"], 0);
    assert_eq!(c.len(), 1);
    assert_eq!(c.max_candidates(), DEFAULT_MAX_CANDIDATES);
}

#[test]
fn no_match_yields_nothing() {
    assert!(catalog().candidates("helm").is_empty());
    assert!(CompletionState::start(Vec::new()).is_none());
}

#[test]
fn default_catalog_offers_kubectl_get_commands() {
    let found = CommandCatalog::default().candidates("kubectl get");
    assert!(found.len() > 1);
    assert!(found.iter().all(|c| c.contains("kubectl get")));
}

#[test]
fn cycling_wraps_back_to_the_first_candidate() {
    let mut state =
        CompletionState::start(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap();
    assert_eq!(state.current(), "a");
    assert_eq!(state.advance(), "b");
    assert_eq!(state.advance(), "c");
    assert_eq!(state.advance(), "a");
    assert_eq!(state.index(), 0);
    assert_eq!(state.candidates().len(), 3);
}
