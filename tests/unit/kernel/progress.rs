use super::*;

fn target() -> ProgressTarget {
    ProgressTarget::default()
}

#[test]
fn listing_pods_in_target_namespace_reaches_thirty() {
    assert_eq!(derive(&target(), "kubectl get pods -n production", "", 0), 30);
}

#[test]
fn listing_pods_elsewhere_does_nothing() {
    assert_eq!(derive(&target(), "kubectl get pods -n staging", "", 10), 10);
}

#[test]
fn command_match_is_case_insensitive() {
    assert_eq!(derive(&target(), "KUBECTL GET PODS -n Production", "", 0), 30);
}

#[test]
fn describe_then_logs_then_events_climb() {
    let t = target();
    let p = derive(&t, "kubectl describe pod payment-service -n production", "", 30);
    assert_eq!(p, 50);
    let p = derive(&t, "kubectl logs payment-service -n production", "", p);
    assert_eq!(p, 70);
    let p = derive(&t, "kubectl get events -n production", "", p);
    assert_eq!(p, 85);
}

#[test]
fn failure_signature_in_output_reaches_ninety_from_anywhere() {
    let t = target();
    for start in [0, 15, 50, 89] {
        assert_eq!(derive(&t, "whatever", "Command: sh,-c,exit 1", start), 90);
    }
    assert_eq!(derive(&t, "whatever", "Error: exit 1\r\n", 95), 95);
}

#[test]
fn failure_state_keyword_reaches_seventy_five() {
    let output = "payment-service   0/1     CrashLoopBackOff   5 (22s ago)   10m";
    assert_eq!(derive(&target(), "kubectl get pods", output, 20), 75);
}

#[test]
fn the_highest_matched_milestone_wins() {
    let output = "Status: CrashLoopBackOff\nCommand: sh,-c,exit 1";
    let p = derive(&target(), "kubectl get pods -n production", output, 0);
    assert_eq!(p, 90);
    assert_eq!(
        matched_rules(&target(), "kubectl get pods -n production", output),
        vec![
            ProgressRule::ListPods,
            ProgressRule::FailureSignature,
            ProgressRule::FailureState
        ]
    );
}

#[test]
fn progress_never_decreases_and_is_idempotent() {
    let t = target();
    assert_eq!(derive(&t, "kubectl get pods -n production", "", 60), 60);
    let once = derive(&t, "kubectl get pods -n production", "", 0);
    let twice = derive(&t, "kubectl get pods -n production", "", once);
    assert_eq!(once, twice);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(derive(&target(), "ls", "", 250), MAX_PROGRESS);
}

#[test]
fn custom_target_changes_the_patterns() {
    let t = ProgressTarget::new("Staging", "Cart-API");
    assert_eq!(derive(&t, "kubectl get pods -n staging", "", 0), 30);
    assert_eq!(derive(&t, "kubectl logs cart-api", "", 0), 70);
    assert_eq!(derive(&t, "kubectl logs payment-service", "", 0), 0);
}
