use super::*;
use crate::kernel::progress::{derive, ProgressTarget};

fn output(command: &str) -> String {
    SimulatedCluster::new()
        .respond(command)
        .unwrap()
        .output_text
}

#[test]
fn get_pods_shows_the_crashing_pod() {
    let out = output("kubectl get pods -n production");
    assert!(out.contains("payment-service   0/1     CrashLoopBackOff"));
    assert!(out.ends_with("\r\n"));
    assert!(!out.replace("\r\n", "").contains('\n'));
}

#[test]
fn describe_and_logs_carry_the_failure_signature() {
    let target = ProgressTarget::default();
    let describe = output("kubectl describe pod payment-service -n production");
    assert_eq!(derive(&target, "kubectl describe pod payment-service", &describe, 0), 90);

    let logs = output("kubectl logs payment-service -n production");
    assert!(logs.contains("exit 1"));
}

#[test]
fn clear_is_a_directive() {
    let response = SimulatedCluster::new().respond("clear").unwrap();
    assert!(response.clear_screen);
    assert!(response.output_text.is_empty());
}

#[test]
fn shell_builtins_and_unknown_programs() {
    assert_eq!(output("echo  hello   world"), "hello world\r\n");
    assert_eq!(output("pwd"), "/home/lab\r\n");
    assert_eq!(output("vim notes.txt"), "bash: vim: command not found\r\n");
    assert_eq!(
        output("kubectl get nodes"),
        "Command executed: kubectl get nodes\r\n"
    );
    assert!(output("help").starts_with("Common kubectl commands:"));
}

#[test]
fn failing_cluster_reports_transport_errors() {
    let cluster = SimulatedCluster::failing("cluster unreachable");
    assert_eq!(
        cluster.respond("kubectl get pods"),
        Err(ExecError::Transport("cluster unreachable".into()))
    );
}

#[test]
fn overlong_commands_are_rejected() {
    let long = format!("echo {}", "x".repeat(600));
    assert!(matches!(
        SimulatedCluster::new().respond(&long),
        Err(ExecError::Rejected(_))
    ));
}

#[tokio::test]
async fn execute_resolves_to_the_scripted_response() {
    let cluster = SimulatedCluster::new().with_latency(Duration::from_millis(5));
    let outcome = cluster
        .execute(CommandRequest {
            session_id: "s".into(),
            command_text: "pwd".into(),
        })
        .await;
    assert_eq!(outcome, Ok(CommandResponse::output("/home/lab\r\n")));
}
