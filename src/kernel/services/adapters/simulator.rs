//! Scripted stand-in for the lab cluster.
//!
//! Answers the handful of commands the troubleshooting lab walks through with
//! canned output, in the shape a real shell would print them.

use std::time::Duration;

use crate::kernel::services::ports::{
    CommandExecutor, CommandRequest, CommandResponse, ExecError, ExecFuture, ExecOutcome,
};

const MAX_COMMAND_LEN: usize = 500;

const HELP: &[&str] = &[
    "Common kubectl commands:",
    "kubectl get pods -n production          - List pods",
    "kubectl describe pod <name> -n production - Get pod details",
    "kubectl logs <pod-name> -n production    - View logs",
    "kubectl get events -n production         - View events",
];

const GET_PODS: &[&str] = &[
    "NAME              READY   STATUS             RESTARTS      AGE",
    "payment-service   0/1     CrashLoopBackOff   5 (22s ago)   10m",
    "web-frontend      1/1     Running            0             2h",
    "auth-service      1/1     Running            0             2h",
];

const DESCRIBE_POD: &[&str] = &[
    "Name:         payment-service",
    "Namespace:    production",
    "Status:       CrashLoopBackOff",
    "Image:        alpine:latest",
    "Command:      sh,-c,exit 1",
    "State:        Waiting",
    "  Reason:     CrashLoopBackOff",
    "Last State:   Terminated",
    "  Reason:     Error",
    "  Exit Code:  1",
];

const LOGS: &[&str] = &["Error: exit 1"];

const GET_EVENTS: &[&str] = &[
    "LAST SEEN   TYPE      REASON    OBJECT                MESSAGE",
    "10m         Normal    Created   pod/payment-service   Created container payment",
    "10m         Warning   BackOff   pod/payment-service   Back-off restarting failed container",
];

const GET_NS: &[&str] = &[
    "NAME                 STATUS   AGE",
    "default              Active   35m",
    "kube-node-lease      Active   35m",
    "kube-public          Active   35m",
    "kube-system          Active   35m",
    "production           Active   35m",
];

const LS: &[&str] = &["manifests  notes.txt"];

#[derive(Debug, Clone, Default)]
pub struct SimulatedCluster {
    latency: Option<Duration>,
    failure: Option<String>,
}

impl SimulatedCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the cluster were unreachable.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            latency: None,
            failure: Some(message.into()),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn respond(&self, command: &str) -> ExecOutcome {
        if let Some(message) = &self.failure {
            return Err(ExecError::Transport(message.clone()));
        }
        if command.len() > MAX_COMMAND_LEN {
            return Err(ExecError::Rejected("command too long".to_string()));
        }

        let mut words = command.split_whitespace();
        let program = words.next().unwrap_or_default();
        let response = match program {
            "clear" => CommandResponse::clear_screen(),
            "help" => CommandResponse::output(lines(HELP)),
            "pwd" => CommandResponse::output("/home/lab\r\n"),
            "ls" => CommandResponse::output(lines(LS)),
            "echo" => CommandResponse::output(format!(
                "{}\r\n",
                words.collect::<Vec<_>>().join(" ")
            )),
            "kubectl" => CommandResponse::output(kubectl(command)),
            "cat" | "grep" => CommandResponse::output(format!("Command executed: {command}\r\n")),
            other => CommandResponse::output(format!("bash: {other}: command not found\r\n")),
        };
        Ok(response)
    }
}

fn kubectl(command: &str) -> String {
    if command.contains("get pods") && command.contains("production") {
        return lines(GET_PODS);
    }
    if command.contains("describe pod") && command.contains("payment-service") {
        return lines(DESCRIBE_POD);
    }
    if command.contains("logs") && command.contains("payment-service") {
        return lines(LOGS);
    }
    if command.contains("get events") {
        return lines(GET_EVENTS);
    }
    if command.contains("get ns") || command.contains("get namespace") {
        return lines(GET_NS);
    }
    if command.contains("help") {
        return lines(HELP);
    }
    format!("Command executed: {command}\r\n")
}

fn lines(rows: &[&str]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(row);
        out.push_str("\r\n");
    }
    out
}

impl CommandExecutor for SimulatedCluster {
    fn execute(&self, request: CommandRequest) -> ExecFuture {
        let outcome = self.respond(&request.command_text);
        let latency = self.latency;
        Box::pin(async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            outcome
        })
    }

    fn name(&self) -> &'static str {
        "simulated-cluster"
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/simulator.rs"]
mod tests;
