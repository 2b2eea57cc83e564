use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_HISTORY_CAPACITY;

pub const DEFAULT_PROMPT: &str = "$ ";
pub const DEFAULT_MAX_CANDIDATES: usize = 10;

const DEFAULT_BANNER: &[&str] = &[
    "Welcome to K8s Troubleshooting Terminal",
    "Connected to cluster: production-cluster",
    "Type 'help' for available commands",
    "",
];

const DEFAULT_CATALOG: &[&str] = &[
    "help",
    "clear",
    "pwd",
    "ls",
    "echo",
    "kubectl get pods",
    "kubectl get pods -n production",
    "kubectl get pods -A",
    "kubectl get nodes",
    "kubectl get ns",
    "kubectl get events -n production",
    "kubectl get deployments -n production",
    "kubectl get services -n production",
    "kubectl describe pod payment-service -n production",
    "kubectl describe deployment payment-service -n production",
    "kubectl logs payment-service -n production",
    "kubectl logs payment-service -n production --previous",
    "kubectl rollout status deployment/payment-service -n production",
    "kubectl rollout restart deployment/payment-service -n production",
    "kubectl top pods -n production",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_banner")]
    pub banner: Vec<String>,
    #[serde(default)]
    pub history: HistorySettings,
    #[serde(default)]
    pub completion: CompletionSettings,
    #[serde(default)]
    pub progress: ProgressSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySettings {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
    /// Keep history on disk so it outlives the session view.
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSettings {
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    #[serde(default = "default_catalog")]
    pub catalog: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSettings {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_pod")]
    pub pod: String,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_banner() -> Vec<String> {
    DEFAULT_BANNER.iter().map(|s| s.to_string()).collect()
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_true() -> bool {
    true
}

fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

fn default_catalog() -> Vec<String> {
    DEFAULT_CATALOG.iter().map(|s| s.to_string()).collect()
}

fn default_namespace() -> String {
    "production".to_string()
}

fn default_pod() -> String {
    "payment-service".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_banner(),
            history: HistorySettings::default(),
            completion: CompletionSettings::default(),
            progress: ProgressSettings::default(),
        }
    }
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
            persist: true,
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
            catalog: default_catalog(),
        }
    }
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            pod: default_pod(),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
