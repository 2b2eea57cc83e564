//! Progress signal derived from what the learner typed and what came back.
//!
//! Every rule that matches lifts progress to its milestone; a rule never
//! pushes past its own milestone. The result is never below the current value
//! and never above 100.

use crate::kernel::services::ports::ProgressSettings;

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressRule {
    ListPods,
    DescribePod,
    ViewLogs,
    ListEvents,
    FailureSignature,
    FailureState,
}

impl ProgressRule {
    pub const ALL: [ProgressRule; 6] = [
        ProgressRule::ListPods,
        ProgressRule::DescribePod,
        ProgressRule::ViewLogs,
        ProgressRule::ListEvents,
        ProgressRule::FailureSignature,
        ProgressRule::FailureState,
    ];

    pub fn milestone(self) -> u8 {
        match self {
            ProgressRule::ListPods => 30,
            ProgressRule::DescribePod => 50,
            ProgressRule::ViewLogs => 70,
            ProgressRule::ListEvents => 85,
            ProgressRule::FailureSignature => 90,
            ProgressRule::FailureState => 75,
        }
    }

    fn matches(self, target: &ProgressTarget, command_lc: &str, output: &str) -> bool {
        match self {
            ProgressRule::ListPods => {
                command_lc.contains("get pods") && command_lc.contains(&target.namespace)
            }
            ProgressRule::DescribePod => {
                command_lc.contains("describe pod") && command_lc.contains(&target.pod)
            }
            ProgressRule::ViewLogs => command_lc.contains("logs") && command_lc.contains(&target.pod),
            ProgressRule::ListEvents => command_lc.contains("get events"),
            ProgressRule::FailureSignature => output.contains("exit 1"),
            ProgressRule::FailureState => output.contains("CrashLoopBackOff"),
        }
    }
}

/// The namespace and pod a scenario is about, lowercased once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTarget {
    pub namespace: String,
    pub pod: String,
}

impl Default for ProgressTarget {
    fn default() -> Self {
        Self::from_settings(&ProgressSettings::default())
    }
}

impl ProgressTarget {
    pub fn new(namespace: &str, pod: &str) -> Self {
        Self {
            namespace: namespace.trim().to_lowercase(),
            pod: pod.trim().to_lowercase(),
        }
    }

    pub fn from_settings(settings: &ProgressSettings) -> Self {
        Self::new(&settings.namespace, &settings.pod)
    }
}

pub fn matched_rules(target: &ProgressTarget, command: &str, output: &str) -> Vec<ProgressRule> {
    let command_lc = command.to_lowercase();
    ProgressRule::ALL
        .into_iter()
        .filter(|rule| rule.matches(target, &command_lc, output))
        .collect()
}

/// Lifts `current` to the highest milestone among the matched rules, capped at 100.
pub fn derive(target: &ProgressTarget, command: &str, output: &str, current: u8) -> u8 {
    let current = current.min(MAX_PROGRESS);
    matched_rules(target, command, output)
        .into_iter()
        .map(ProgressRule::milestone)
        .fold(current, u8::max)
        .min(MAX_PROGRESS)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/progress.rs"]
mod tests;
