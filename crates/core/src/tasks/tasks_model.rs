//! Outcome of one scheduled task run.

use serde::{Deserialize, Serialize};

/// Aggregate result of a task run over many owners or schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunResult {
    /// Number of owners or schedules fully handled.
    pub completed: usize,
    /// Number left alone because they opted out or had nothing to send.
    pub skipped: usize,
    /// Number that hit a store or delivery error.
    pub failed: usize,
    /// Failed key with its error message.
    pub failures: Vec<(String, String)>,
}

impl TaskRunResult {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn summary(&self) -> String {
        if self.is_success() {
            format!("Completed {} (skipped {})", self.completed, self.skipped)
        } else {
            format!(
                "Completed {} with {} failures (skipped {})",
                self.completed, self.failed, self.skipped
            )
        }
    }

    pub(crate) fn add_completed(&mut self) {
        self.completed += 1;
    }

    pub(crate) fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn add_failure(&mut self, key: &str, error: impl ToString) {
        self.failed += 1;
        self.failures.push((key.to_string(), error.to_string()));
    }
}
