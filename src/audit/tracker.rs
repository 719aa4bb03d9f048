//! Per-task append-only history tracking.
//!
//! The tracker is the only writer of task history. Entries for one task id
//! form a strictly observation-ordered sequence: no reordering, no
//! coalescing, no edits, no deletes. The engine delivers signals for a
//! given task sequentially, and the map serializes per-entry access, so the
//! log for one task id is never written concurrently.

use super::signals::{TaskHistoryEntry, TaskLifecycleSignal};
use crate::logging::log_history_operation;
use dashmap::DashMap;

/// Why a signal was not appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Entry appended to the task's history
    Appended,
    /// Task already completed; signal logged and dropped
    DroppedTerminal,
    /// Non-Created signal for a task id the tracker has never seen
    DroppedUnknownTask,
    /// Second Created signal for an already-opened history
    DroppedDuplicateCreated,
}

impl RecordOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, Self::Appended)
    }
}

#[derive(Debug, Default)]
struct TaskHistory {
    entries: Vec<TaskHistoryEntry>,
    completed: bool,
}

/// Append-only task history store keyed by task id
#[derive(Debug, Default)]
pub struct TaskHistoryTracker {
    histories: DashMap<String, TaskHistory>,
}

impl TaskHistoryTracker {
    pub fn new() -> Self {
        Self {
            histories: DashMap::new(),
        }
    }

    /// Record one lifecycle signal.
    ///
    /// Protocol violations (signal after Completed, non-Created signal for
    /// an unknown task id, duplicate Created) are logged and dropped, never
    /// surfaced as errors: a bad signal must not abort unrelated task
    /// processing, and history is never corrupted to accommodate one.
    pub fn record(&self, signal: TaskLifecycleSignal) -> RecordOutcome {
        let task_id = signal.task_id.clone();
        let event_type = signal.event_type;

        let outcome = if event_type.is_initial() {
            let mut history = self.histories.entry(task_id.clone()).or_default();
            if history.entries.is_empty() {
                history.entries.push(TaskHistoryEntry::from_signal(signal));
                RecordOutcome::Appended
            } else {
                RecordOutcome::DroppedDuplicateCreated
            }
        } else {
            match self.histories.get_mut(&task_id) {
                None => RecordOutcome::DroppedUnknownTask,
                Some(mut history) => {
                    if history.completed {
                        RecordOutcome::DroppedTerminal
                    } else {
                        history.completed = event_type.is_terminal();
                        history.entries.push(TaskHistoryEntry::from_signal(signal));
                        RecordOutcome::Appended
                    }
                }
            }
        };

        let status = match outcome {
            RecordOutcome::Appended => "appended",
            RecordOutcome::DroppedTerminal => "dropped_terminal",
            RecordOutcome::DroppedUnknownTask => "dropped_unknown_task",
            RecordOutcome::DroppedDuplicateCreated => "dropped_duplicate_created",
        };
        log_history_operation("record", &task_id, &event_type.to_string(), status, None);

        outcome
    }

    /// Ordered history for a task id; empty for unknown ids.
    ///
    /// Available promptly after each transition — operational dashboards
    /// poll this.
    pub fn history(&self, task_id: &str) -> Vec<TaskHistoryEntry> {
        self.histories
            .get(task_id)
            .map(|history| history.entries.clone())
            .unwrap_or_default()
    }

    /// Whether the task has reached its terminal entry
    pub fn is_complete(&self, task_id: &str) -> bool {
        self.histories
            .get(task_id)
            .map(|history| history.completed)
            .unwrap_or(false)
    }

    /// Number of task ids with at least one entry
    pub fn tracked_task_count(&self) -> usize {
        self.histories.len()
    }
}
