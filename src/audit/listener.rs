//! Lifecycle listener wiring.
//!
//! The Workflow Engine invokes this listener for every task lifecycle
//! signal. The listener appends to the history tracker and, for signals
//! that were actually appended, publishes the matching administrative
//! command. Dropped signals publish nothing.

use super::signals::{TaskHistoryEventType, TaskLifecycleSignal};
use super::tracker::{RecordOutcome, TaskHistoryTracker};
use crate::commands::CommandPublisher;
use crate::identity::SystemIdentity;
use std::sync::Arc;

/// Command names per lifecycle event
fn command_name(event_type: TaskHistoryEventType) -> &'static str {
    match event_type {
        TaskHistoryEventType::Created => "task.record_created",
        TaskHistoryEventType::Assigned => "task.record_assigned",
        TaskHistoryEventType::Completed => "task.record_completed",
        TaskHistoryEventType::Reassigned
        | TaskHistoryEventType::DueDateUpdated
        | TaskHistoryEventType::WorkQueueUpdated => "task.record_updated",
    }
}

/// Receives task lifecycle signals from the Workflow Engine's listeners
pub struct TaskLifecycleListener {
    tracker: Arc<TaskHistoryTracker>,
    commands: CommandPublisher,
    identity: SystemIdentity,
}

impl TaskLifecycleListener {
    pub fn new(
        tracker: Arc<TaskHistoryTracker>,
        commands: CommandPublisher,
        identity: SystemIdentity,
    ) -> Self {
        Self {
            tracker,
            commands,
            identity,
        }
    }

    /// Handle one signal: append to history, then notify the command
    /// channel. Returns the tracker's record outcome for observability.
    pub fn on_signal(&self, signal: TaskLifecycleSignal) -> RecordOutcome {
        let name = command_name(signal.event_type);
        let task_id = signal.task_id.clone();
        let attributes = signal.details.clone();

        let outcome = self.tracker.record(signal);
        if outcome.is_appended() {
            self.commands
                .publish(name, task_id, attributes, &self.identity);
        }
        outcome
    }
}
