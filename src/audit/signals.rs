//! Task lifecycle signal definitions.
//!
//! Signals are raised by the Workflow Engine's task listeners whenever a
//! human task changes state. The tracker appends them to per-task history;
//! it never interprets the details beyond the event type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Task history event types, one per lifecycle signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskHistoryEventType {
    /// Task created by the engine
    Created,
    /// Task assigned to a user for the first time
    Assigned,
    /// Task moved to a different user
    Reassigned,
    /// Task due date changed
    DueDateUpdated,
    /// Task moved to a different work queue
    WorkQueueUpdated,
    /// Task completed; terminal
    Completed,
}

impl TaskHistoryEventType {
    /// Check if this is the terminal event (no further entries accepted)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Check if this event opens a task's history
    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Created)
    }
}

impl fmt::Display for TaskHistoryEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Assigned => write!(f, "assigned"),
            Self::Reassigned => write!(f, "reassigned"),
            Self::DueDateUpdated => write!(f, "due_date_updated"),
            Self::WorkQueueUpdated => write!(f, "work_queue_updated"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskHistoryEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "assigned" => Ok(Self::Assigned),
            "reassigned" => Ok(Self::Reassigned),
            "due_date_updated" => Ok(Self::DueDateUpdated),
            "work_queue_updated" => Ok(Self::WorkQueueUpdated),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid task history event type: {s}")),
        }
    }
}

/// One lifecycle signal as delivered by an engine listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLifecycleSignal {
    pub task_id: String,
    pub event_type: TaskHistoryEventType,
    pub observed_at: DateTime<Utc>,
    /// Free-form detail pairs (assignee, queue id, new due date, ...)
    #[serde(default)]
    pub details: HashMap<String, String>,
}

impl TaskLifecycleSignal {
    pub fn new(task_id: impl Into<String>, event_type: TaskHistoryEventType) -> Self {
        Self {
            task_id: task_id.into(),
            event_type,
            observed_at: Utc::now(),
            details: HashMap::new(),
        }
    }

    pub fn created(task_id: impl Into<String>) -> Self {
        Self::new(task_id, TaskHistoryEventType::Created)
    }

    pub fn assigned(task_id: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self::new(task_id, TaskHistoryEventType::Assigned).with_detail("assignee", assignee)
    }

    pub fn completed(task_id: impl Into<String>) -> Self {
        Self::new(task_id, TaskHistoryEventType::Completed)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// One appended history entry; never edited or deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskHistoryEntry {
    pub task_id: String,
    pub event_type: TaskHistoryEventType,
    pub recorded_at: DateTime<Utc>,
    pub details: HashMap<String, String>,
}

impl TaskHistoryEntry {
    pub(crate) fn from_signal(signal: TaskLifecycleSignal) -> Self {
        Self {
            task_id: signal.task_id,
            event_type: signal.event_type,
            recorded_at: signal.observed_at,
            details: signal.details,
        }
    }
}
