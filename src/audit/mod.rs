//! # Task Audit/History Tracking
//!
//! Consumes task lifecycle signals emitted by the Workflow Engine's
//! listeners and appends them, in observation order, to a per-task history
//! log. The log is append-only and exclusively owned by the tracker.

pub mod listener;
pub mod signals;
pub mod tracker;

pub use listener::TaskLifecycleListener;
pub use signals::{TaskHistoryEntry, TaskHistoryEventType, TaskLifecycleSignal};
pub use tracker::{RecordOutcome, TaskHistoryTracker};
