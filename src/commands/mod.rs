//! # Administrative Command Channel
//!
//! Outbound commands ("record task created/assigned/completed") published
//! towards the administrative command consumer, carrying the task id, the
//! event's detail subset, and system-identity attribution.

use crate::identity::SystemIdentity;
use std::collections::HashMap;
use tokio::sync::broadcast;

/// An administrative command ready for the command channel
#[derive(Debug, Clone)]
pub struct AdminCommand {
    /// Command name, e.g. `task.record_created`
    pub name: String,
    pub task_id: String,
    pub attributes: HashMap<String, String>,
    pub issued_by_id: String,
    pub issued_by_name: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

/// High-throughput publisher for administrative commands
#[derive(Debug, Clone)]
pub struct CommandPublisher {
    sender: broadcast::Sender<AdminCommand>,
}

impl CommandPublisher {
    /// Create a new command publisher with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a command attributed to the given identity
    pub fn publish(
        &self,
        name: impl Into<String>,
        task_id: impl Into<String>,
        attributes: HashMap<String, String>,
        identity: &SystemIdentity,
    ) {
        let command = AdminCommand {
            name: name.into(),
            task_id: task_id.into(),
            attributes,
            issued_by_id: identity.user_id.to_string(),
            issued_by_name: identity.user_name.clone(),
            issued_at: chrono::Utc::now(),
        };

        // A send with no subscribers is acceptable - commands are published
        // whether or not the administrative consumer is attached yet.
        let _ = self.sender.send(command);
    }

    /// Subscribe to commands
    pub fn subscribe(&self) -> broadcast::Receiver<AdminCommand> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for CommandPublisher {
    fn default() -> Self {
        Self::new(1000)
    }
}
