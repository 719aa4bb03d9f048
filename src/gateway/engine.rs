//! Workflow Engine collaborator interface.
//!
//! The engine owns process persistence and execution; this core only asks
//! it to start instances. Business keys are deterministic, so a redelivered
//! event targets the same key and the engine can apply its own idempotency
//! if configured to.

use crate::error::Result;
use crate::variables::ProcessVariables;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A running process instance as reported back by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInstance {
    pub id: String,
    pub definition_key: String,
    pub business_key: String,
}

/// The external workflow engine consumed by the gateway
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Start a process instance of the given definition under the given
    /// business key, seeded with the derived variable map.
    async fn start_process_instance_by_key(
        &self,
        process_definition_key: &str,
        business_key: &str,
        variables: ProcessVariables,
    ) -> Result<ProcessInstance>;
}
