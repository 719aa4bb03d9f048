//! # Core Error Types
//!
//! Structured error handling for event processing and workflow instantiation
//! using thiserror instead of `Box<dyn Error>` patterns.

use thiserror::Error;

/// Errors surfaced by the orchestration core.
///
/// Protocol violations in history tracking and unresolvable reference data
/// are deliberately NOT represented here: those degrade in place (logged and
/// dropped, or best-effort entries) so that unrelated work is never aborted.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Malformed event payload for '{event_name}': {message}")]
    MalformedPayload { event_name: String, message: String },

    #[error("Workflow engine error: {operation}: {message}")]
    WorkflowEngine { operation: String, message: String },

    #[error("Reference data error: {lookup}: {message}")]
    ReferenceData { lookup: String, message: String },

    #[error("Feature flag lookup failed for '{feature}': {message}")]
    FeatureFlag { feature: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a malformed-payload error for the named event
    pub fn malformed(event_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            event_name: event_name.into(),
            message: message.into(),
        }
    }

    /// Create a workflow-engine error for the given operation
    pub fn engine(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WorkflowEngine {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a reference-data error for the given lookup
    pub fn reference_data(lookup: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReferenceData {
            lookup: lookup.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
