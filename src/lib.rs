#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Caseflow Core
//!
//! Event-driven task orchestration core for a court case-management
//! platform: receives domain events (hearing resulted, hearing listed,
//! application created, document added), decides which workflow to start,
//! derives each process's input variables deterministically, and tracks
//! the full audit history of every human task a workflow creates.
//!
//! ## Architecture
//!
//! The core sits between the messaging transport and an external Workflow
//! Engine. Data flows one direction: inbound event → variable derivation →
//! gateway start-or-skip decisions (one per derived business key) → the
//! engine runs the process and raises task lifecycle signals → the audit
//! tracker records history.
//!
//! ## Module Organization
//!
//! - [`events`] - Inbound event envelope, typed payloads, closed dispatch
//! - [`derivation`] - Pure variable derivation, business keys, aggregation
//! - [`variables`] - Typed process variable maps and the prefix scheme
//! - [`refdata`] - Reference data collaborators and task-type resolution
//! - [`gateway`] - Guard evaluation and process instantiation
//! - [`audit`] - Task lifecycle signals and per-task history tracking
//! - [`commands`] - Outbound administrative command channel
//! - [`config`] - Configuration and feature flags
//! - [`error`] - Structured error handling
//!
//! ## Concurrency Model
//!
//! Handlers are independent and may run concurrently across events and
//! business keys; derivation is pure and collaborator calls are stateless.
//! The only shared mutable resource is the task history log, keyed by task
//! id, with per-task-id serialization.

pub mod audit;
pub mod commands;
pub mod config;
pub mod constants;
pub mod derivation;
pub mod error;
pub mod events;
pub mod gateway;
pub mod identity;
pub mod logging;
pub mod refdata;
pub mod variables;

// Re-export the primary surface for convenience
pub use audit::{TaskHistoryEntry, TaskHistoryEventType, TaskHistoryTracker, TaskLifecycleListener, TaskLifecycleSignal};
pub use commands::{AdminCommand, CommandPublisher};
pub use config::{ConfiguredFeatureFlags, CoreConfig};
pub use derivation::composite_business_key;
pub use error::{CoreError, Result};
pub use events::{DomainEvent, KnownEvent};
pub use gateway::{EventOrchestrator, EventOutcome, ProcessInstance, WorkflowEngine};
pub use identity::SystemIdentity;
pub use refdata::{
    FeatureFlagService, ReferenceDataService, TaskReferenceResolver, WorkingDayCalendar,
};
pub use variables::{ProcessVariables, TaskVariables, VariableValue};
