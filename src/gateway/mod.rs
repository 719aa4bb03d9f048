//! # Process Instantiation Gateway
//!
//! Guard evaluation and idempotent start-or-skip decisions per derived
//! business key, delegating actual execution to the external Workflow
//! Engine.

pub mod engine;
pub mod orchestrator;
pub mod policy;

pub use engine::{ProcessInstance, WorkflowEngine};
pub use orchestrator::{
    EntityFailure, EventDisposition, EventOrchestrator, EventOutcome, SkipReason, StartOutcome,
};
pub use policy::{NoOpPolicy, ProcessProfile};
