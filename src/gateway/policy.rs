//! Per-process start policy.
//!
//! Two deliberate behaviors exist for an event whose routing flag is false:
//! some processes start anyway and let the graph end itself, so the audit
//! trail shows a no-op run; others provide no value when unqualified and
//! are skipped pre-emptively. The policy is fixed per process type, never
//! inferred globally.

use crate::constants::processes;
use crate::variables::ProcessVariables;

/// What to do when the process's routing flag is false
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpPolicy {
    /// Start regardless; the process graph self-terminates on the no-op path
    StartAlways,
    /// Skip the start entirely when the routing flag is false
    SkipWhenUnqualified,
}

/// Static start profile of one process type
#[derive(Debug, Clone, Copy)]
pub struct ProcessProfile {
    pub definition_key: &'static str,
    pub policy: NoOpPolicy,
    /// The derived boolean the engine's gateways branch on, when one exists
    pub routing_flag: Option<&'static str>,
}

impl ProcessProfile {
    /// Whether the gateway should start this process for the derived map
    pub fn should_start(&self, variables: &ProcessVariables) -> bool {
        match self.policy {
            NoOpPolicy::StartAlways => true,
            NoOpPolicy::SkipWhenUnqualified => self
                .routing_flag
                .and_then(|flag| variables.flag(flag))
                .unwrap_or(false),
        }
    }
}

/// Hearing-resulted runs must appear in the audit trail even when nothing
/// is custodial.
pub const HEARING_RESULTED: ProcessProfile = ProcessProfile {
    definition_key: processes::HEARING_RESULTED_PROCESS,
    policy: NoOpPolicy::StartAlways,
    routing_flag: Some("hasCustodialResults"),
};

/// Interpreter booking starts with zero languages and ends itself without
/// creating a task.
pub const BOOK_INTERPRETER: ProcessProfile = ProcessProfile {
    definition_key: processes::BOOK_INTERPRETER_PROCESS,
    policy: NoOpPolicy::StartAlways,
    routing_flag: Some("hasInterpreter"),
};

/// Application review provides no value for internal creator types, so the
/// start is skipped pre-emptively.
pub const REVIEW_APPLICATION: ProcessProfile = ProcessProfile {
    definition_key: processes::REVIEW_APPLICATION_PROCESS,
    policy: NoOpPolicy::SkipWhenUnqualified,
    routing_flag: Some("isApplicationProsecutorOrDefence"),
};

/// Every added document gets a review run; there is no routing flag.
pub const REVIEW_DOCUMENT: ProcessProfile = ProcessProfile {
    definition_key: processes::REVIEW_DOCUMENT_PROCESS,
    policy: NoOpPolicy::StartAlways,
    routing_flag: None,
};
