//! Deterministic business-key derivation.
//!
//! Multi-entity events (one hearing resulting several cases) need one
//! process instance per case, so the business key is a name-based UUID over
//! the pair of natural ids. The derivation is a pure function of its
//! inputs: same pair in, same key out, across calls and across restarts.
//!
//! The input concatenation order is hearingId then caseId and is frozen —
//! keys are persisted externally by the Workflow Engine, so changing the
//! order or the namespace is a breaking migration.

use crate::constants::BUSINESS_KEY_NAMESPACE;
use uuid::Uuid;

/// Derive the composite business key for one case within a hearing
pub fn composite_business_key(hearing_id: &str, case_id: &str) -> String {
    let mut input = String::with_capacity(hearing_id.len() + case_id.len());
    input.push_str(hearing_id);
    input.push_str(case_id);
    Uuid::new_v5(&BUSINESS_KEY_NAMESPACE, input.as_bytes()).to_string()
}
