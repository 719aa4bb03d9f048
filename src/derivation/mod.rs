//! # Variable Derivation
//!
//! Pure, total derivation of process variable maps from inbound event
//! payloads. One module per event type; shared flag/aggregation logic in
//! [`helpers`], deterministic business keys in [`keys`].
//!
//! Derivation never fails on a well-formed payload: missing optional fields
//! degrade to empty strings or false flags, and reference-data lookups
//! degrade to best-effort entries. Callers skip process start, never
//! derivation.

pub mod application_created;
pub mod document_added;
pub mod hearing_listed;
pub mod hearing_resulted;
pub mod helpers;
pub mod keys;

pub use keys::composite_business_key;

use crate::identity::SystemIdentity;
use crate::refdata::{ReferenceDataService, TaskReferenceResolver, WorkingDayCalendar};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Everything a derivation call needs beyond the payload itself.
///
/// Collaborators are injected per call path; there is no module-level
/// mutable state anywhere in this layer.
#[derive(Clone)]
pub struct DerivationContext {
    pub resolver: TaskReferenceResolver,
    pub reference_data: Arc<dyn ReferenceDataService>,
    pub identity: SystemIdentity,
    /// Instant the event is being handled; anchors due-date resolution
    pub as_of: DateTime<Utc>,
}

impl DerivationContext {
    pub fn new(
        reference_data: Arc<dyn ReferenceDataService>,
        calendar: Arc<dyn WorkingDayCalendar>,
        identity: SystemIdentity,
        as_of: DateTime<Utc>,
    ) -> Self {
        Self {
            resolver: TaskReferenceResolver::new(reference_data.clone(), calendar),
            reference_data,
            identity,
            as_of,
        }
    }
}
