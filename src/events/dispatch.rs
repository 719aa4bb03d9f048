//! Closed dispatch table for inbound events.
//!
//! Every known event name maps to exactly one typed payload variant; names
//! outside the table classify to `None`, which callers treat as a logged
//! no-op rather than an error.

use super::envelope::DomainEvent;
use super::payloads::{
    ApplicationCreatedPayload, DocumentAddedPayload, HearingListedPayload, HearingResultedPayload,
};
use crate::constants::events;
use crate::error::{CoreError, Result};
use tracing::debug;

/// Whether an event name appears in the dispatch table.
///
/// Checked before any payload work so that feature-flag evaluation and
/// derivation are never attempted for names outside the table.
pub fn is_known_event_name(name: &str) -> bool {
    matches!(
        name,
        events::HEARING_RESULTED
            | events::HEARING_LISTED
            | events::APPLICATION_CREATED
            | events::DOCUMENT_ADDED
    )
}

/// A recognized inbound event with its payload resolved to a typed document
#[derive(Debug, Clone)]
pub enum KnownEvent {
    HearingResulted(HearingResultedPayload),
    HearingListed(HearingListedPayload),
    ApplicationCreated(ApplicationCreatedPayload),
    DocumentAdded(DocumentAddedPayload),
}

impl KnownEvent {
    /// Resolve an envelope against the dispatch table.
    ///
    /// Returns `Ok(None)` for names outside the table. A payload that does
    /// not deserialize against its schema is a malformed delivery and is an
    /// error — the transport owns redelivery.
    pub fn classify(event: &DomainEvent) -> Result<Option<Self>> {
        let known = match event.name.as_str() {
            events::HEARING_RESULTED => {
                Some(Self::HearingResulted(Self::parse(event)?))
            }
            events::HEARING_LISTED => Some(Self::HearingListed(Self::parse(event)?)),
            events::APPLICATION_CREATED => {
                Some(Self::ApplicationCreated(Self::parse(event)?))
            }
            events::DOCUMENT_ADDED => Some(Self::DocumentAdded(Self::parse(event)?)),
            other => {
                debug!(event_name = %other, "Unrecognized event name - ignoring");
                None
            }
        };
        Ok(known)
    }

    fn parse<T: serde::de::DeserializeOwned>(event: &DomainEvent) -> Result<T> {
        serde_json::from_value(event.payload.clone())
            .map_err(|e| CoreError::malformed(&event.name, e.to_string()))
    }

    /// Logical event name of this variant
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::HearingResulted(_) => events::HEARING_RESULTED,
            Self::HearingListed(_) => events::HEARING_LISTED,
            Self::ApplicationCreated(_) => events::APPLICATION_CREATED,
            Self::DocumentAdded(_) => events::DOCUMENT_ADDED,
        }
    }
}
