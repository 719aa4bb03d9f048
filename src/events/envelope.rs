//! Domain event envelope as delivered by the messaging transport.
//!
//! The envelope is consumed once and never mutated; the payload stays an
//! opaque JSON document until dispatch resolves it into a typed payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Correlation metadata carried alongside every event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    /// Unique id of this delivery
    #[serde(default)]
    pub event_id: Option<String>,
    /// Correlation id threading related events together
    #[serde(default)]
    pub correlation_id: Option<String>,
    /// When the producing system recorded the event
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Producing system identifier
    #[serde(default)]
    pub source: Option<String>,
}

/// An immutable inbound domain event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    /// Logical event name, e.g. `public.progression.hearing-resulted`
    pub name: String,
    #[serde(default)]
    pub metadata: EventMetadata,
    /// Raw JSON payload, one document schema per event name
    pub payload: Value,
}

impl DomainEvent {
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            name: name.into(),
            metadata: EventMetadata::default(),
            payload,
        }
    }

    pub fn with_metadata(mut self, metadata: EventMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}
