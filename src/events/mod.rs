pub mod dispatch;
pub mod envelope;
pub mod payloads;

// Re-export key types for convenience
pub use dispatch::KnownEvent;
pub use envelope::{DomainEvent, EventMetadata};
pub use payloads::{
    ApplicationCreatedPayload, CaseDocument, CourtApplication, CourtCentre, Defendant,
    DefendantResult, DocumentAddedPayload, Hearing, HearingListedPayload, HearingResultedPayload,
    ProsecutionCase,
};
