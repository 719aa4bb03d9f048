//! # System Constants
//!
//! Event names, process-definition keys, task types, and result-code sets
//! that define the operational boundaries of the case progression core.
//!
//! Business keys derived here are persisted externally by the Workflow
//! Engine, so the values in this module are frozen: changing the key
//! namespace or the concatenation order of composite keys requires a
//! migration plan for every in-flight process instance.

use uuid::{uuid, Uuid};

/// Inbound domain event names, one per published document type
pub mod events {
    pub const HEARING_RESULTED: &str = "public.progression.hearing-resulted";
    pub const HEARING_LISTED: &str = "public.progression.hearing-listed";
    pub const APPLICATION_CREATED: &str = "public.progression.application-created";
    pub const DOCUMENT_ADDED: &str = "public.progression.document-added";
}

/// Process-definition keys understood by the Workflow Engine
pub mod processes {
    pub const HEARING_RESULTED_PROCESS: &str = "hearingResultedProcess";
    pub const BOOK_INTERPRETER_PROCESS: &str = "bookInterpreterProcess";
    pub const REVIEW_APPLICATION_PROCESS: &str = "reviewApplicationProcess";
    pub const REVIEW_DOCUMENT_PROCESS: &str = "reviewDocumentProcess";
}

/// Task-type names used for reference-data lookups and variable prefixes
pub mod task_types {
    pub const REVIEW_RESULTS: &str = "reviewResults";
    pub const TRANSFER_TO_CROWN: &str = "transferToCrown";
    pub const BOOK_INTERPRETER: &str = "bookInterpreter";
    pub const REVIEW_APPLICATION: &str = "reviewApplication";
    pub const REVIEW_DOCUMENT: &str = "reviewDocument";
    pub const INDEX_DOCUMENT: &str = "indexDocument";
}

/// Well-known work queues
pub mod work_queues {
    /// Crown Court Admin queue. Overrides any task-type default whenever
    /// the event's jurisdiction is CROWN.
    pub const CROWN_COURT_ADMIN: &str = "f03e0b9a-2b4f-4f22-9c1e-6c5a7d0d3b51";
}

/// Jurisdiction type values carried on hearing payloads
pub mod jurisdictions {
    pub const CROWN: &str = "CROWN";
    pub const MAGISTRATES: &str = "MAGISTRATES";
}

/// Application creator types that qualify a review task
pub mod creator_types {
    pub const PROSECUTOR: &str = "PROSECUTOR";
    pub const DEFENCE: &str = "DEFENCE";
}

/// Result-code sets for custodial-result detection
pub mod results {
    /// Result codes that indicate a custodial outcome for a defendant
    pub const CUSTODIAL_RESULT_CODES: &[&str] = &[
        "4012", "4016", "4017", "4046", "4560", "4561", "4562", "4563", "4564", "4565",
    ];

    /// Result codes that are invalid for transfer and therefore excluded
    /// from custodial detection even when they appear custodial
    pub const INVALID_FOR_TRANSFER_CODES: &[&str] = &["4017", "4565"];
}

/// Variable names shared by every derived variable map
pub mod variables {
    pub const LAST_UPDATED_BY_ID: &str = "lastUpdatedByID";
    pub const LAST_UPDATED_BY_NAME: &str = "lastUpdatedByName";
    pub const JURISDICTION: &str = "jurisdiction";
    pub const WORK_QUEUE: &str = "workQueue";
}

/// Namespace UUID under which composite business keys are derived.
///
/// Input is always `hearingId` then `caseId`, concatenated with no
/// separator, hashed as a name-based (v5) UUID under this namespace.
pub const BUSINESS_KEY_NAMESPACE: Uuid = uuid!("6f2cbb33-9c4d-5a6e-8b7f-0d1e2a3b4c5d");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custodial_codes_exclude_invalid_for_transfer_overlap() {
        // The exclusion set only makes sense if it names codes that would
        // otherwise count as custodial.
        for code in results::INVALID_FOR_TRANSFER_CODES {
            assert!(results::CUSTODIAL_RESULT_CODES.contains(code));
        }
    }

    #[test]
    fn test_business_key_namespace_is_stable() {
        assert_eq!(
            BUSINESS_KEY_NAMESPACE.to_string(),
            "6f2cbb33-9c4d-5a6e-8b7f-0d1e2a3b4c5d"
        );
    }
}
