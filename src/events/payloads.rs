//! Typed payload documents, one per inbound event name.
//!
//! Payloads arrive as camelCase JSON with a documented, versioned schema.
//! Optional nodes stay `Option` here; derivation is responsible for turning
//! absent values into the empty-string/false defaults the Workflow Engine
//! expects, so deserialization never fails on a partial document.

use serde::{Deserialize, Serialize};

/// A court centre and the room a hearing sits in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtCentre {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub room_name: Option<String>,
}

/// One result recorded against a defendant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefendantResult {
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// A defendant on a prosecution case
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defendant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Language the defendant needs an interpreter for, when any
    #[serde(default)]
    pub interpreter_language: Option<String>,
    #[serde(default)]
    pub results: Vec<DefendantResult>,
}

/// A prosecution case attached to a hearing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProsecutionCase {
    pub id: String,
    #[serde(default)]
    pub urn: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub defendants: Vec<Defendant>,
}

/// The hearing node shared by hearing-listed and hearing-resulted events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub id: String,
    #[serde(default)]
    pub jurisdiction_type: Option<String>,
    #[serde(default)]
    pub hearing_date: Option<String>,
    #[serde(default)]
    pub court_centre: Option<CourtCentre>,
    #[serde(default)]
    pub prosecution_cases: Vec<ProsecutionCase>,
}

/// Payload of `public.progression.hearing-resulted`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingResultedPayload {
    pub hearing: Hearing,
}

/// Payload of `public.progression.hearing-listed`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingListedPayload {
    pub hearing: Hearing,
}

/// The application node of an application-created event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtApplication {
    pub id: String,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub application_type: Option<String>,
    /// Who raised the application: PROSECUTOR, DEFENCE, or an internal type
    #[serde(default)]
    pub creator_type: Option<String>,
    /// Urgent applications produce a task due immediately
    #[serde(default)]
    pub urgent: bool,
}

/// Payload of `public.progression.application-created`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCreatedPayload {
    pub application: CourtApplication,
}

/// The document node of a document-added event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDocument {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub document_type_id: Option<String>,
}

/// Payload of `public.progression.document-added`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAddedPayload {
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub case_urn: Option<String>,
    #[serde(default)]
    pub jurisdiction_type: Option<String>,
    pub document: CaseDocument,
}

impl Hearing {
    /// Whether this hearing sits in the Crown Court
    pub fn is_crown(&self) -> bool {
        self.jurisdiction_type.as_deref() == Some(crate::constants::jurisdictions::CROWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hearing_payload_tolerates_partial_documents() {
        let payload: HearingResultedPayload = serde_json::from_value(json!({
            "hearing": {
                "id": "7d9f5a2e-1111-4eee-9c3b-aaa111bbb222",
                "prosecutionCases": [
                    {"id": "case-1", "defendants": [{"firstName": "Ada"}]}
                ]
            }
        }))
        .unwrap();

        let case = &payload.hearing.prosecution_cases[0];
        assert_eq!(case.urn, None);
        assert_eq!(case.defendants[0].last_name, None);
        assert!(case.defendants[0].results.is_empty());
        assert!(!payload.hearing.is_crown());
    }

    #[test]
    fn test_jurisdiction_detection() {
        let hearing: Hearing = serde_json::from_value(json!({
            "id": "h-1",
            "jurisdictionType": "CROWN"
        }))
        .unwrap();
        assert!(hearing.is_crown());
    }

    #[test]
    fn test_application_defaults_not_urgent() {
        let payload: ApplicationCreatedPayload = serde_json::from_value(json!({
            "application": {"id": "app-1", "creatorType": "PROSECUTOR"}
        }))
        .unwrap();
        assert!(!payload.application.urgent);
    }
}
