//! Shared stubs and fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use caseflow_core::error::{CoreError, Result};
use caseflow_core::refdata::{
    CourtRoom, FeatureFlagService, ReferenceDataService, TaskDefinition, WorkingDayCalendar,
};
use caseflow_core::variables::ProcessVariables;
use caseflow_core::{DomainEvent, ProcessInstance, WorkflowEngine};
use chrono::{Datelike, NaiveDate, Weekday};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One recorded engine call
#[derive(Debug, Clone)]
pub struct StartRecord {
    pub definition_key: String,
    pub business_key: String,
    pub variables: ProcessVariables,
}

/// Workflow engine stub that records every start call and can be told to
/// fail for specific business keys.
#[derive(Default)]
pub struct RecordingEngine {
    starts: Mutex<Vec<StartRecord>>,
    failing_keys: Mutex<HashSet<String>>,
}

impl RecordingEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_for_key(&self, business_key: impl Into<String>) {
        self.failing_keys.lock().insert(business_key.into());
    }

    pub fn starts(&self) -> Vec<StartRecord> {
        self.starts.lock().clone()
    }

    pub fn start_count(&self) -> usize {
        self.starts.lock().len()
    }
}

#[async_trait]
impl WorkflowEngine for RecordingEngine {
    async fn start_process_instance_by_key(
        &self,
        process_definition_key: &str,
        business_key: &str,
        variables: ProcessVariables,
    ) -> Result<ProcessInstance> {
        if self.failing_keys.lock().contains(business_key) {
            return Err(CoreError::engine(
                "start_process_instance_by_key",
                format!("injected failure for {business_key}"),
            ));
        }
        let record = StartRecord {
            definition_key: process_definition_key.to_string(),
            business_key: business_key.to_string(),
            variables,
        };
        let mut starts = self.starts.lock();
        starts.push(record);
        Ok(ProcessInstance {
            id: format!("pi-{}", starts.len()),
            definition_key: process_definition_key.to_string(),
            business_key: business_key.to_string(),
        })
    }
}

/// Feature flags fixed at construction
pub struct StaticFlags {
    enabled: HashMap<String, bool>,
}

impl StaticFlags {
    pub fn all_enabled() -> Arc<Self> {
        Arc::new(Self {
            enabled: [
                ("public.progression.hearing-resulted", true),
                ("public.progression.hearing-listed", true),
                ("public.progression.application-created", true),
                ("public.progression.document-added", true),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        })
    }

    pub fn all_disabled() -> Arc<Self> {
        Arc::new(Self {
            enabled: HashMap::new(),
        })
    }
}

#[async_trait]
impl FeatureFlagService for StaticFlags {
    async fn is_enabled(&self, feature: &str) -> Result<bool> {
        Ok(self.enabled.get(feature).copied().unwrap_or(false))
    }
}

/// Reference data stub that serves synthetic task definitions and counts
/// every lookup, so tests can assert zero side effects.
#[derive(Default)]
pub struct CountingReferenceData {
    pub lookups: AtomicUsize,
    known_rooms: Mutex<HashSet<(String, String)>>,
}

impl CountingReferenceData {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_room(self: Arc<Self>, centre_id: &str, room_id: &str) -> Arc<Self> {
        self.known_rooms
            .lock()
            .insert((centre_id.to_string(), room_id.to_string()));
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReferenceDataService for CountingReferenceData {
    async fn task_definition(&self, task_type: &str) -> Result<Option<TaskDefinition>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(Some(TaskDefinition {
            task_type_id: format!("tt-{task_type}"),
            display_name: task_type.to_string(),
            deep_link_template: format!("https://tasks/{task_type}/{{id}}"),
            work_queue_id: format!("wq-{task_type}"),
            due_date_expression: String::new(),
            candidate_groups: vec![],
        }))
    }

    async fn court_room(&self, court_centre_id: &str, room_id: &str) -> Result<Option<CourtRoom>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let known = self
            .known_rooms
            .lock()
            .contains(&(court_centre_id.to_string(), room_id.to_string()));
        Ok(known.then(|| CourtRoom {
            id: room_id.to_string(),
            name: "Court 1".to_string(),
            court_centre_id: court_centre_id.to_string(),
        }))
    }
}

/// Weekday calendar with an optional holiday set
pub struct TestCalendar {
    holidays: HashSet<NaiveDate>,
}

impl TestCalendar {
    pub fn weekdays() -> Arc<Self> {
        Arc::new(Self {
            holidays: HashSet::new(),
        })
    }
}

#[async_trait]
impl WorkingDayCalendar for TestCalendar {
    async fn is_working_day(&self, date: NaiveDate) -> Result<bool> {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        Ok(!weekend && !self.holidays.contains(&date))
    }
}

/// Hearing-resulted event fixture: three cases with mixed statuses
pub fn hearing_resulted_event() -> DomainEvent {
    DomainEvent::new(
        "public.progression.hearing-resulted",
        json!({
            "hearing": {
                "id": "5f2d1a3c-90ab-4cde-8123-456789abcdef",
                "jurisdictionType": "CROWN",
                "hearingDate": "2026-08-07T09:30:00Z",
                "prosecutionCases": [
                    {
                        "id": "case-1",
                        "urn": "URN-A",
                        "status": "INACTIVE",
                        "defendants": [{
                            "id": "d-1",
                            "firstName": "Ada",
                            "lastName": "Lovelace",
                            "results": [{"code": "4560"}]
                        }]
                    },
                    {
                        "id": "case-2",
                        "urn": "URN-B",
                        "status": "INACTIVE",
                        "defendants": []
                    },
                    {
                        "id": "case-3",
                        "urn": "URN-C",
                        "status": "ACTIVE",
                        "defendants": [{
                            "id": "d-3",
                            "firstName": "Alan",
                            "lastName": "Turing",
                            "results": [{"code": "1002"}]
                        }]
                    }
                ]
            }
        }),
    )
}

/// Hearing-listed event fixture with no interpreter languages anywhere
pub fn hearing_listed_event_without_languages() -> DomainEvent {
    DomainEvent::new(
        "public.progression.hearing-listed",
        json!({
            "hearing": {
                "id": "hearing-listed-1",
                "jurisdictionType": "MAGISTRATES",
                "hearingDate": "2026-08-14T10:00:00Z",
                "courtCentre": {
                    "id": "centre-1",
                    "name": "City Magistrates",
                    "roomId": "room-3",
                    "roomName": "Court 3"
                },
                "prosecutionCases": [
                    {
                        "id": "case-1",
                        "urn": "URN-A",
                        "defendants": [
                            {"id": "d-1", "firstName": "Ada", "lastName": "Lovelace"}
                        ]
                    }
                ]
            }
        }),
    )
}

/// Application-created event fixture for the given creator type
pub fn application_created_event(creator_type: &str) -> DomainEvent {
    DomainEvent::new(
        "public.progression.application-created",
        json!({
            "application": {
                "id": "app-1",
                "caseId": "case-1",
                "applicationType": "ADJOURN",
                "creatorType": creator_type,
                "urgent": false
            }
        }),
    )
}

/// Document-added event fixture
pub fn document_added_event() -> DomainEvent {
    DomainEvent::new(
        "public.progression.document-added",
        json!({
            "caseId": "case-1",
            "caseUrn": "URN-A",
            "jurisdictionType": "MAGISTRATES",
            "document": {
                "id": "doc-1",
                "name": "MG5 Case Summary",
                "documentTypeId": "dt-mg5"
            }
        }),
    )
}
