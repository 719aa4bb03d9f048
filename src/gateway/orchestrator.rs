//! Event orchestration: guard evaluation, derivation, and fan-out.
//!
//! Each inbound event is handled by a single logical invocation. Guard 1 is
//! the feature flag for the event's logical name; when disabled the event
//! is fully ignored with zero derivation side effects. Guard 2 is the
//! per-process routing policy. Multi-case events fan out one start-process
//! call per derived business key; a failure on one key is isolated to that
//! key and never blocks or rolls back its siblings.

use super::engine::WorkflowEngine;
use super::policy::{self, ProcessProfile};
use crate::derivation::{
    application_created, composite_business_key, document_added, hearing_listed,
    hearing_resulted, DerivationContext,
};
use crate::error::Result;
use crate::events::dispatch::is_known_event_name;
use crate::events::{DomainEvent, KnownEvent};
use crate::identity::SystemIdentity;
use crate::logging::log_process_operation;
use crate::refdata::{FeatureFlagService, ReferenceDataService, WorkingDayCalendar};
use crate::variables::ProcessVariables;
use chrono::Utc;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// How the orchestrator disposed of an inbound event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDisposition {
    /// Name outside the dispatch table; nothing happened
    Ignored,
    /// Feature flag disabled; nothing happened
    FeatureDisabled,
    /// Guards passed and the event was derived and fanned out
    Processed,
}

/// Why a derived business key did not start a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The process's routing flag was false and its policy skips
    RoutingUnqualified,
}

/// Outcome of one derived business key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StartOutcome {
    Started {
        definition_key: String,
        business_key: String,
        process_instance_id: String,
    },
    Skipped {
        definition_key: String,
        business_key: String,
        reason: SkipReason,
    },
}

impl StartOutcome {
    pub fn business_key(&self) -> &str {
        match self {
            Self::Started { business_key, .. } | Self::Skipped { business_key, .. } => {
                business_key
            }
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// A per-entity failure, isolated from sibling entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityFailure {
    pub business_key: String,
    pub error: String,
}

/// Full outcome of handling one inbound event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOutcome {
    pub event_name: String,
    pub disposition: EventDisposition,
    pub starts: Vec<StartOutcome>,
    pub failures: Vec<EntityFailure>,
}

impl EventOutcome {
    fn without_work(event_name: &str, disposition: EventDisposition) -> Self {
        Self {
            event_name: event_name.to_string(),
            disposition,
            starts: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Count of processes actually started
    pub fn started_count(&self) -> usize {
        self.starts.iter().filter(|s| s.is_started()).count()
    }
}

/// The process instantiation gateway.
///
/// Collaborators are injected at construction; handlers share no mutable
/// state, so one orchestrator serves concurrent handler invocations.
pub struct EventOrchestrator {
    engine: Arc<dyn WorkflowEngine>,
    feature_flags: Arc<dyn FeatureFlagService>,
    reference_data: Arc<dyn ReferenceDataService>,
    calendar: Arc<dyn WorkingDayCalendar>,
    identity: SystemIdentity,
}

impl EventOrchestrator {
    pub fn new(
        engine: Arc<dyn WorkflowEngine>,
        feature_flags: Arc<dyn FeatureFlagService>,
        reference_data: Arc<dyn ReferenceDataService>,
        calendar: Arc<dyn WorkingDayCalendar>,
        identity: SystemIdentity,
    ) -> Self {
        Self {
            engine,
            feature_flags,
            reference_data,
            calendar,
            identity,
        }
    }

    /// Handle one inbound event end to end.
    ///
    /// Returns an error only for malformed payloads and feature-flag lookup
    /// failures; per-entity engine failures are collected in the outcome.
    pub async fn handle(&self, event: &DomainEvent) -> Result<EventOutcome> {
        if !is_known_event_name(&event.name) {
            info!(event_name = %event.name, "Event outside dispatch table - ignored");
            return Ok(EventOutcome::without_work(
                &event.name,
                EventDisposition::Ignored,
            ));
        }

        if !self.feature_flags.is_enabled(&event.name).await? {
            info!(event_name = %event.name, "Feature disabled - event ignored");
            return Ok(EventOutcome::without_work(
                &event.name,
                EventDisposition::FeatureDisabled,
            ));
        }

        let Some(known) = KnownEvent::classify(event)? else {
            // Unreachable given the name check above, but kept total
            return Ok(EventOutcome::without_work(
                &event.name,
                EventDisposition::Ignored,
            ));
        };

        let ctx = DerivationContext::new(
            self.reference_data.clone(),
            self.calendar.clone(),
            self.identity.clone(),
            Utc::now(),
        );

        let (starts, failures) = match &known {
            KnownEvent::HearingResulted(payload) => {
                self.handle_hearing_resulted(&ctx, payload).await
            }
            KnownEvent::HearingListed(payload) => {
                self.handle_hearing_listed(&ctx, payload).await
            }
            KnownEvent::ApplicationCreated(payload) => {
                self.handle_application_created(&ctx, payload).await
            }
            KnownEvent::DocumentAdded(payload) => {
                self.handle_document_added(&ctx, payload).await
            }
        };

        Ok(EventOutcome {
            event_name: event.name.clone(),
            disposition: EventDisposition::Processed,
            starts,
            failures,
        })
    }

    async fn handle_hearing_resulted(
        &self,
        ctx: &DerivationContext,
        payload: &crate::events::HearingResultedPayload,
    ) -> (Vec<StartOutcome>, Vec<EntityFailure>) {
        let hearing = &payload.hearing;

        // One independent start per case; failures must not block siblings,
        // so every case runs to a terminal per-key result.
        let attempts = join_all(hearing.prosecution_cases.iter().map(|case| async move {
            let business_key = composite_business_key(&hearing.id, &case.id);
            let variables =
                hearing_resulted::derive_case_variables(ctx, hearing, case).await;
            self.guarded_start(&policy::HEARING_RESULTED, &business_key, variables)
                .await
        }))
        .await;

        Self::partition(attempts)
    }

    async fn handle_hearing_listed(
        &self,
        ctx: &DerivationContext,
        payload: &crate::events::HearingListedPayload,
    ) -> (Vec<StartOutcome>, Vec<EntityFailure>) {
        let hearing = &payload.hearing;
        let variables = hearing_listed::derive_hearing_variables(ctx, hearing).await;
        let attempt = self
            .guarded_start(&policy::BOOK_INTERPRETER, &hearing.id, variables)
            .await;
        Self::partition(vec![attempt])
    }

    async fn handle_application_created(
        &self,
        ctx: &DerivationContext,
        payload: &crate::events::ApplicationCreatedPayload,
    ) -> (Vec<StartOutcome>, Vec<EntityFailure>) {
        let application = &payload.application;
        let variables =
            application_created::derive_application_variables(ctx, application).await;
        let attempt = self
            .guarded_start(&policy::REVIEW_APPLICATION, &application.id, variables)
            .await;
        Self::partition(vec![attempt])
    }

    async fn handle_document_added(
        &self,
        ctx: &DerivationContext,
        payload: &crate::events::DocumentAddedPayload,
    ) -> (Vec<StartOutcome>, Vec<EntityFailure>) {
        let variables = document_added::derive_document_variables(ctx, payload).await;
        let attempt = self
            .guarded_start(&policy::REVIEW_DOCUMENT, &payload.document.id, variables)
            .await;
        Self::partition(vec![attempt])
    }

    /// Apply the per-process policy, then delegate to the engine.
    async fn guarded_start(
        &self,
        profile: &ProcessProfile,
        business_key: &str,
        variables: ProcessVariables,
    ) -> std::result::Result<StartOutcome, EntityFailure> {
        if !profile.should_start(&variables) {
            log_process_operation(
                "start_process",
                profile.definition_key,
                Some(business_key),
                "skipped",
                Some("routing flag unqualified"),
            );
            return Ok(StartOutcome::Skipped {
                definition_key: profile.definition_key.to_string(),
                business_key: business_key.to_string(),
                reason: SkipReason::RoutingUnqualified,
            });
        }

        match self
            .engine
            .start_process_instance_by_key(profile.definition_key, business_key, variables)
            .await
        {
            Ok(instance) => {
                log_process_operation(
                    "start_process",
                    profile.definition_key,
                    Some(business_key),
                    "started",
                    Some(&instance.id),
                );
                Ok(StartOutcome::Started {
                    definition_key: profile.definition_key.to_string(),
                    business_key: business_key.to_string(),
                    process_instance_id: instance.id,
                })
            }
            Err(e) => {
                warn!(
                    process_definition_key = %profile.definition_key,
                    business_key = %business_key,
                    error = %e,
                    "Process start failed - isolated to this business key"
                );
                Err(EntityFailure {
                    business_key: business_key.to_string(),
                    error: e.to_string(),
                })
            }
        }
    }

    fn partition(
        attempts: Vec<std::result::Result<StartOutcome, EntityFailure>>,
    ) -> (Vec<StartOutcome>, Vec<EntityFailure>) {
        let mut starts = Vec::new();
        let mut failures = Vec::new();
        for attempt in attempts {
            match attempt {
                Ok(outcome) => starts.push(outcome),
                Err(failure) => failures.push(failure),
            }
        }
        (starts, failures)
    }
}
