//! # Reference Data Collaborators
//!
//! Traits for the external Reference Data / Directory services the core
//! consumes, and the resolver that turns per-task-type lookups into literal
//! variable values. Entries are fetched fresh per event and never cached
//! across events: queue routing and due dates may depend on jurisdiction,
//! date, or case attributes.

pub mod due_date;
pub mod resolver;

pub use due_date::DueDateExpression;
pub use resolver::TaskReferenceResolver;

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static task-type attributes held by the directory service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub task_type_id: String,
    pub display_name: String,
    /// Deep-link template; `{id}` is interpolated with the natural id
    pub deep_link_template: String,
    pub work_queue_id: String,
    /// Due-date expression, e.g. `+2BD`; empty means due as-of now
    pub due_date_expression: String,
    pub candidate_groups: Vec<String>,
}

/// A court room as known to the directory service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtRoom {
    pub id: String,
    pub name: String,
    pub court_centre_id: String,
}

/// Task-type and court-room lookups answered by the external directory
#[async_trait]
pub trait ReferenceDataService: Send + Sync {
    /// Look up the static attributes of a task type; `None` when unknown
    async fn task_definition(&self, task_type: &str) -> Result<Option<TaskDefinition>>;

    /// Resolve a court room within a court centre; `None` when unknown
    async fn court_room(&self, court_centre_id: &str, room_id: &str)
        -> Result<Option<CourtRoom>>;
}

/// Public-holiday aware working-day calendar.
///
/// Implementations answer `false` for weekends as well as holidays; the
/// due-date resolver never inspects weekdays itself.
#[async_trait]
pub trait WorkingDayCalendar: Send + Sync {
    async fn is_working_day(&self, date: NaiveDate) -> Result<bool>;
}

/// Per-event feature toggles keyed by logical event name
#[async_trait]
pub trait FeatureFlagService: Send + Sync {
    async fn is_enabled(&self, feature: &str) -> Result<bool>;
}
