//! Task reference resolution.
//!
//! Turns a task-type lookup into the concrete attribute set a workflow
//! needs: interpolated deep link, work queue, resolved due date, candidate
//! groups. A lookup that fails or finds nothing degrades to a best-effort
//! entry with empty optional fields so tasks stay creatable with manual
//! follow-up.

use super::due_date::DueDateExpression;
use super::{ReferenceDataService, TaskDefinition, WorkingDayCalendar};
use crate::logging::log_reference_data_warning;
use crate::variables::TaskVariables;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fully resolved reference attributes for one task type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskReferenceEntry {
    pub task_type_id: String,
    pub task_display_name: String,
    pub deep_link: String,
    pub work_queue_id: String,
    /// Literal ISO-8601 due timestamp; empty when no expression applied
    pub due_date: String,
    pub candidate_groups: Vec<String>,
}

impl TaskReferenceEntry {
    /// Write this entry under bare variable names, for workflows that
    /// create a single task and need no prefix scheme.
    pub fn write_unprefixed(&self, vars: &mut crate::variables::ProcessVariables) {
        vars.set("taskTypeId", self.task_type_id.clone());
        vars.set("taskName", self.task_display_name.clone());
        vars.set("deepLink", self.deep_link.clone());
        vars.set("dueDate", self.due_date.clone());
        vars.set("candidateGroups", self.candidate_groups.clone());
    }

    /// Convert into the two-level task attribute set used for prefixed
    /// variable emission.
    pub fn into_task_variables(self, task_name: &str) -> TaskVariables {
        let mut task = TaskVariables::new(task_name);
        task.set("taskTypeId", self.task_type_id);
        task.set("taskName", self.task_display_name);
        task.set("deepLink", self.deep_link);
        task.set("workQueue", self.work_queue_id);
        task.set("dueDate", self.due_date);
        task.set("candidateGroups", self.candidate_groups);
        task
    }
}

/// Resolves task-type reference data fresh for each event
#[derive(Clone)]
pub struct TaskReferenceResolver {
    reference_data: Arc<dyn ReferenceDataService>,
    calendar: Arc<dyn WorkingDayCalendar>,
}

impl TaskReferenceResolver {
    pub fn new(
        reference_data: Arc<dyn ReferenceDataService>,
        calendar: Arc<dyn WorkingDayCalendar>,
    ) -> Self {
        Self {
            reference_data,
            calendar,
        }
    }

    /// Resolve the reference entry for a task type.
    ///
    /// `natural_id` interpolates the deep-link template; `as_of` anchors
    /// due-date resolution. Never fails: degraded lookups produce an entry
    /// whose optional fields are empty, with a warning logged.
    pub async fn resolve(
        &self,
        task_type: &str,
        natural_id: &str,
        as_of: DateTime<Utc>,
    ) -> TaskReferenceEntry {
        let definition = match self.reference_data.task_definition(task_type).await {
            Ok(Some(definition)) => definition,
            Ok(None) => {
                log_reference_data_warning("task_definition", task_type, "not found");
                return Self::fallback_entry(task_type);
            }
            Err(e) => {
                log_reference_data_warning("task_definition", task_type, &e.to_string());
                return Self::fallback_entry(task_type);
            }
        };

        let due_date = self.resolve_due_date(task_type, &definition, as_of).await;

        TaskReferenceEntry {
            task_type_id: definition.task_type_id,
            task_display_name: definition.display_name,
            deep_link: Self::interpolate(&definition.deep_link_template, natural_id),
            work_queue_id: definition.work_queue_id,
            due_date,
            candidate_groups: definition.candidate_groups,
        }
    }

    async fn resolve_due_date(
        &self,
        task_type: &str,
        definition: &TaskDefinition,
        as_of: DateTime<Utc>,
    ) -> String {
        let expression = match definition.due_date_expression.parse::<DueDateExpression>() {
            Ok(expression) => expression,
            Err(reason) => {
                log_reference_data_warning("due_date_expression", task_type, &reason);
                DueDateExpression::AsOf
            }
        };

        match expression.resolve(as_of, self.calendar.as_ref()).await {
            Ok(due) => due.to_rfc3339_opts(SecondsFormat::Secs, true),
            Err(e) => {
                log_reference_data_warning("working_day_calendar", task_type, &e.to_string());
                as_of.to_rfc3339_opts(SecondsFormat::Secs, true)
            }
        }
    }

    fn interpolate(template: &str, natural_id: &str) -> String {
        template.replace("{id}", natural_id)
    }

    fn fallback_entry(task_type: &str) -> TaskReferenceEntry {
        TaskReferenceEntry {
            task_type_id: String::new(),
            task_display_name: task_type.to_string(),
            deep_link: String::new(),
            work_queue_id: String::new(),
            due_date: String::new(),
            candidate_groups: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use async_trait::async_trait;
    use chrono::{Datelike, NaiveDate, TimeZone, Weekday};
    use std::collections::HashMap;

    struct StubReferenceData {
        definitions: HashMap<String, TaskDefinition>,
    }

    #[async_trait]
    impl ReferenceDataService for StubReferenceData {
        async fn task_definition(&self, task_type: &str) -> Result<Option<TaskDefinition>> {
            Ok(self.definitions.get(task_type).cloned())
        }

        async fn court_room(
            &self,
            _court_centre_id: &str,
            _room_id: &str,
        ) -> Result<Option<super::super::CourtRoom>> {
            Ok(None)
        }
    }

    struct WeekdayCalendar;

    #[async_trait]
    impl WorkingDayCalendar for WeekdayCalendar {
        async fn is_working_day(&self, date: NaiveDate) -> Result<bool> {
            Ok(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
        }
    }

    fn resolver_with(definitions: HashMap<String, TaskDefinition>) -> TaskReferenceResolver {
        TaskReferenceResolver::new(
            Arc::new(StubReferenceData { definitions }),
            Arc::new(WeekdayCalendar),
        )
    }

    #[tokio::test]
    async fn test_resolves_deep_link_and_due_date() {
        let mut definitions = HashMap::new();
        definitions.insert(
            "reviewResults".to_string(),
            TaskDefinition {
                task_type_id: "tt-42".to_string(),
                display_name: "Review results".to_string(),
                deep_link_template: "https://tasks/cases/{id}/results".to_string(),
                work_queue_id: "wq-listing".to_string(),
                due_date_expression: "+1BD".to_string(),
                candidate_groups: vec!["listing-officers".to_string()],
            },
        );
        let resolver = resolver_with(definitions);

        // Friday; +1BD is Monday
        let as_of = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();
        let entry = resolver.resolve("reviewResults", "case-7", as_of).await;

        assert_eq!(entry.deep_link, "https://tasks/cases/case-7/results");
        assert_eq!(entry.work_queue_id, "wq-listing");
        assert!(entry.due_date.starts_with("2026-08-10"));
    }

    #[tokio::test]
    async fn test_unknown_task_type_degrades_to_fallback_entry() {
        let resolver = resolver_with(HashMap::new());
        let as_of = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();

        let entry = resolver.resolve("unheardOfTask", "id-1", as_of).await;
        assert_eq!(entry.task_display_name, "unheardOfTask");
        assert_eq!(entry.task_type_id, "");
        assert_eq!(entry.deep_link, "");
        assert_eq!(entry.due_date, "");
    }

    #[tokio::test]
    async fn test_entry_flattens_into_prefixed_task_variables() {
        let mut definitions = HashMap::new();
        definitions.insert(
            "indexDocument".to_string(),
            TaskDefinition {
                task_type_id: "tt-9".to_string(),
                display_name: "Index document".to_string(),
                deep_link_template: "https://tasks/documents/{id}".to_string(),
                work_queue_id: "wq-registry".to_string(),
                due_date_expression: String::new(),
                candidate_groups: vec![],
            },
        );
        let resolver = resolver_with(definitions);
        let as_of = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();

        let entry = resolver.resolve("indexDocument", "doc-3", as_of).await;
        let task = entry.into_task_variables("indexDocument");
        assert_eq!(
            task.get("deepLink").and_then(|v| v.as_text()),
            Some("https://tasks/documents/doc-3")
        );
        assert_eq!(task.get("workQueue").and_then(|v| v.as_text()), Some("wq-registry"));
    }
}
