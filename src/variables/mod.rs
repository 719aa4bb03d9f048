//! # Process Variables
//!
//! The typed key-value map handed to the Workflow Engine when a process
//! instance starts, plus the two-level `(taskName, attribute)` scheme used
//! when one workflow creates several same-shaped tasks that must not share
//! reference-data values.
//!
//! Missing optional payload fields always map to empty strings, never null,
//! so the engine's variable typing stays stable across events.

use crate::constants::variables as names;
use crate::identity::SystemIdentity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single typed process variable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Text(String),
    Flag(bool),
    TextList(Vec<String>),
}

impl VariableValue {
    /// Text content, if this is a text variable
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean content, if this is a flag variable
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// List content, if this is a list variable
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for VariableValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

/// The flat variable map passed to the Workflow Engine at process start.
///
/// Invariant: every map carries the audit pair (`lastUpdatedByID`,
/// `lastUpdatedByName`), enforced by construction via [`ProcessVariables::for_identity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessVariables {
    values: HashMap<String, VariableValue>,
}

impl ProcessVariables {
    /// Create a variable map seeded with the audit attribution pair
    pub fn for_identity(identity: &SystemIdentity) -> Self {
        let mut values = HashMap::new();
        values.insert(
            names::LAST_UPDATED_BY_ID.to_string(),
            VariableValue::Text(identity.user_id.to_string()),
        );
        values.insert(
            names::LAST_UPDATED_BY_NAME.to_string(),
            VariableValue::Text(identity.user_name.clone()),
        );
        Self { values }
    }

    /// Set a variable, replacing any previous value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<VariableValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Set a text variable from an optional source, defaulting to empty string
    pub fn set_opt_text(&mut self, name: impl Into<String>, value: Option<&str>) {
        self.set(name, value.unwrap_or_default());
    }

    /// Get a variable by name
    pub fn get(&self, name: &str) -> Option<&VariableValue> {
        self.values.get(name)
    }

    /// Text value of a variable, if present and text-typed
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(VariableValue::as_text)
    }

    /// Flag value of a variable, if present and flag-typed
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(VariableValue::as_flag)
    }

    /// Number of variables in the map
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the audit attribution pair is present
    pub fn has_audit_pair(&self) -> bool {
        self.values.contains_key(names::LAST_UPDATED_BY_ID)
            && self.values.contains_key(names::LAST_UPDATED_BY_NAME)
    }

    /// Merge a per-task attribute set into this map under prefixed names.
    ///
    /// This is the only place the two-level `(taskName, attribute)` model is
    /// flattened into `<taskName>_<attribute>` string keys.
    pub fn merge_task(&mut self, task: TaskVariables) {
        for (attribute, value) in task.attributes {
            self.values
                .insert(format!("{}_{}", task.task_name, attribute), value);
        }
    }

    /// Iterate over all variables
    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariableValue)> {
        self.values.iter()
    }
}

/// Attribute set for one named task, kept two-level until the engine boundary
#[derive(Debug, Clone, PartialEq)]
pub struct TaskVariables {
    task_name: String,
    attributes: HashMap<String, VariableValue>,
}

impl TaskVariables {
    pub fn new(task_name: impl Into<String>) -> Self {
        Self {
            task_name: task_name.into(),
            attributes: HashMap::new(),
        }
    }

    /// Set an attribute for this task
    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<VariableValue>) {
        self.attributes.insert(attribute.into(), value.into());
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Read an attribute back before flattening
    pub fn get(&self, attribute: &str) -> Option<&VariableValue> {
        self.attributes.get(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_pair_present_by_construction() {
        let vars = ProcessVariables::for_identity(&SystemIdentity::system());
        assert!(vars.has_audit_pair());
        assert_eq!(
            vars.text(names::LAST_UPDATED_BY_NAME),
            Some("Case Progression System")
        );
    }

    #[test]
    fn test_missing_optional_fields_become_empty_strings() {
        let mut vars = ProcessVariables::for_identity(&SystemIdentity::system());
        vars.set_opt_text("defendantName", None);
        assert_eq!(vars.text("defendantName"), Some(""));
    }

    #[test]
    fn test_task_variables_flatten_with_prefix() {
        let mut vars = ProcessVariables::for_identity(&SystemIdentity::system());

        let mut review = TaskVariables::new("reviewResults");
        review.set("deepLink", "https://tasks/review/123");
        review.set("taskTypeId", "tt-review");

        let mut transfer = TaskVariables::new("transferToCrown");
        transfer.set("deepLink", "https://tasks/transfer/123");
        transfer.set("taskTypeId", "tt-transfer");

        vars.merge_task(review);
        vars.merge_task(transfer);

        assert_eq!(
            vars.text("reviewResults_deepLink"),
            Some("https://tasks/review/123")
        );
        assert_eq!(
            vars.text("transferToCrown_deepLink"),
            Some("https://tasks/transfer/123")
        );
        assert_eq!(vars.text("reviewResults_taskTypeId"), Some("tt-review"));
        assert_eq!(vars.text("transferToCrown_taskTypeId"), Some("tt-transfer"));
    }

    #[test]
    fn test_variable_value_serializes_untagged() {
        let text: VariableValue = "CROWN".into();
        let flag: VariableValue = true.into();
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"CROWN\"");
        assert_eq!(serde_json::to_string(&flag).unwrap(), "true");
    }
}
