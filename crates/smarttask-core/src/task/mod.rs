//! Task records as exchanged with the scoring API.
//!
//! A record is whatever JSON value the user or the backend supplied. Nothing
//! is validated up front; instead every recognized field has one accessor
//! here that resolves missing or malformed values to a documented default.
//! Unknown fields are kept untouched so they round-trip to the backend.

pub mod fields;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

pub use fields::{number, number_or, text, text_or};

/// Title shown when a record has none.
pub const DEFAULT_TITLE: &str = "Untitled Task";

/// Stand-in due date for records without one. Sorts after any real date.
pub const DUE_DATE_SENTINEL: &str = "9999-12-31";

/// Importance assumed for the priority badge when none is given.
pub const DEFAULT_BADGE_IMPORTANCE: f64 = 5.0;

/// Explanation shown when the backend did not provide one.
pub const DEFAULT_EXPLANATION: &str =
    "This task has been scored based on urgency, importance, effort, and dependencies.";

/// One task, identified only by its position in a sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRecord(Value);

impl TaskRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Raw field lookup. `null` counts as absent; non-object records have
    /// no fields at all.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    pub fn title(&self) -> Cow<'_, str> {
        text_or(self.field("title"), DEFAULT_TITLE)
    }

    /// Backend score, if the record carries a numeric one.
    pub fn score(&self) -> Option<f64> {
        number(self.field("score"))
    }

    /// Score used as a sort key (missing -> 0).
    pub fn sort_score(&self) -> f64 {
        number_or(self.field("score"), 0.0)
    }

    /// Importance used as a sort key (missing -> 0).
    pub fn sort_importance(&self) -> f64 {
        number_or(self.field("importance"), 0.0)
    }

    /// Importance used to pick the priority badge (missing -> 5).
    pub fn badge_importance(&self) -> f64 {
        number_or(self.field("importance"), DEFAULT_BADGE_IMPORTANCE)
    }

    /// Estimated effort used as a sort key (missing -> 0).
    pub fn sort_hours(&self) -> f64 {
        number_or(self.field("estimated_hours"), 0.0)
    }

    /// Due date text, when present. Numbers other than zero are shown
    /// as typed.
    pub fn due_date(&self) -> Option<Cow<'_, str>> {
        text(self.field("due_date"))
    }

    /// Due date as a raw string sort key; missing dates map to the sentinel.
    pub fn deadline_key(&self) -> Cow<'_, str> {
        text_or(self.field("due_date"), DUE_DATE_SENTINEL)
    }

    /// Estimated hours exactly as supplied, for display.
    ///
    /// Any non-null value is shown: numbers compactly, strings verbatim,
    /// anything else as its JSON text.
    pub fn estimate_text(&self) -> Option<Cow<'_, str>> {
        match self.field("estimated_hours")? {
            Value::Number(n) => Some(Cow::Owned(fields::format_number(n))),
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    pub fn explanation(&self) -> Cow<'_, str> {
        text_or(self.field("explanation"), DEFAULT_EXPLANATION)
    }
}

impl From<Value> for TaskRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<TaskRecord> for Value {
    fn from(task: TaskRecord) -> Self {
        task.0
    }
}
