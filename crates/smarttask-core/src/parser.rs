//! Reads task records out of user-supplied text.

use serde_json::Value;

use crate::error::ParseError;
use crate::task::TaskRecord;

/// Parse raw input into task records.
///
/// Accepts a JSON array of tasks or an object with a `tasks` array. Blank
/// input is an empty task list, not an error.
pub fn parse_tasks(raw: &str) -> Result<Vec<TaskRecord>, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let data: Value = serde_json::from_str(raw).map_err(ParseError::Decode)?;
    match data {
        Value::Array(items) => Ok(into_records(items)),
        Value::Object(mut map) => match map.remove("tasks") {
            Some(Value::Array(items)) => Ok(into_records(items)),
            _ => Err(ParseError::Shape),
        },
        _ => Err(ParseError::Shape),
    }
}

fn into_records(items: Vec<Value>) -> Vec<TaskRecord> {
    items.into_iter().map(TaskRecord::from).collect()
}
