//! Request body shapes and identifier parsing shared by the handlers.

use super::error::ApiError;
use crate::kanban::domain::KanbanDomainError;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Body of board create and update requests.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct BoardPayload {
    pub(super) title: Option<Value>,
    pub(super) description: Option<Value>,
    pub(super) owner: Option<Value>,
}

/// Body of list create and update requests.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ListPayload {
    pub(super) title: Option<Value>,
}

/// Body of the list reorder request.
///
/// Indices stay loosely typed so that [`splice_index`] can coerce them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct ReorderPayload {
    pub(super) source_index: Option<Value>,
    pub(super) destination_index: Option<Value>,
}

/// Body of task create and update requests.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct TaskPayload {
    pub(super) title: Option<Value>,
    pub(super) description: Option<Value>,
    pub(super) completed: Option<bool>,
    pub(super) new_list_id: Option<String>,
}

/// Extracts a string field, rejecting absent and non-string values.
pub(super) fn required_text(
    value: Option<Value>,
    invalid: KanbanDomainError,
) -> Result<String, KanbanDomainError> {
    match value {
        Some(Value::String(text)) => Ok(text),
        _ => Err(invalid),
    }
}

/// Extracts an optional text field.
///
/// Numbers and booleans are stored as their JSON text. `null` counts as
/// absent; arrays and objects are rejected with `invalid`.
pub(super) fn optional_text(
    value: Option<Value>,
    invalid: KanbanDomainError,
) -> Result<Option<String>, KanbanDomainError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(invalid),
    }
}

/// Coerces a reorder index to an integer the way array splicing does.
///
/// Absent, `null`, non-numeric and `NaN` values become `0`. Fractions
/// truncate toward zero, so `1.0` and `1.9` both address index `1`. Numeric
/// strings and booleans are read as numbers.
pub(super) fn splice_index(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .unwrap_or_else(|| truncate(number.as_f64().unwrap_or_default())),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0
            } else {
                trimmed.parse::<f64>().map_or(0, truncate)
            }
        }
        Some(Value::Bool(flag)) => i64::from(*flag),
        _ => 0,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "splice indices truncate toward zero; the cast saturates and maps NaN to 0"
)]
const fn truncate(value: f64) -> i64 {
    value as i64
}

/// Parses a path or body identifier.
pub(super) fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = KanbanDomainError>,
{
    Ok(raw.parse::<T>()?)
}
