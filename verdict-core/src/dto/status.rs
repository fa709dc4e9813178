//! Status API response DTOs
//!
//! The status API returns loosely-typed JSON. [`validate`] is the only
//! place that inspects it; everything downstream works on
//! [`StatusSnapshot`].

use serde::Deserialize;
use serde_json::Value;

use crate::domain::homework::ItemRecord;
use crate::error::{Result, ValidationError};

const HOMEWORKS_FIELD: &str = "homeworks";
const CURRENT_DATE_FIELD: &str = "current_date";

/// Validated status API response
///
/// Only the newest homework is kept in typed form; older entries are
/// counted but never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// First entry of the `homeworks` list (the API sorts newest first)
    pub latest: Option<ItemRecord>,
    /// Number of entries in the `homeworks` list
    pub count: usize,
    /// Server watermark to poll from next, if the API reported one
    pub current_date: Option<i64>,
}

impl StatusSnapshot {
    /// Most recently updated homework, if any
    pub fn latest(&self) -> Option<&ItemRecord> {
        self.latest.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Checks the shape of a raw status API response
///
/// # Errors
/// * [`ValidationError::Shape`] if the response is not an object, or the
///   newest homework entry / `current_date` has the wrong type
/// * [`ValidationError::MissingField`] if `homeworks` is absent or null
/// * [`ValidationError::NotASequence`] if `homeworks` is not a list
///
/// An empty `homeworks` list is a valid response.
pub fn validate(raw: &Value) -> Result<StatusSnapshot> {
    let record = raw.as_object().ok_or_else(|| {
        ValidationError::Shape(format!("expected an object, got {}", json_kind(raw)))
    })?;

    let items = match record.get(HOMEWORKS_FIELD) {
        None | Some(Value::Null) => return Err(ValidationError::MissingField(HOMEWORKS_FIELD)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::NotASequence),
    };

    let latest = items.first().map(item_record).transpose()?;

    let current_date = match record.get(CURRENT_DATE_FIELD) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or_else(|| {
            ValidationError::Shape(format!(
                "`{}` is {}, expected an integer",
                CURRENT_DATE_FIELD,
                json_kind(value)
            ))
        })?),
    };

    Ok(StatusSnapshot {
        latest,
        count: items.len(),
        current_date,
    })
}

fn item_record(item: &Value) -> Result<ItemRecord> {
    if !item.is_object() {
        return Err(ValidationError::Shape(format!(
            "homework is {}, expected an object",
            json_kind(item)
        )));
    }

    ItemRecord::deserialize(item).map_err(|e| ValidationError::Shape(format!("homework: {}", e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
