//! Payload validation for create and update requests.
//!
//! # Responsibilities
//! - Turn a raw JSON body into a `NewProject` or `ProjectPatch`
//! - Apply create checks in a fixed order; the first failure wins
//! - Re-check every field an update touches
//!
//! # Design Decisions
//! - Presence follows JSON truthiness: absent, `null`, `false`, `0` and `""`
//!   all count as missing on create
//! - A body that is not an object has no fields
//! - Any JSON number is a valid priority and is stored exactly as sent
//! - `id`, `createdAt` and unknown keys never reach a `ProjectPatch`

use serde_json::{Map, Number, Value};

use crate::projects::error::ValidationError;
use crate::projects::types::{NewProject, ProjectPatch, ProjectStatus};

/// Validate a create payload.
///
/// Check order: required fields, numeric priority, status membership,
/// then the text fields.
pub fn validate_new_project(body: &Value) -> Result<NewProject, ValidationError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let title = fields.get("title");
    let priority = fields.get("priority");
    let status = fields.get("status");

    if !is_truthy(title) || !is_truthy(priority) || !is_truthy(status) {
        return Err(ValidationError::MissingRequiredFields);
    }

    let priority = priority
        .and_then(as_priority)
        .ok_or(ValidationError::PriorityNotNumeric)?;

    let status = status
        .and_then(Value::as_str)
        .and_then(ProjectStatus::from_label)
        .ok_or(ValidationError::InvalidStatus)?;

    let title = title
        .and_then(Value::as_str)
        .ok_or(ValidationError::InvalidTitle)?
        .to_string();

    let description = match fields.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(ValidationError::InvalidDescription),
    };

    Ok(NewProject {
        title,
        description,
        priority,
        status,
    })
}

/// Validate an update patch.
///
/// `null` means "not provided", except for `description` where it clears
/// the stored value.
pub fn validate_patch(body: &Value) -> Result<ProjectPatch, ValidationError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);
    let mut patch = ProjectPatch::default();

    match fields.get("title") {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if !s.is_empty() => patch.title = Some(s.clone()),
        Some(_) => return Err(ValidationError::InvalidTitle),
    }

    match fields.get("description") {
        None => {}
        Some(Value::Null) => patch.description = Some(None),
        Some(Value::String(s)) => patch.description = Some(Some(s.clone())),
        Some(_) => return Err(ValidationError::InvalidDescription),
    }

    match fields.get("priority") {
        None | Some(Value::Null) => {}
        Some(value) => {
            patch.priority = Some(as_priority(value).ok_or(ValidationError::PriorityNotNumeric)?);
        }
    }

    match fields.get("status") {
        None | Some(Value::Null) => {}
        Some(value) => {
            let status = value
                .as_str()
                .and_then(ProjectStatus::from_label)
                .ok_or(ValidationError::InvalidStatus)?;
            patch.status = Some(status);
        }
    }

    Ok(patch)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn as_priority(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}
