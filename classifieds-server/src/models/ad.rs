//! Request payload validation for advertisements
//!
//! Payloads arrive as raw JSON and are checked field by field so a 400
//! response can name every problem at once, rather than failing on the
//! first bad field.

use serde_json::{Map, Value as JsonValue};

use super::{FieldError, FieldProblem, ValidationError};

/// Validated create payload: all three fields required strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAd {
    pub owner: String,
    pub title: String,
    pub description: String,
}

impl CreateAd {
    pub fn from_json(body: &JsonValue) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        let mut errors = Vec::new();
        let owner = required_string(map, "owner", &mut errors);
        let title = required_string(map, "title", &mut errors);
        let description = required_string(map, "description", &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors));
        }

        // All three are Some when no errors were recorded
        Ok(Self {
            owner: owner.unwrap_or_default(),
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        })
    }
}

/// Validated partial-update payload: any subset of the create fields.
///
/// A `null` value counts as absent; only present, non-null fields are
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdPatch {
    pub owner: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl AdPatch {
    pub fn from_json(body: &JsonValue) -> Result<Self, ValidationError> {
        let map = as_object(body)?;

        let mut errors = Vec::new();
        let owner = optional_string(map, "owner", &mut errors);
        let title = optional_string(map, "title", &mut errors);
        let description = optional_string(map, "description", &mut errors);

        if !errors.is_empty() {
            return Err(ValidationError::Fields(errors));
        }

        Ok(Self {
            owner,
            title,
            description,
        })
    }

    /// True when no field would be applied.
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.title.is_none() && self.description.is_none()
    }
}

fn as_object(body: &JsonValue) -> Result<&Map<String, JsonValue>, ValidationError> {
    body.as_object().ok_or(ValidationError::NotAnObject)
}

fn required_string(
    map: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        None | Some(JsonValue::Null) => {
            errors.push(FieldError {
                field,
                problem: FieldProblem::MissingRequiredField,
            });
            None
        }
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError {
                field,
                problem: FieldProblem::ExpectedString,
            });
            None
        }
    }
}

fn optional_string(
    map: &Map<String, JsonValue>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError {
                field,
                problem: FieldProblem::ExpectedString,
            });
            None
        }
    }
}
