//! Validation error types

use std::fmt;

use serde::Serialize;

/// A single problem with a single payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    /// Required field absent (or explicitly null)
    MissingRequiredField,

    /// Field present but not a string
    ExpectedString,

    /// Path parameter was not an integer
    ExpectedInteger,
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField => write!(f, "missing required field"),
            Self::ExpectedString => write!(f, "expected string"),
            Self::ExpectedInteger => write!(f, "expected integer"),
        }
    }
}

/// Per-field validation failure, serialized into the 400 error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body could not be parsed as JSON at all
    InvalidJson,

    /// Body was valid JSON but not an object
    NotAnObject,

    /// One or more fields failed validation
    Fields(Vec<FieldError>),
}

impl ValidationError {
    /// Machine-readable description for the error envelope:
    /// a string for non-object bodies, a `{field, problem}` list otherwise.
    pub fn description(&self) -> serde_json::Value {
        match self {
            Self::InvalidJson => "request body must be valid JSON".into(),
            Self::NotAnObject => "request body must be a JSON object".into(),
            Self::Fields(errors) => {
                serde_json::to_value(errors).unwrap_or_else(|_| self.to_string().into())
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "request body must be valid JSON"),
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::Fields(errors) => {
                let mut first = true;
                for e in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", e.field, e.problem)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}
