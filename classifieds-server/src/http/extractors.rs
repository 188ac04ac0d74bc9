//! Custom Axum extractors
//!
//! Framework rejections (bad path id, unparseable body) are mapped to the
//! same error envelope the handlers use, so clients never see a bare
//! framework default.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value as JsonValue;

use super::error::ApiError;
use crate::models::{FieldError, FieldProblem, ValidationError};

/// Extract an advertisement id from the path
pub struct AdId(pub i64);

impl<S> FromRequestParts<S> for AdId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state).await.map_err(|_| {
            ApiError::Validation(ValidationError::Fields(vec![FieldError {
                field: "id",
                problem: FieldProblem::ExpectedInteger,
            }]))
        })?;

        Ok(Self(id))
    }
}

/// Extract the request body as raw JSON for field-level validation
pub struct JsonBody(pub JsonValue);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidJson))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::Validation(ValidationError::InvalidJson))?;

        Ok(Self(value))
    }
}
