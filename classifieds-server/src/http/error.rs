//! API error types with IntoResponse
//!
//! Every domain failure is converted into the uniform error envelope
//! `{"status": "error", "description": <string|list>}` with the matching
//! status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Advertisement not found (404)
    NotFound { id: i64 },

    /// Title uniqueness violated (409)
    Conflict { title: String },

    /// Database error (500, logged)
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, description) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.description()),
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                format!("advertisement {} not found", id).into(),
            ),
            Self::Conflict { title } => (
                StatusCode::CONFLICT,
                format!("title '{}' already exists", title).into(),
            ),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".into(),
                )
            }
        };

        let body = Json(json!({
            "status": "error",
            "description": description
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { id } => Self::NotFound { id },
            DbError::DuplicateTitle { title } => Self::Conflict { title },
            DbError::Sqlx(e) => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldError, FieldProblem};
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        serde_json::from_slice(&bytes).expect("body was not JSON")
    }

    #[tokio::test]
    async fn validation_error_is_400_with_field_list() {
        let err = ApiError::Validation(ValidationError::Fields(vec![FieldError {
            field: "title",
            problem: FieldProblem::MissingRequiredField,
        }]));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["description"][0]["field"], "title");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound { id: 42 };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["description"], "advertisement 42 not found");
    }

    #[tokio::test]
    async fn conflict_is_409_and_names_the_title() {
        let err = ApiError::Conflict {
            title: "Sale".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["description"], "title 'Sale' already exists");
    }

    #[tokio::test]
    async fn database_error_is_500_with_generic_message() {
        let err = ApiError::Database(sqlx::Error::PoolClosed);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["description"], "an internal error occurred");
    }
}
