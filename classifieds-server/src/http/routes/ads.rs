//! Advertisement endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::db::{Ad, AdRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{AdId, JsonBody};
use crate::http::server::AppState;
use crate::models::{AdPatch, CreateAd};

/// Full advertisement response
///
/// The wire format labels `owner` as `user`, kept for client
/// compatibility.
#[derive(Debug, Serialize)]
pub struct AdResponse {
    pub id: i64,
    #[serde(rename = "user")]
    pub owner: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 / RFC 3339
    pub creation_time: String,
}

impl From<Ad> for AdResponse {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            owner: ad.owner,
            title: ad.title,
            description: ad.description,
            creation_time: ad.creation_time.to_rfc3339(),
        }
    }
}

/// Create response: just the generated id
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

/// POST /ad/ - create an advertisement
async fn create_ad(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<Json<CreatedResponse>, ApiError> {
    let ad = CreateAd::from_json(&body)?;
    let id = AdRepo::new(&state.pool).create(&ad).await?;
    Ok(Json(CreatedResponse { id }))
}

/// GET /ad/{id} - fetch a single advertisement
async fn get_ad(
    AdId(id): AdId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AdResponse>, ApiError> {
    let ad = AdRepo::new(&state.pool).get(id).await?;
    Ok(Json(AdResponse::from(ad)))
}

/// PATCH /ad/{id} - apply a partial update, returning the full record
async fn update_ad(
    AdId(id): AdId,
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<Json<AdResponse>, ApiError> {
    let patch = AdPatch::from_json(&body)?;
    let ad = AdRepo::new(&state.pool).update(id, &patch).await?;
    Ok(Json(AdResponse::from(ad)))
}

/// DELETE /ad/{id} - remove an advertisement
async fn delete_ad(
    AdId(id): AdId,
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeletedResponse>, ApiError> {
    AdRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse { status: "success" }))
}

/// Advertisement routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ad/", post(create_ad))
        .route("/ad/{id}", get(get_ad).patch(update_ad).delete(delete_ad))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn response_labels_owner_as_user() {
        let ad = Ad {
            id: 1,
            title: "Sale".into(),
            description: "50% off".into(),
            owner: "alice".into(),
            creation_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(AdResponse::from(ad)).unwrap();
        assert_eq!(value["user"], "alice");
        assert!(value.get("owner").is_none());
        assert_eq!(value["creation_time"], "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn delete_response_shape() {
        let value = serde_json::to_value(DeletedResponse { status: "success" }).unwrap();
        assert_eq!(value, serde_json::json!({"status": "success"}));
    }
}
