use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::ActivityMap;
use crate::services::activities_service;
use crate::web::error::ApiError;
use crate::web::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&state.registry))
}

pub async fn signup_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, email) = membership_params(path, query)?;

    let email = activities_service::signup_for_activity(
        &state.registry,
        state.capacity,
        &activity_name,
        &email,
    )
    .map_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected");
        ApiError::from(e)
    })?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    }))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (activity_name, email) = membership_params(path, query)?;

    let email = activities_service::unregister_from_activity(&state.registry, &activity_name, &email)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister_rejected");
            ApiError::from(e)
        })?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", email, activity_name),
    }))
}

/// Activity name and email for signup/unregister. Extractor rejections are
/// turned into `ApiError` so they render as `{detail}` too.
fn membership_params(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<(String, String), ApiError> {
    let Path(activity_name) = path.map_err(|e| {
        warn!(error = %e.body_text(), "bad activity path");
        ApiError::from(e)
    })?;
    let Query(query) = query.map_err(|e| {
        warn!(activity = %activity_name, error = %e.body_text(), "bad query string");
        ApiError::from(e)
    })?;
    let email = query.email.ok_or_else(|| {
        warn!(activity = %activity_name, "request without email query parameter");
        ApiError::MissingEmail
    })?;
    Ok((activity_name, email))
}
