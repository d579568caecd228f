use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::activities_service::SignupError;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorDetail<'a> {
    pub detail: &'a str,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error("Missing required query parameter: email")]
    MissingEmail,
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Signup(SignupError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Signup(
                SignupError::DuplicateSignup | SignupError::NotRegistered | SignupError::ActivityFull,
            ) => StatusCode::BAD_REQUEST,
            ApiError::Signup(SignupError::InvalidEmail) | ApiError::MissingEmail => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::InvalidPath(rejection) => rejection.status(),
            ApiError::InvalidQuery(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        (self.status(), Json(ErrorDetail { detail: &detail })).into_response()
    }
}
