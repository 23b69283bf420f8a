//! HTTP error responses.

use activities_protocol::{DirectoryError, ErrorKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Anything a handler can fail with, rendered as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Request could not be parsed (e.g. missing `email` query parameter).
    #[error("{0}")]
    InvalidParams(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Directory(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::AlreadyRegistered | ErrorKind::CapacityReached => {
                    StatusCode::BAD_REQUEST
                }
            },
            Self::InvalidParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing detail. Unknown activity and unknown participant
    /// deliberately read the same.
    pub fn detail(&self) -> String {
        match self {
            Self::Directory(e) => match e.kind() {
                ErrorKind::NotFound => "Activity not found".to_string(),
                ErrorKind::AlreadyRegistered => "already registered".to_string(),
                ErrorKind::CapacityReached => "Activity is full".to_string(),
            },
            Self::InvalidParams(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
