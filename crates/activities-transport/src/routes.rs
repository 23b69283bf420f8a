//! Request handlers for the activity routes.

use std::sync::Arc;

use activities_protocol::{ActivityName, ActivityStore, Confirmation, Listing, ParticipantEmail};
use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

fn email_param(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<ParticipantEmail, ApiError> {
    match query {
        Ok(Query(q)) => Ok(ParticipantEmail::new(q.email)),
        Err(rejection) => Err(ApiError::InvalidParams(rejection.body_text())),
    }
}

pub async fn list_handler<S: ActivityStore>(State(state): State<Arc<AppState<S>>>) -> Json<Listing> {
    Json(state.store.list())
}

pub async fn signup_handler<S: ActivityStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let activity = ActivityName::new(activity);
    let email = email_param(query)?;

    match state.store.enroll(&activity, email) {
        Ok(confirmation) => {
            info!("{}", confirmation.message);
            Ok(Json(confirmation))
        }
        Err(e) => {
            warn!(kind = e.kind().as_str(), "Signup for {activity} rejected: {e}");
            Err(e.into())
        }
    }
}

pub async fn unregister_handler<S: ActivityStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let activity = ActivityName::new(activity);
    let email = email_param(query)?;

    match state.store.withdraw(&activity, &email) {
        Ok(confirmation) => {
            info!("{}", confirmation.message);
            Ok(Json(confirmation))
        }
        Err(e) => {
            warn!(kind = e.kind().as_str(), "Unregister from {activity} rejected: {e}");
            Err(e.into())
        }
    }
}

pub async fn health_handler<S: ActivityStore>(
    State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "activities": state.store.activity_count(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}
