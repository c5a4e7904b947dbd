use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{LeadFilter, LeadId, LeadStatus, LeadSubmission};
use super::repository::{LeadNotifier, LeadRepository, RepositoryError};
use super::service::{LeadService, LeadServiceError};

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: LeadStatus,
}

/// Router builder exposing lead intake and the admin endpoints.
pub fn lead_router<R, N>(service: Arc<LeadService<R, N>>) -> Router
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/leads",
            post(submit_handler::<R, N>).get(list_handler::<R, N>),
        )
        .route("/api/v1/leads/:lead_id", get(fetch_handler::<R, N>))
        .route(
            "/api/v1/leads/:lead_id/status",
            put(update_status_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<LeadService<R, N>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, N>(
    State(service): State<Arc<LeadService<R, N>>>,
    Query(filter): Query<LeadFilter>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.list(&filter) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R, N>(
    State(service): State<Arc<LeadService<R, N>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.get(&LeadId(lead_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_status_handler<R, N>(
    State(service): State<Arc<LeadService<R, N>>>,
    Path(lead_id): Path<String>,
    axum::Json(request): axum::Json<StatusUpdateRequest>,
) -> Response
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    match service.update_status(&LeadId(lead_id), request.status) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: LeadServiceError) -> Response {
    let (status, message) = match &error {
        LeadServiceError::Validation(inner) => {
            (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string())
        }
        LeadServiceError::Repository(RepositoryError::NotFound) => {
            (StatusCode::NOT_FOUND, "lead not found".to_string())
        }
        LeadServiceError::Repository(RepositoryError::Conflict) => {
            (StatusCode::CONFLICT, "lead already exists".to_string())
        }
        LeadServiceError::Repository(RepositoryError::Unavailable(_)) => {
            tracing::error!(%error, "lead storage unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "submission failed, please retry later".to_string(),
            )
        }
    };

    let payload = json!({
        "error": message,
    });
    (status, axum::Json(payload)).into_response()
}
