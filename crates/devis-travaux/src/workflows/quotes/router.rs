use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{QuoteFilter, QuoteId, QuoteStatus, QuoteSubmission};
use super::repository::{QuoteRepository, QuoteStoreError};
use super::service::{QuoteRequestService, QuoteServiceError};

#[derive(Debug, Deserialize)]
pub struct QuoteStatusRequest {
    pub status: QuoteStatus,
}

pub fn quote_router<R>(service: Arc<QuoteRequestService<R>>) -> Router
where
    R: QuoteRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/quotes",
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .route("/api/v1/quotes/:quote_id", get(fetch_handler::<R>))
        .route(
            "/api/v1/quotes/:quote_id/status",
            put(update_status_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuoteRequestService<R>>>,
    axum::Json(submission): axum::Json<QuoteSubmission>,
) -> Response
where
    R: QuoteRepository + 'static,
{
    match service.submit(submission) {
        Ok(quote) => (StatusCode::CREATED, axum::Json(quote.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<QuoteRequestService<R>>>,
    Query(filter): Query<QuoteFilter>,
) -> Response
where
    R: QuoteRepository + 'static,
{
    match service.list(&filter) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<QuoteRequestService<R>>>,
    Path(quote_id): Path<String>,
) -> Response
where
    R: QuoteRepository + 'static,
{
    match service.get(&QuoteId(quote_id)) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<QuoteRequestService<R>>>,
    Path(quote_id): Path<String>,
    axum::Json(request): axum::Json<QuoteStatusRequest>,
) -> Response
where
    R: QuoteRepository + 'static,
{
    match service.update_status(&QuoteId(quote_id), request.status) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote.view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: QuoteServiceError) -> Response {
    let (status, message) = match &error {
        QuoteServiceError::Validation(inner) => {
            (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string())
        }
        QuoteServiceError::Repository(QuoteStoreError::NotFound) => {
            (StatusCode::NOT_FOUND, "quote request not found".to_string())
        }
        QuoteServiceError::Repository(QuoteStoreError::Conflict) => {
            (StatusCode::CONFLICT, "quote request already exists".to_string())
        }
        QuoteServiceError::Repository(QuoteStoreError::Unavailable(_)) => {
            tracing::error!(%error, "quote storage unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "request failed, please retry later".to_string(),
            )
        }
    };

    (status, axum::Json(json!({ "error": message }))).into_response()
}
