use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::error::EstimatorError;
use super::session::{EstimationSession, Estimator};

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectOptionRequest {
    pub session: EstimationSession,
    pub option_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct CustomValueRequest {
    pub session: EstimationSession,
    pub value: String,
}

/// Stateless walk endpoints: the client sends its session back on every step.
pub fn estimator_router(estimator: Arc<Estimator>) -> Router {
    Router::new()
        .route("/api/v1/estimator/categories", get(list_categories_handler))
        .route(
            "/api/v1/estimator/categories/:category_id",
            get(category_handler),
        )
        .route("/api/v1/estimator/sessions", post(start_session_handler))
        .route(
            "/api/v1/estimator/sessions/select",
            post(select_option_handler),
        )
        .route(
            "/api/v1/estimator/sessions/custom",
            post(custom_value_handler),
        )
        .with_state(estimator)
}

pub(crate) async fn list_categories_handler(State(estimator): State<Arc<Estimator>>) -> Response {
    let summaries = estimator.catalog().summaries();
    (StatusCode::OK, axum::Json(summaries)).into_response()
}

pub(crate) async fn category_handler(
    State(estimator): State<Arc<Estimator>>,
    Path(category_id): Path<String>,
) -> Response {
    match estimator.catalog().category(&category_id) {
        Some(category) => (StatusCode::OK, axum::Json(category.clone())).into_response(),
        None => error_response(EstimatorError::UnknownCategory(category_id)),
    }
}

pub(crate) async fn start_session_handler(
    State(estimator): State<Arc<Estimator>>,
    axum::Json(request): axum::Json<StartSessionRequest>,
) -> Response {
    let result = estimator
        .start_session(&request.category_id)
        .and_then(|session| estimator.view(session));

    match result {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn select_option_handler(
    State(estimator): State<Arc<Estimator>>,
    axum::Json(request): axum::Json<SelectOptionRequest>,
) -> Response {
    let result = estimator
        .select_option(&request.session, request.option_index)
        .and_then(|session| estimator.view(session));

    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn custom_value_handler(
    State(estimator): State<Arc<Estimator>>,
    axum::Json(request): axum::Json<CustomValueRequest>,
) -> Response {
    let result = estimator
        .submit_custom_value(&request.session, &request.value)
        .and_then(|session| estimator.view(session));

    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ EstimatorError::InvalidNumericInput(_)) => {
            // Unchanged session goes back with the error.
            let payload = json!({
                "error": error.to_string(),
                "session": request.session,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: EstimatorError) -> Response {
    let status = match error {
        EstimatorError::UnknownCategory(_) => StatusCode::NOT_FOUND,
        EstimatorError::InvalidNumericInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EstimatorError::UnknownQuestion { .. }
        | EstimatorError::InvalidOption { .. }
        | EstimatorError::NotAwaitingCustomInput
        | EstimatorError::SessionCompleted
        | EstimatorError::TamperedSession(_) => StatusCode::BAD_REQUEST,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
