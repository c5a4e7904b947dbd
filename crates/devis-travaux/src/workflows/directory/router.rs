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

use super::domain::{BrokerProfile, BrokerQuery, InteractionKind, ProfessionalProfile};
use super::service::{DirectoryError, DirectoryRepository, DirectoryService};

#[derive(Debug, Default, Deserialize)]
pub struct ProfessionalQuery {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionRequest {
    pub kind: InteractionKind,
}

pub fn directory_router<D>(service: Arc<DirectoryService<D>>) -> Router
where
    D: DirectoryRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/professionals",
            get(professionals_handler::<D>).post(create_professional_handler::<D>),
        )
        .route(
            "/api/v1/professionals/:professional_id",
            put(update_professional_handler::<D>).delete(delete_professional_handler::<D>),
        )
        .route(
            "/api/v1/professionals/:professional_id/interactions",
            post(interaction_handler::<D>),
        )
        .route(
            "/api/v1/brokers",
            get(brokers_handler::<D>).post(create_broker_handler::<D>),
        )
        .route(
            "/api/v1/brokers/:broker_id",
            put(update_broker_handler::<D>).delete(delete_broker_handler::<D>),
        )
        .with_state(service)
}

pub(crate) async fn professionals_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Query(params): Query<ProfessionalQuery>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    let query = params.query.unwrap_or_default();
    match service.find_professionals(&query) {
        Ok(professionals) => (StatusCode::OK, axum::Json(professionals)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn brokers_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Query(query): Query<BrokerQuery>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.find_brokers(&query) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn interaction_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Path(professional_id): Path<String>,
    axum::Json(request): axum::Json<InteractionRequest>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.track_interaction(&professional_id, request.kind) {
        Ok(professional) => (StatusCode::OK, axum::Json(professional)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_professional_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    axum::Json(profile): axum::Json<ProfessionalProfile>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.create_professional(profile) {
        Ok(professional) => (StatusCode::CREATED, axum::Json(professional)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_professional_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Path(professional_id): Path<String>,
    axum::Json(profile): axum::Json<ProfessionalProfile>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.update_professional(&professional_id, profile) {
        Ok(professional) => (StatusCode::OK, axum::Json(professional)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_professional_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Path(professional_id): Path<String>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.delete_professional(&professional_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_broker_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    axum::Json(profile): axum::Json<BrokerProfile>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.create_broker(profile) {
        Ok(broker) => (StatusCode::CREATED, axum::Json(broker)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_broker_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Path(broker_id): Path<String>,
    axum::Json(profile): axum::Json<BrokerProfile>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.update_broker(&broker_id, profile) {
        Ok(broker) => (StatusCode::OK, axum::Json(broker)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_broker_handler<D>(
    State(service): State<Arc<DirectoryService<D>>>,
    Path(broker_id): Path<String>,
) -> Response
where
    D: DirectoryRepository + 'static,
{
    match service.delete_broker(&broker_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DirectoryError) -> Response {
    let status = match &error {
        DirectoryError::NotFound => StatusCode::NOT_FOUND,
        DirectoryError::Conflict => StatusCode::CONFLICT,
        DirectoryError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DirectoryError::Unavailable(_) => {
            tracing::error!(%error, "directory storage unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
