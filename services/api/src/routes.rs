use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use devis_travaux::workflows::directory::{
    directory_router, DirectoryRepository, DirectoryService,
};
use devis_travaux::workflows::estimator::{estimator_router, Estimator};
use devis_travaux::workflows::leads::{lead_router, LeadNotifier, LeadRepository, LeadService};
use devis_travaux::workflows::quotes::{quote_router, QuoteRepository, QuoteRequestService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_application_routes<R, N, Q, D>(
    estimator: Arc<Estimator>,
    leads: Arc<LeadService<R, N>>,
    quotes: Arc<QuoteRequestService<Q>>,
    directory: Arc<DirectoryService<D>>,
) -> axum::Router
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
    Q: QuoteRepository + 'static,
    D: DirectoryRepository + 'static,
{
    estimator_router(estimator)
        .merge(lead_router(leads))
        .merge(quote_router(quotes))
        .merge(directory_router(directory))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
