use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::leads::router::{lead_router, submit_handler};
use crate::workflows::leads::service::LeadService;

#[tokio::test]
async fn submit_handler_returns_created_view() {
    let (service, _, _) = build_service();

    let response = submit_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["status_label"], "En attente");
    assert_eq!(body["postal_code"], "69");
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_invalid_postal_code() {
    let (service, _, _) = build_service();
    let mut invalid = submission();
    invalid.postal_code = "690".to_string();

    let response = submit_handler::<MemoryRepository, MemoryNotifier>(
        State(Arc::new(service)),
        axum::Json(invalid),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(LeadService::new(
        Arc::new(ConflictRepository),
        Arc::new(MemoryNotifier::default()),
    ));

    let response =
        submit_handler::<ConflictRepository, MemoryNotifier>(State(service), axum::Json(submission()))
            .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_hides_storage_details() {
    let service = Arc::new(LeadService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
    ));

    let response = submit_handler::<UnavailableRepository, MemoryNotifier>(
        State(service),
        axum::Json(submission()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "submission failed, please retry later");
}

#[tokio::test]
async fn router_lists_filters_and_updates_leads() {
    let (service, _, _) = build_service();
    let service = Arc::new(service);
    let stored = service
        .submit(submission_named("Anna", "13"))
        .expect("lead stored");
    service
        .submit(submission_named("Bruno", "33"))
        .expect("lead stored");

    let router = lead_router(service);

    let response = router
        .clone()
        .oneshot(
            Request::put(format!("/api/v1/leads/{}/status", stored.id.0))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "assigned" }).to_string()))
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status_label"], "Assigné");

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/leads?status=assigned")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["leads"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["leads"][0]["first_name"], "Anna");
    assert_eq!(body["counts"]["in_progress"], 1);
    assert_eq!(body["counts"]["pending"], 1);

    let response = router
        .oneshot(
            Request::get("/api/v1/leads/lead-unknown")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
