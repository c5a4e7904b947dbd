//! Quote requests from the multi-step form through to the admin projects listing.

mod common {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use devis_travaux::workflows::quotes::{
        QuoteId, QuoteRepository, QuoteRequest, QuoteStatus, QuoteStoreError,
    };

    #[derive(Default)]
    pub(super) struct MemoryQuotes {
        quotes: Mutex<HashMap<QuoteId, QuoteRequest>>,
    }

    impl QuoteRepository for MemoryQuotes {
        fn insert(&self, quote: QuoteRequest) -> Result<QuoteRequest, QuoteStoreError> {
            let mut guard = self.quotes.lock().expect("repository mutex poisoned");
            if guard.contains_key(&quote.id) {
                return Err(QuoteStoreError::Conflict);
            }
            guard.insert(quote.id.clone(), quote.clone());
            Ok(quote)
        }

        fn update_status(
            &self,
            id: &QuoteId,
            status: QuoteStatus,
        ) -> Result<QuoteRequest, QuoteStoreError> {
            let mut guard = self.quotes.lock().expect("repository mutex poisoned");
            let quote = guard.get_mut(id).ok_or(QuoteStoreError::NotFound)?;
            quote.status = status;
            Ok(quote.clone())
        }

        fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRequest>, QuoteStoreError> {
            let guard = self.quotes.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        fn list(&self) -> Result<Vec<QuoteRequest>, QuoteStoreError> {
            let guard = self.quotes.lock().expect("repository mutex poisoned");
            Ok(guard.values().cloned().collect())
        }
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use devis_travaux::workflows::quotes::{quote_router, QuoteRequestService};

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn router() -> Router {
    quote_router(Arc::new(QuoteRequestService::new(Arc::new(
        common::MemoryQuotes::default(),
    ))))
}

fn json_request(method: Method, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

fn form(first_name: &str, project_type: &str, budget: f64) -> Value {
    json!({
        "project_type": project_type,
        "budget": budget,
        "deadline": "2099-06-30",
        "services": ["design", "materials", "design"],
        "description": "Cuisine ouverte sur le séjour",
        "first_name": first_name,
        "last_name": "Garnier",
        "email": format!("{}@example.fr", first_name.to_lowercase()),
        "phone": "0611223344",
        "company": "SCI Garnier",
        "preferred_contact": "phone",
        "gdpr_consent": true
    })
}

async fn submit(router: &Router, payload: Value) -> Response {
    router
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/quotes", payload))
        .await
        .expect("router response")
}

#[tokio::test]
async fn submitted_quote_is_pending_with_labels() {
    let router = router();
    let response = submit(&router, form("Julie", "renovation", 25_000.0)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "pending");
    assert_eq!(body["status_label"], "En attente");
    assert_eq!(body["project_label"], "Rénovation complète");
    assert_eq!(body["services"], json!(["design", "materials"]));
    assert_eq!(body["deadline"], "2099-06-30");

    let id = body["id"].as_str().expect("quote id");
    let response = router
        .oneshot(
            Request::get(format!("/api/v1/quotes/{id}"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["company"], "SCI Garnier");
}

#[tokio::test]
async fn form_without_consent_or_in_range_budget_is_refused() {
    let router = router();

    let mut no_consent = form("Julie", "painting", 5_000.0);
    no_consent["gdpr_consent"] = json!(false);
    let response = submit(&router, no_consent).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        read_json_body(response).await["error"],
        "consent to personal data processing is required"
    );

    let response = submit(&router, form("Julie", "painting", 500.0)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let mut past = form("Julie", "painting", 5_000.0);
    past["deadline"] = json!("2000-01-01");
    let response = submit(&router, past).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        read_json_body(response).await["error"],
        "deadline is already past"
    );

    let response = submit(&router, form("Julie", "roofing", 5_000.0)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn admin_listing_filters_and_tracks_status_changes() {
    let router = router();
    submit(&router, form("Julie", "plumbing", 3_000.0)).await;
    let response = submit(&router, form("Karim", "flooring", 8_000.0)).await;
    let karim = read_json_body(response).await;
    let karim_id = karim["id"].as_str().expect("quote id").to_string();

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/quotes/{karim_id}/status"),
            json!({ "status": "processing" }),
        ))
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["status_label"], "En cours");

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/quotes?status=processing")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    let body = read_json_body(response).await;
    assert_eq!(body["quotes"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["quotes"][0]["first_name"], "Karim");
    assert_eq!(body["counts"]["total"], 2);
    assert_eq!(body["counts"]["pending"], 1);
    assert_eq!(body["counts"]["processing"], 1);
    assert_eq!(body["counts"]["total_budget"], 11_000.0);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/quotes?search=plomberie")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    let body = read_json_body(response).await;
    assert_eq!(body["quotes"][0]["first_name"], "Julie");
    assert_eq!(body["quotes"].as_array().map(Vec::len), Some(1));

    let response = router
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/quotes/quote-999999/status",
            json!({ "status": "completed" }),
        ))
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
