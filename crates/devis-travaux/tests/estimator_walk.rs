//! End-to-end walks through the built-in renovation catalog.
//!
//! Walks are driven only through the public `Estimator` facade and the HTTP router, checking
//! the totals a visitor would see at the end of each questionnaire.

mod common {
    use devis_travaux::workflows::estimator::{EstimationSession, Estimator};

    /// Walk a category picking an option per question; custom options get `custom_input`.
    /// Returns the final session and the independently accumulated expected total.
    pub(super) fn walk(
        estimator: &Estimator,
        category_id: &str,
        pick: impl Fn(usize) -> usize,
        custom_input: &str,
    ) -> (EstimationSession, f64, usize) {
        let mut session = estimator
            .start_session(category_id)
            .expect("category exists");
        let mut expected = 0.0;
        let mut steps = 0;

        while !session.is_final() {
            let question = estimator
                .current_question(&session)
                .expect("question resolves")
                .expect("active question")
                .clone();
            let index = pick(question.options.len());
            let option = &question.options[index];

            session = estimator
                .select_option(&session, index)
                .expect("option accepted");
            if option.is_custom {
                let quantity: f64 = custom_input.trim().parse().expect("numeric fixture");
                expected += estimator.formulas().resolve(&question.id, quantity);
                session = estimator
                    .submit_custom_value(&session, custom_input)
                    .expect("custom value accepted");
            } else {
                expected += option.value;
            }
            steps += 1;
        }

        (session, expected, steps)
    }
}

use common::walk;
use devis_travaux::workflows::estimator::{
    estimator_router, EstimationSession, Estimator, EstimatorError, SessionState,
};

#[test]
fn every_category_reaches_a_final_estimate_within_its_question_count() {
    let estimator = Estimator::standard();

    let picks: [fn(usize) -> usize; 2] = [|_| 0, |len| len - 1];

    for category in estimator.catalog().categories() {
        for pick in picks {
            let (session, expected, steps) = walk(&estimator, &category.id, pick, "12");
            assert!(steps <= category.questions.len(), "{} walk too long", category.id);

            let estimate = session.final_estimate().expect("final estimate");
            assert!(
                (estimate.total - expected).abs() < 1e-6,
                "{}: total {} != expected {}",
                category.id,
                estimate.total,
                expected
            );
            assert_eq!(estimate.breakdown.len(), steps);
        }
    }
}

#[test]
fn walls_reference_walk_totals_560() {
    let estimator = Estimator::standard();
    let (session, _, steps) = walk(&estimator, "walls", |_| 0, "0");

    assert_eq!(steps, 10);
    assert_eq!(session.state, SessionState::Final { total: 560.0 });

    let breakdown: Vec<(&str, &str, f64)> = session
        .answers
        .iter()
        .map(|answer| {
            (
                answer.question_id.as_str(),
                answer.option_text.as_str(),
                answer.value,
            )
        })
        .collect();
    assert_eq!(
        breakdown,
        vec![
            ("surface", "< 20m²", 250.0),
            ("height", "Standard (< 2.4m)", 0.0),
            ("angles", "Simple (4 angles)", 0.0),
            ("condition", "Bon état", 80.0),
            ("preparation", "Nettoyage simple", 80.0),
            ("layers", "1 couche", 0.0),
            ("type", "Peinture mate", 150.0),
            ("quality", "Entrée de gamme", 0.0),
            ("colors", "Monochrome", 0.0),
            ("access", "Accès facile", 0.0),
        ]
    );
    let estimate = session.final_estimate().expect("final estimate");
    assert_eq!(estimate.breakdown, session.answers);
}

#[test]
fn same_values_in_a_different_order_give_the_same_total() {
    let estimator = Estimator::standard();
    let pick_at = |picks: [usize; 10]| {
        let mut session = estimator.start_session("walls").expect("walls");
        for index in picks {
            session = estimator.select_option(&session, index).expect("option");
        }
        session
    };

    // 120 paid at the ceiling height in one walk, for a second coat in the other.
    let tall = pick_at([0, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
    let coated = pick_at([0, 0, 0, 0, 0, 1, 0, 0, 0, 0]);

    let sorted_values = |session: &EstimationSession| {
        let mut values: Vec<f64> = session.answers.iter().map(|answer| answer.value).collect();
        values.sort_by(f64::total_cmp);
        values
    };
    assert_ne!(tall.answers, coated.answers);
    assert_eq!(sorted_values(&tall), sorted_values(&coated));
    assert_eq!(tall.state, SessionState::Final { total: 680.0 });
    assert_eq!(coated.state, SessionState::Final { total: 680.0 });
}

#[test]
fn custom_surface_contributes_twenty_five_per_square_meter() {
    let estimator = Estimator::standard();
    let session = estimator.start_session("walls").expect("walls");
    let waiting = estimator.select_option(&session, 6).expect("other surface");

    let resolved = estimator
        .submit_custom_value(&waiting, "45")
        .expect("valid surface");
    assert_eq!(resolved.total(), 1125.0);

    let again = estimator
        .submit_custom_value(&waiting, "45")
        .expect("same input");
    assert_eq!(again, resolved);

    assert_eq!(
        estimator.submit_custom_value(&waiting, "abc"),
        Err(EstimatorError::InvalidNumericInput("abc".to_string()))
    );
}

#[test]
fn subsidies_can_drive_the_total_below_zero() {
    let estimator = Estimator::standard();
    let mut session = estimator
        .start_session("energy-renovation")
        .expect("energy renovation");

    // Appartement, Après 2010, custom surface 0, A/B, custom insulation 0,
    // no wall insulation, custom windows 0, custom heating 0, existing ventilation.
    for step in [
        Step::Pick(0),
        Step::Pick(0),
        Step::Custom(5, "0"),
        Step::Pick(0),
        Step::Custom(5, "0"),
        Step::Pick(0),
        Step::Custom(5, "0"),
        Step::Custom(5, "0"),
        Step::Pick(0),
        Step::Pick(2),
    ] {
        session = step.apply(&estimator, &session);
    }

    assert_eq!(session.state, SessionState::Final { total: -4000.0 });
}

#[test]
fn custom_option_without_successor_finishes_the_walk() {
    let estimator = Estimator::standard();
    let mut session = estimator
        .start_session("energy-renovation")
        .expect("energy renovation");
    for _ in 0..9 {
        session = estimator.select_option(&session, 0).expect("first option");
    }
    assert_eq!(session.current_question_id(), Some("subsidies"));

    let waiting = estimator.select_option(&session, 3).expect("other amount");
    let done = estimator
        .submit_custom_value(&waiting, "-100")
        .expect("amount accepted");

    let estimate = done.final_estimate().expect("final");
    // First options add up to 9500, then -100 at the fallback rate of 30.
    assert_eq!(estimate.total, 6500.0);
}

enum Step {
    Pick(usize),
    Custom(usize, &'static str),
}

impl Step {
    fn apply(&self, estimator: &Estimator, session: &EstimationSession) -> EstimationSession {
        match self {
            Step::Pick(index) => estimator.select_option(session, *index).expect("option"),
            Step::Custom(index, raw) => {
                let waiting = estimator.select_option(session, *index).expect("custom");
                estimator
                    .submit_custom_value(&waiting, raw)
                    .expect("custom value")
            }
        }
    }
}

mod http {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::{estimator_router, Estimator};

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn post(uri: &str, payload: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn client_threads_the_session_through_each_step() {
        let router = estimator_router(Arc::new(Estimator::standard()));

        let response = router
            .clone()
            .oneshot(post(
                "/api/v1/estimator/sessions",
                json!({ "category_id": "walls" }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = read_json_body(response).await;
        assert_eq!(body["question"]["id"], "surface");
        assert_eq!(body["progress"]["position"], 1);
        assert_eq!(body["progress"]["total_questions"], 10);

        let response = router
            .clone()
            .oneshot(post(
                "/api/v1/estimator/sessions/select",
                json!({ "session": body["session"], "option_index": 6 }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        let waiting = read_json_body(response).await;
        assert_eq!(waiting["session"]["state"]["kind"], "awaiting_custom_input");

        let response = router
            .clone()
            .oneshot(post(
                "/api/v1/estimator/sessions/custom",
                json!({ "session": waiting["session"], "value": "abc" }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let rejected = read_json_body(response).await;
        assert_eq!(rejected["session"], waiting["session"]);

        let response = router
            .oneshot(post(
                "/api/v1/estimator/sessions/custom",
                json!({ "session": waiting["session"], "value": "45" }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        let advanced = read_json_body(response).await;
        assert_eq!(advanced["question"]["id"], "height");
        assert_eq!(advanced["session"]["answers"][0]["value"], 1125.0);
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let router = estimator_router(Arc::new(Estimator::standard()));

        let response = router
            .clone()
            .oneshot(post(
                "/api/v1/estimator/sessions",
                json!({ "category_id": "roofing" }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router
            .oneshot(
                Request::get("/api/v1/estimator/categories/roofing")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn categories_are_listed_with_question_counts() {
        let router = estimator_router(Arc::new(Estimator::standard()));

        let response = router
            .oneshot(
                Request::get("/api/v1/estimator/categories")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        let categories = body.as_array().expect("array");
        assert_eq!(categories.len(), 9);
        assert_eq!(categories[3]["id"], "full-renovation");
        assert_eq!(categories[3]["question_count"], 15);
    }

    #[tokio::test]
    async fn forged_answers_are_a_bad_request() {
        let router = estimator_router(Arc::new(Estimator::standard()));
        let session = json!({
            "category_id": "walls",
            "state": { "kind": "active", "question_id": "height" },
            "answers": [
                { "question_id": "surface", "option_text": "< 20m²", "value": 1000000.0 }
            ],
        });

        let response = router
            .oneshot(post(
                "/api/v1/estimator/sessions/select",
                json!({ "session": session, "option_index": 0 }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json_body(response).await;
        assert_eq!(
            body["error"],
            "session does not match the catalog at question 'surface'"
        );
    }

    #[tokio::test]
    async fn selecting_on_a_final_session_is_a_bad_request() {
        let router = estimator_router(Arc::new(Estimator::standard()));
        let session = json!({
            "category_id": "walls",
            "state": { "kind": "final", "total": 560.0 },
            "answers": [],
        });

        let response = router
            .oneshot(post(
                "/api/v1/estimator/sessions/select",
                json!({ "session": session, "option_index": 0 }),
            ))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
