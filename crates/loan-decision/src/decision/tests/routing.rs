use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::decision::router::{decision_handler, status_for, DECISION_PATH};
use crate::decision::{decision_router, Country, FixedClock, RejectionKind};

fn post_json(payload: serde_json::Value) -> Request<Body> {
    Request::post(DECISION_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn handler_returns_ok_for_approvals() {
    let response = decision_handler::<FixedClock>(
        State(shared_engine()),
        Ok(Json(request(SEGMENT_2_5000, 4000, 12))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!({ "status": "approved", "loanAmount": 3600, "loanPeriod": 12 })
    );
}

#[tokio::test]
async fn handler_maps_validation_errors_to_bad_request() {
    let response = decision_handler::<FixedClock>(
        State(shared_engine()),
        Ok(Json(request(SEGMENT_2_5000, 4000, 61))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "rejected");
    assert_eq!(payload["kind"], "invalid_period");
}

#[tokio::test]
async fn route_accepts_camel_case_payloads() {
    let router = decision_router(shared_engine());

    let response = router
        .oneshot(post_json(json!({
            "personalCode": SEGMENT_1_2500,
            "loanAmount": 2000,
            "loanPeriod": 12
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["loanAmount"], 2000);
    assert_eq!(payload["loanPeriod"], 20);
}

#[tokio::test]
async fn route_maps_domain_rejections() {
    let router = decision_router(shared_engine());

    let response = router
        .clone()
        .oneshot(post_json(json!({
            "personalCode": DEBT_2499,
            "loanAmount": 4000,
            "loanPeriod": 24
        })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(post_json(json!({
            "personalCode": SEGMENT_3_7500,
            "loanAmount": 4000,
            "loanPeriod": 24,
            "country": "FI"
        })))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "age_out_of_range");
}

#[tokio::test]
async fn route_honours_requested_country() {
    let router = decision_router(shared_engine());

    let response = router
        .oneshot(post_json(json!({
            "personalCode": AGED_66,
            "loanAmount": 4000,
            "loanPeriod": 24,
            "country": "LV"
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn route_answers_unreadable_bodies_with_a_rejection() {
    let router = decision_router(shared_engine());

    for payload in [
        json!({
            "personalCode": SEGMENT_3_9999,
            "loanAmount": "lots",
            "loanPeriod": 24
        }),
        json!({
            "personalCode": SEGMENT_3_9999,
            "loanAmount": 4000
        }),
    ] {
        let response = router
            .clone()
            .oneshot(post_json(payload))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json_body(response).await;
        assert_eq!(body["status"], "rejected");
        assert_eq!(body["kind"], "malformed_request");
        assert!(body["message"].as_str().is_some_and(|message| !message.is_empty()));
    }
}

#[test]
fn every_rejection_kind_has_a_status() {
    assert_eq!(
        status_for(RejectionKind::MalformedRequest),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_for(RejectionKind::InvalidIdentifier),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_for(RejectionKind::InvalidAmount),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(status_for(RejectionKind::NoValidLoan), StatusCode::NOT_FOUND);
    assert_eq!(
        status_for(RejectionKind::AgeOutOfRange),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[test]
fn country_deserializes_leniently() {
    let known: Country = serde_json::from_value(json!("lt")).expect("country parses");
    assert_eq!(known, Country::Lithuania);

    let unknown: Country = serde_json::from_value(json!("FI")).expect("country parses");
    assert_eq!(unknown, Country::Unknown);
}
