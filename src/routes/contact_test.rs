use std::sync::Arc;

use super::*;
use crate::services::mailer::test_helpers::MockMailer;
use crate::state::test_helpers::{test_state_unconfigured, test_state_with_mailer};

async fn post(state: AppState, body: &str) -> (StatusCode, Value) {
    let payload: ContactPayload = serde_json::from_str(body).unwrap();
    let (status, Json(value)) = submit(State(state), Json(payload)).await;
    (status, value)
}

#[tokio::test]
async fn valid_payload_returns_ok_true() {
    let mailer = Arc::new(MockMailer::new());
    let state = test_state_with_mailer(mailer.clone());

    let (status, body) = post(state, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "ok": true }));
    assert_eq!(mailer.sent_count(), 1);
}

#[tokio::test]
async fn empty_name_returns_400_missing_fields() {
    let mailer = Arc::new(MockMailer::new());
    let state = test_state_with_mailer(mailer.clone());

    let (status, body) = post(state, r#"{"name":"","email":"a@b.com","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "message": "Missing required fields." }));
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn invalid_email_returns_400() {
    let mailer = Arc::new(MockMailer::new());
    let state = test_state_with_mailer(mailer.clone());

    let (status, body) = post(state, r#"{"name":"A","email":"nope","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Enter a valid email address.");
}

#[tokio::test]
async fn oversized_message_returns_400() {
    let mailer = Arc::new(MockMailer::new());
    let state = test_state_with_mailer(mailer);

    let long = "x".repeat(5001);
    let body_json = serde_json::json!({ "name": "A", "email": "a@b.com", "message": long });
    let (status, body) = post(state, &body_json.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Message is too long.");
}

#[tokio::test]
async fn honeypot_returns_ok_without_sending() {
    let mailer = Arc::new(MockMailer::new());
    let state = test_state_with_mailer(mailer.clone());

    let (status, body) = post(
        state,
        r#"{"name":"A","email":"a@b.com","message":"hi","company":"Acme"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "ok": true }));
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn unconfigured_returns_500_even_for_invalid_payload() {
    for body in [
        r#"{"name":"A","email":"a@b.com","message":"hi"}"#,
        r#"{"name":"","email":"","message":""}"#,
    ] {
        let (status, value) = post(test_state_unconfigured(), body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(value["message"], "Contact form is not configured yet.");
    }
}

#[tokio::test]
async fn provider_failure_returns_502_with_message() {
    let mailer = Arc::new(MockMailer::failing("domain not verified"));
    let state = test_state_with_mailer(mailer);

    let (status, body) = post(state, r#"{"name":"A","email":"a@b.com","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "domain not verified");
}

#[test]
fn error_status_mapping() {
    assert_eq!(error_status(&ContactError::MissingFields), StatusCode::BAD_REQUEST);
    assert_eq!(error_status(&ContactError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(error_status(&ContactError::MessageTooLong), StatusCode::BAD_REQUEST);
    assert_eq!(error_status(&ContactError::NotConfigured), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_status(&ContactError::Upstream("x".into())),
        StatusCode::BAD_GATEWAY
    );
}
