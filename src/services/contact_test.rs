use super::*;
use crate::services::mailer::test_helpers::MockMailer;

fn config() -> ContactConfig {
    ContactConfig {
        api_key: "re_test_key".into(),
        to_email: "owner@example.com".into(),
        from_email: "site@example.com".into(),
        auto_reply: false,
    }
}

fn config_with_auto_reply() -> ContactConfig {
    ContactConfig { auto_reply: true, ..config() }
}

fn valid_payload() -> ContactPayload {
    ContactPayload {
        name: "A".into(),
        email: "a@b.com".into(),
        message: "hi".into(),
        company: String::new(),
    }
}

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn valid_email_shapes_accepted() {
    for email in ["a@b.com", "first.last@sub.example.co.uk", "user+tag@example.io"] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn invalid_email_shapes_rejected() {
    for email in [
        "",
        "user",
        "@example.com",
        "user@",
        "a@b@c.com",
        "user@example",
        "user@example.",
        "user@.example.com",
        "us er@example.com",
        "user@exam ple.com",
    ] {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }
}

// =============================================================================
// relay — success paths
// =============================================================================

#[tokio::test]
async fn valid_payload_sends_exactly_once() {
    let mailer = MockMailer::new();
    let outcome = relay(Some((&config(), &mailer)), &valid_payload()).await.unwrap();

    assert_eq!(outcome, ContactOutcome::Sent);
    assert_eq!(mailer.sent_count(), 1);

    let sent = mailer.sent();
    assert_eq!(sent[0].from, "site@example.com");
    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].subject, "Portfolio contact from A");
    assert_eq!(sent[0].text, "Name: A\nEmail: a@b.com\n\nhi");
    assert_eq!(sent[0].reply_to.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn fields_are_trimmed_before_relay() {
    let mailer = MockMailer::new();
    let payload = ContactPayload {
        name: "  A  ".into(),
        email: " a@b.com ".into(),
        message: " hi ".into(),
        company: "   ".into(),
    };
    relay(Some((&config(), &mailer)), &payload).await.unwrap();

    let sent = mailer.sent();
    assert_eq!(sent[0].subject, "Portfolio contact from A");
    assert_eq!(sent[0].reply_to.as_deref(), Some("a@b.com"));
}

#[tokio::test]
async fn auto_reply_variant_sends_twice() {
    let mailer = MockMailer::new();
    let outcome = relay(Some((&config_with_auto_reply(), &mailer)), &valid_payload())
        .await
        .unwrap();

    assert_eq!(outcome, ContactOutcome::Sent);
    assert_eq!(mailer.sent_count(), 2);

    let sent = mailer.sent();
    assert_eq!(sent[1].to, "a@b.com");
    assert_eq!(sent[1].subject, "Thanks for reaching out");
    assert_eq!(sent[1].reply_to, None);
}

#[tokio::test]
async fn auto_reply_failure_does_not_fail_the_request() {
    let mailer = MockMailer::failing_from(1, "ack bounced");
    let outcome = relay(Some((&config_with_auto_reply(), &mailer)), &valid_payload())
        .await
        .unwrap();

    assert_eq!(outcome, ContactOutcome::Sent);
    assert_eq!(mailer.sent_count(), 1);
    assert_eq!(mailer.attempt_count(), 2);
}

// =============================================================================
// relay — honeypot
// =============================================================================

#[tokio::test]
async fn honeypot_discards_without_sending() {
    let mailer = MockMailer::new();
    let payload = ContactPayload { company: "Acme Corp".into(), ..valid_payload() };
    let outcome = relay(Some((&config(), &mailer)), &payload).await.unwrap();

    assert_eq!(outcome, ContactOutcome::Discarded);
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn honeypot_wins_even_when_unconfigured() {
    let payload = ContactPayload { company: "Acme Corp".into(), ..valid_payload() };
    let outcome = relay(None, &payload).await.unwrap();
    assert_eq!(outcome, ContactOutcome::Discarded);
}

// =============================================================================
// relay — validation failures
// =============================================================================

#[tokio::test]
async fn missing_fields_rejected() {
    let mailer = MockMailer::new();
    for payload in [
        ContactPayload { name: String::new(), ..valid_payload() },
        ContactPayload { email: String::new(), ..valid_payload() },
        ContactPayload { message: String::new(), ..valid_payload() },
        ContactPayload { name: "   ".into(), ..valid_payload() },
    ] {
        let err = relay(Some((&config(), &mailer)), &payload).await.unwrap_err();
        assert!(matches!(err, ContactError::MissingFields));
    }
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn invalid_email_rejected() {
    let mailer = MockMailer::new();
    let payload = ContactPayload { email: "not-an-email".into(), ..valid_payload() };
    let err = relay(Some((&config(), &mailer)), &payload).await.unwrap_err();

    assert!(matches!(err, ContactError::InvalidEmail));
    assert_eq!(err.to_string(), "Enter a valid email address.");
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn oversized_message_rejected() {
    let mailer = MockMailer::new();
    let payload = ContactPayload { message: "x".repeat(MAX_MESSAGE_CHARS + 1), ..valid_payload() };
    let err = relay(Some((&config(), &mailer)), &payload).await.unwrap_err();

    assert!(matches!(err, ContactError::MessageTooLong));
    assert_eq!(mailer.attempt_count(), 0);
}

#[tokio::test]
async fn message_at_limit_is_accepted() {
    let mailer = MockMailer::new();
    let payload = ContactPayload { message: "x".repeat(MAX_MESSAGE_CHARS), ..valid_payload() };
    relay(Some((&config(), &mailer)), &payload).await.unwrap();
    assert_eq!(mailer.sent_count(), 1);
}

// =============================================================================
// relay — configuration and upstream failures
// =============================================================================

#[tokio::test]
async fn unconfigured_rejected_regardless_of_payload() {
    for payload in [valid_payload(), ContactPayload::default()] {
        let err = relay(None, &payload).await.unwrap_err();
        assert!(matches!(err, ContactError::NotConfigured));
        assert_eq!(err.to_string(), "Contact form is not configured yet.");
    }
}

#[tokio::test]
async fn upstream_failure_carries_provider_message() {
    let mailer = MockMailer::failing("domain not verified");
    let err = relay(Some((&config(), &mailer)), &valid_payload()).await.unwrap_err();

    match err {
        ContactError::Upstream(message) => {
            assert!(message.contains("domain not verified"), "got: {message}");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[test]
fn blank_provider_message_falls_back() {
    let err: ContactError = MailerError::Delivery("  ".into()).into();
    assert_eq!(err.to_string(), "Failed to send message.");
}

#[test]
fn missing_json_fields_deserialize_to_empty() {
    let payload: ContactPayload = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
    assert!(payload.name.is_empty());
    assert_eq!(payload.email, "a@b.com");
    assert!(payload.message.is_empty());
    assert!(payload.company.is_empty());
}
