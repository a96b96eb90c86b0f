//! `POST /api/contact` — validate a submission and relay it via email.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::services::contact::{self, ContactError, ContactPayload};
use crate::services::mailer::Mailer;
use crate::state::AppState;

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> (StatusCode, Json<Value>) {
    let wiring = state
        .contact
        .as_ref()
        .map(|relay| (relay.config.as_ref(), relay.mailer.as_ref() as &dyn Mailer));

    match contact::relay(wiring, &payload).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "ok": true }))),
        Err(error) => {
            let status = error_status(&error);
            if status.is_server_error() {
                tracing::error!(error = %error, status = status.as_u16(), "contact relay failed");
            }
            (status, Json(json!({ "message": error.to_string() })))
        }
    }
}

pub(crate) fn error_status(error: &ContactError) -> StatusCode {
    match error {
        ContactError::MissingFields | ContactError::InvalidEmail | ContactError::MessageTooLong => {
            StatusCode::BAD_REQUEST
        }
        ContactError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        ContactError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
