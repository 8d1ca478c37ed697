//! Contact relay route: `POST /api/contact`.
//!
//! Validates the visitor's message, applies the per-IP quota, then hands it
//! to the configured [`MailSender`](crate::mailer::MailSender). Failure
//! details are logged; the browser only receives a short error label.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio::net::types::{ContactMessage, ContactResponse};

use crate::mailer::MailError;
use crate::rate_limit::RateLimitError;
use crate::state::AppState;

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 320;
const MAX_SUBJECT_LEN: usize = 300;
const MAX_MESSAGE_LEN: usize = 10_000;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("malformed request body: {0}")]
    Malformed(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error("mailer not configured")]
    NotConfigured,
    #[error(transparent)]
    Delivery(#[from] MailError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) | Self::MissingField(_) | Self::InvalidEmail | Self::TooLong { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Label safe to show the browser.
    fn public_message(&self) -> String {
        match self {
            Self::Malformed(_) => "invalid request".into(),
            Self::MissingField(_) | Self::InvalidEmail | Self::TooLong { .. } => self.to_string(),
            Self::RateLimited(_) => "too many messages, try again later".into(),
            Self::NotConfigured => "contact form unavailable".into(),
            Self::Delivery(_) => "message delivery failed".into(),
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let body = ContactResponse { ok: false, error: Some(self.public_message()) };
        (self.status(), Json(body)).into_response()
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Trim and check a submitted message.
///
/// # Errors
///
/// Returns the first problem found: a blank field, an address without a
/// local part and domain, or an over-long field.
pub fn validate(message: &ContactMessage) -> Result<ContactMessage, ContactError> {
    let message = message.trimmed();
    if let Some(field) = message.first_missing_field() {
        return Err(ContactError::MissingField(field));
    }
    if !looks_like_email(&message.email) {
        return Err(ContactError::InvalidEmail);
    }
    for (field, value, max) in [
        ("name", &message.name, MAX_NAME_LEN),
        ("email", &message.email, MAX_EMAIL_LEN),
        ("subject", &message.subject, MAX_SUBJECT_LEN),
        ("message", &message.message, MAX_MESSAGE_LEN),
    ] {
        if value.chars().count() > max {
            return Err(ContactError::TooLong { field, max });
        }
    }
    Ok(message)
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /api/contact`: relay a contact-form message by email.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    let result = relay(&state, addr, body).await;
    match &result {
        Ok(_) => tracing::info!(client = %addr.ip(), "contact message relayed"),
        Err(e @ ContactError::Delivery(_)) => tracing::error!(client = %addr.ip(), error = %e, "contact relay failed"),
        Err(e) => tracing::warn!(client = %addr.ip(), error = %e, status = %e.status(), "contact rejected"),
    }
    result
}

async fn relay(
    state: &AppState,
    addr: SocketAddr,
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    let Json(raw) = body.map_err(|e| ContactError::Malformed(e.body_text()))?;
    let message = validate(&raw)?;
    let mailer = state.mailer.as_ref().ok_or(ContactError::NotConfigured)?;
    state.rate_limiter.check_and_record(addr.ip())?;
    mailer.send(&message).await?;
    Ok(Json(ContactResponse { ok: true, error: None }))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
