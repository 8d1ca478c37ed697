use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::*;
use crate::mailer::MailSender;
use crate::state::test_helpers;

struct MockMailer {
    sent: Mutex<Vec<ContactMessage>>,
    calls: AtomicUsize,
    fail_with: Option<u16>,
}

impl MockMailer {
    fn ok() -> Arc<Self> {
        Arc::new(Self { sent: Mutex::new(Vec::new()), calls: AtomicUsize::new(0), fail_with: None })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self { sent: Mutex::new(Vec::new()), calls: AtomicUsize::new(0), fail_with: Some(status) })
    }
}

#[async_trait::async_trait]
impl MailSender for MockMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_with {
            return Err(MailError::Response { status, body: "rejected".into() });
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

fn addr(last: u8) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(198, 51, 100, last)), 50_000)
}

fn valid_message() -> ContactMessage {
    ContactMessage {
        name: "  Ada Lovelace ".into(),
        email: "ada@example.com".into(),
        subject: "Engine".into(),
        message: "Shall we compute Bernoulli numbers?".into(),
    }
}

async fn post(state: &AppState, from: SocketAddr, message: ContactMessage) -> Result<Json<ContactResponse>, ContactError> {
    submit_contact(State(state.clone()), ConnectInfo(from), Ok(Json(message))).await
}

#[tokio::test]
async fn relays_trimmed_message() {
    let mailer = MockMailer::ok();
    let state = test_helpers::test_app_state_with_mailer(mailer.clone());

    let Json(resp) = post(&state, addr(1), valid_message()).await.unwrap();
    assert_eq!(resp, ContactResponse { ok: true, error: None });

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ada Lovelace");
}

#[tokio::test]
async fn blank_field_is_bad_request() {
    let mailer = MockMailer::ok();
    let state = test_helpers::test_app_state_with_mailer(mailer.clone());
    let mut message = valid_message();
    message.subject = "   ".into();

    let err = post(&state, addr(1), message).await.unwrap_err();
    assert!(matches!(err, ContactError::MissingField("subject")));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let state = test_helpers::test_app_state_with_mailer(MockMailer::ok());
    let body = Json::<ContactMessage>::from_bytes(b"{\"name\": 42}");

    let err = submit_contact(State(state), ConnectInfo(addr(1)), body).await.unwrap_err();
    assert!(matches!(err, ContactError::Malformed(_)));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_mailer_is_service_unavailable() {
    let state = test_helpers::test_app_state();

    let err = post(&state, addr(1), valid_message()).await.unwrap_err();
    assert!(matches!(err, ContactError::NotConfigured));
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn delivery_failure_is_bad_gateway() {
    let state = test_helpers::test_app_state_with_mailer(MockMailer::failing(400));

    let err = post(&state, addr(1), valid_message()).await.unwrap_err();
    assert!(matches!(err, ContactError::Delivery(MailError::Response { status: 400, .. })));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn quota_is_per_client() {
    let mailer = MockMailer::ok();
    let state = test_helpers::test_app_state_with_limit(mailer.clone(), 2);

    post(&state, addr(1), valid_message()).await.unwrap();
    post(&state, addr(1), valid_message()).await.unwrap();
    let err = post(&state, addr(1), valid_message()).await.unwrap_err();
    assert!(matches!(err, ContactError::RateLimited(_)));
    assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);

    post(&state, addr(2), valid_message()).await.unwrap();
    assert_eq!(mailer.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn invalid_input_does_not_consume_quota() {
    let mailer = MockMailer::ok();
    let state = test_helpers::test_app_state_with_limit(mailer, 1);
    let mut bad = valid_message();
    bad.email = "not-an-address".into();

    assert!(post(&state, addr(1), bad).await.is_err());
    assert!(post(&state, addr(1), valid_message()).await.is_ok());
}

#[test]
fn validate_rejects_bad_addresses() {
    for email in ["ada", "@example.com", "ada@", "ada@example", "ada@.com", "ada@example.", "a b@example.com", "a@b@c.com"] {
        let mut message = valid_message();
        message.email = email.into();
        assert!(matches!(validate(&message), Err(ContactError::InvalidEmail)), "{email} should be rejected");
    }
}

#[test]
fn validate_rejects_overlong_message() {
    let mut message = valid_message();
    message.message = "x".repeat(MAX_MESSAGE_LEN + 1);
    assert!(matches!(validate(&message), Err(ContactError::TooLong { field: "message", .. })));
}

#[test]
fn error_body_hides_delivery_details() {
    let err = ContactError::Delivery(MailError::Response { status: 401, body: "bad key pk_123".into() });
    assert_eq!(err.public_message(), "message delivery failed");
    let err = ContactError::MissingField("email");
    assert_eq!(err.public_message(), "missing field: email");
}
