use super::config::{DEFAULT_EMAILJS_API_URL, MailerTimeouts};
use super::*;

fn config(private_key: Option<&str>) -> MailerConfig {
    MailerConfig {
        api_url: DEFAULT_EMAILJS_API_URL.into(),
        service_id: "service_abc".into(),
        template_id: "template_xyz".into(),
        public_key: "pk_123".into(),
        private_key: private_key.map(Into::into),
        timeouts: MailerTimeouts { request_secs: 15, connect_secs: 5 },
    }
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Let's build something.".into(),
    }
}

#[test]
fn request_body_has_emailjs_shape() {
    let cfg = config(None);
    let msg = message();
    let json = serde_json::to_value(request_body(&cfg, &msg)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "service_id": "service_abc",
            "template_id": "template_xyz",
            "user_id": "pk_123",
            "template_params": {
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Let's build something.",
            }
        })
    );
}

#[test]
fn request_body_includes_access_token_when_configured() {
    let cfg = config(Some("secret"));
    let msg = message();
    let json = serde_json::to_value(request_body(&cfg, &msg)).unwrap();
    assert_eq!(json.get("accessToken").and_then(|v| v.as_str()), Some("secret"));
}

#[test]
fn from_config_builds_client() {
    let client = EmailJsClient::from_config(config(None)).unwrap();
    assert_eq!(client.service_id(), "service_abc");
}

#[test]
fn response_error_reports_status() {
    let err = MailError::Response { status: 400, body: "The user ID is invalid".into() };
    assert_eq!(err.to_string(), "email service error: status 400");
}
