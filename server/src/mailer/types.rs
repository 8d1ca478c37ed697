//! Mailer errors and the sender trait.

use portfolio::net::types::ContactMessage;

/// Errors produced while configuring or calling the email relay.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A required environment variable is not set.
    #[error("missing mailer config: env var {var} not set")]
    MissingConfig { var: &'static str },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the email service failed.
    #[error("email request failed: {0}")]
    Request(String),

    /// The email service returned a non-success HTTP status.
    #[error("email service error: status {status}")]
    Response { status: u16, body: String },
}

/// Delivers contact-form messages. Enables mocking in tests.
#[async_trait::async_trait]
pub trait MailSender: Send + Sync {
    /// Send one message. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the request fails or the service rejects it.
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}
