//! Mailer: relays contact-form messages to the EmailJS REST API.
//!
//! DESIGN
//! ======
//! Credentials stay on the server; the browser only ever talks to
//! `/api/contact`. `MailSender` is the seam handlers depend on so tests can
//! swap in a mock. Request body construction is a pure function for
//! testability.

pub mod config;
pub mod types;

use std::time::Duration;

use portfolio::net::types::ContactMessage;
use serde::Serialize;

use config::MailerConfig;
pub use types::{MailError, MailSender};

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsClient {
    http: reqwest::Client,
    config: MailerConfig,
}

impl EmailJsClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an EmailJS identifier is missing or the HTTP
    /// client fails to build.
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_config(MailerConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: MailerConfig) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| MailError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.config.service_id
    }
}

#[async_trait::async_trait]
impl MailSender for EmailJsClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let body = request_body(&self.config, message);

        let response = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Response { status, body });
        }
        Ok(())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

fn request_body<'a>(config: &'a MailerConfig, message: &'a ContactMessage) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: TemplateParams {
            name: &message.name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
        },
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
