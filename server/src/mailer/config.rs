//! Email relay configuration parsed from environment variables.

use super::types::MailError;
use crate::config::parse_or;

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_MAILER_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MAILER_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailerTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub timeouts: MailerTimeouts,
}

impl MailerConfig {
    /// Build typed mailer config from environment variables.
    ///
    /// Required:
    /// - `EMAILJS_SERVICE_ID`
    /// - `EMAILJS_TEMPLATE_ID`
    /// - `EMAILJS_PUBLIC_KEY`
    ///
    /// Optional:
    /// - `EMAILJS_PRIVATE_KEY`: sent as `accessToken` when present
    /// - `EMAILJS_API_URL`: default EmailJS send endpoint
    /// - `MAILER_REQUEST_TIMEOUT_SECS`: default 15
    /// - `MAILER_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`MailError::MissingConfig`] naming the first absent identifier.
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`MailerConfig::from_env`].
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, MailError> {
        let required = |var: &'static str| {
            get(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(MailError::MissingConfig { var })
        };

        let service_id = required("EMAILJS_SERVICE_ID")?;
        let template_id = required("EMAILJS_TEMPLATE_ID")?;
        let public_key = required("EMAILJS_PUBLIC_KEY")?;
        let private_key = get("EMAILJS_PRIVATE_KEY")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        let api_url = get("EMAILJS_API_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_owned());
        let timeouts = MailerTimeouts {
            request_secs: parse_or(&get, "MAILER_REQUEST_TIMEOUT_SECS", DEFAULT_MAILER_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(&get, "MAILER_CONNECT_TIMEOUT_SECS", DEFAULT_MAILER_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, service_id, template_id, public_key, private_key, timeouts })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
