//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional email relay and the contact rate limiter. There is
//! no other server-side state; the site content is compiled into the app.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mailer::MailSender;
use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional email relay. `None` if the EmailJS env vars are not configured.
    pub mailer: Option<Arc<dyn MailSender>>,
    /// Per-IP limiter for contact submissions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig, mailer: Option<Arc<dyn MailSender>>) -> Self {
        Self { mailer, rate_limiter: RateLimiter::new(config.contact_rate_limit, config.contact_rate_window) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with default limits and no mailer.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(&ServerConfig::default(), None)
    }

    /// Create a test `AppState` with a mock mailer.
    #[must_use]
    pub fn test_app_state_with_mailer(mailer: Arc<dyn MailSender>) -> AppState {
        AppState::new(&ServerConfig::default(), Some(mailer))
    }

    /// Create a test `AppState` with a custom contact quota.
    #[must_use]
    pub fn test_app_state_with_limit(mailer: Arc<dyn MailSender>, limit: usize) -> AppState {
        let config = ServerConfig { contact_rate_limit: limit, ..ServerConfig::default() };
        AppState::new(&config, Some(mailer))
    }
}
