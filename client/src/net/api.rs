//! HTTP calls from the browser to the portfolio server.
//!
//! Client-side (hydrate): real requests via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the contact relay is
//! only reachable from a hydrated page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactMessage;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    match status {
        429 => "contact request rate limited: 429".to_owned(),
        503 => "contact relay not configured: 503".to_owned(),
        _ => format!("contact request failed: {status}"),
    }
}

/// Relay a contact-form message via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the server
/// responds with a non-OK status.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(message)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(contact_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}
