#![recursion_limit = "256"]

mod config;
mod mailer;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::mailer::{EmailJsClient, MailSender};

#[tokio::main]
async fn main() {
    // Missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    // Initialize mailer (non-fatal: contact form answers 503 if config missing).
    let mailer: Option<Arc<dyn MailSender>> = match EmailJsClient::from_env() {
        Ok(client) => {
            tracing::info!(service = client.service_id(), "email relay initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "email relay not configured; contact form disabled");
            None
        }
    };

    let state = state::AppState::new(&config, mailer);
    let app = routes::app(state).expect("failed to build router");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portfolio listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
