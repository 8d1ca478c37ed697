//! Networking modules.
//!
//! `api` performs browser-side HTTP calls and `types` defines the JSON
//! shapes shared with the server.

pub mod api;
pub mod types;
