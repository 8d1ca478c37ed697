//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! Each client IP may submit `limit` messages per `window`. Idle entries are
//! swept once the map grows past `SWEEP_THRESHOLD` so a stream of one-off
//! visitors cannot grow it without bound.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const SWEEP_THRESHOLD: usize = 1024;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RateLimitError {
    #[error("contact rate limit exceeded (max {limit} requests/{window_secs}s)")]
    Exceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: usize, window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), limit: limit.max(1), window }
    }

    /// Check the client's window, then record the request.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitError::Exceeded`] when the client has used its quota;
    /// the rejected request is not recorded.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    /// Internal: check + record with explicit timestamp (for testing).
    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if inner.len() > SWEEP_THRESHOLD {
            inner.retain(|_, requests| {
                prune_window(requests, now, self.window);
                !requests.is_empty()
            });
        }

        let requests = inner.entry(client).or_default();
        prune_window(requests, now, self.window);
        if requests.len() >= self.limit {
            return Err(RateLimitError::Exceeded { limit: self.limit, window_secs: self.window.as_secs() });
        }
        requests.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

/// Drop timestamps older than `window` from the front of the queue.
fn prune_window(requests: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = requests.front() {
        if now.duration_since(front) >= window {
            requests.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
