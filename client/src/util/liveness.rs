//! Cancellation flag for timer loops owned by a component.
//!
//! Timer tasks `sleep` on `gloo-timers` futures and check the flag after
//! every wake; `on_cleanup` clears it so a disposed component's loop exits
//! at its next tick instead of writing to dead signals.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Liveness {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Flag that is cleared when the current reactive owner is disposed.
    pub fn until_cleanup() -> Self {
        let alive = Self::default();
        let on_drop = alive.clone();
        leptos::prelude::on_cleanup(move || on_drop.kill());
        alive
    }
}

/// Suspend the current task for `delay`.
#[cfg(feature = "hydrate")]
pub async fn sleep(delay: std::time::Duration) {
    gloo_timers::future::sleep(delay).await;
}
