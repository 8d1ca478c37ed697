//! Splash-screen progress counter.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(30);
pub const STEP_PERCENT: u8 = 2;
/// Pause at 100% before the page content mounts.
pub const EXIT_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    percent: u8,
}

impl LoadProgress {
    pub fn percent(self) -> u8 {
        self.percent
    }

    pub fn is_complete(self) -> bool {
        self.percent >= 100
    }

    /// Advance by one step, saturating at 100. Returns `true` once complete.
    pub fn tick(&mut self) -> bool {
        self.percent = self.percent.saturating_add(STEP_PERCENT).min(100);
        self.is_complete()
    }

    /// Width of the progress bar fill.
    pub fn bar_style(self) -> String {
        format!("width: {}%;", self.percent)
    }
}
