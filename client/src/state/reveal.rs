//! One-way entrance latches for viewport-triggered section animations.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const ABOUT_THRESHOLD: f64 = 0.3;
pub const SERVICES_THRESHOLD: f64 = 0.2;
pub const SKILLS_CHART_THRESHOLD: f64 = 0.3;
pub const SKILLS_THRESHOLD: f64 = 0.2;
pub const WORKSTATION_THRESHOLD: f64 = 0.2;
pub const EXPERIENCE_THRESHOLD: f64 = 0.2;
pub const CODE_PREVIEW_THRESHOLD: f64 = 0.3;
pub const PROJECTS_THRESHOLD: f64 = 0.1;
pub const PARALLAX_THRESHOLD: f64 = 0.1;
pub const TESTIMONIALS_THRESHOLD: f64 = 0.2;
pub const CONTACT_THRESHOLD: f64 = 0.2;
pub const CTA_THRESHOLD: f64 = 0.0;

/// Fraction of an element's height inside the viewport, in `[0, 1]`.
pub fn visible_fraction(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    if rect_height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let top = rect_top.max(0.0);
    let bottom = (rect_top + rect_height).min(viewport_height);
    ((bottom - top).max(0.0) / rect_height).clamp(0.0, 1.0)
}

/// True when the element covers the entire viewport.
pub fn fills_viewport(rect_top: f64, rect_height: f64, viewport_height: f64) -> bool {
    viewport_height > 0.0 && rect_top <= 0.0 && rect_top + rect_height >= viewport_height
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceLatch {
    threshold: f64,
    once: bool,
    entered: bool,
}

impl EntranceLatch {
    /// Trigger-once latch, the mode every section uses.
    pub fn once(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), once: true, entered: false }
    }

    pub fn repeating(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), once: false, entered: false }
    }

    pub fn entered(&self) -> bool {
        self.entered
    }

    /// Feed a visibility fraction; returns the (possibly latched) state.
    ///
    /// A zero threshold means "any pixel visible".
    pub fn observe(&mut self, fraction: f64) -> bool {
        if self.once && self.entered {
            return true;
        }
        self.entered = if self.threshold <= 0.0 { fraction > 0.0 } else { fraction >= self.threshold };
        self.entered
    }

    /// Observe raw geometry. Tall elements that fill the viewport count as
    /// entered even when their visible fraction stays below the threshold.
    pub fn observe_rect(&mut self, rect_top: f64, rect_height: f64, viewport_height: f64) -> bool {
        if fills_viewport(rect_top, rect_height, viewport_height) {
            return self.observe(1.0);
        }
        self.observe(visible_fraction(rect_top, rect_height, viewport_height))
    }
}

/// Staggered transition delay for the `index`-th child, in milliseconds.
pub fn stagger_delay_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

/// `transition-delay` style for a staggered child.
pub fn stagger_style(base_ms: u32, step_ms: u32, index: usize) -> String {
    format!("transition-delay: {}ms;", stagger_delay_ms(base_ms, step_ms, index))
}
