//! Testimonials carousel position and responsive page size.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Slides shown side by side at a given viewport width.
pub fn per_view_for_width(width: f64) -> usize {
    if width >= 1024.0 {
        3
    } else if width >= 768.0 {
        2
    } else {
        1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
    per_view: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, per_view: 1 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    /// Slides on screen, starting at the current one and wrapping around.
    pub fn visible_indices(&self) -> Vec<usize> {
        let count = self.per_view.min(self.len);
        (0..count).map(|offset| (self.index + offset) % self.len).collect()
    }
}
