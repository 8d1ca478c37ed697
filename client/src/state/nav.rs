//! Navigation bar items and scroll-position rules.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll depth after which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Height of the fixed navbar; section jumps land this far above the target.
pub const NAV_OFFSET_PX: f64 = 80.0;
/// Scroll depth after which the back-to-top button appears.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: "hero" },
    NavItem { label: "About", target: "about" },
    NavItem { label: "Skills", target: "skills" },
    NavItem { label: "Experience", target: "experience" },
    NavItem { label: "Projects", target: "projects" },
    NavItem { label: "Testimonials", target: "testimonials" },
    NavItem { label: "Contact", target: "contact" },
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

pub fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// Document y to scroll to so a section's top clears the navbar.
pub fn scroll_target_y(section_top_in_viewport: f64, scroll_y: f64) -> f64 {
    (section_top_in_viewport + scroll_y - NAV_OFFSET_PX).max(0.0)
}

/// The nav target whose section contains the navbar's bottom edge.
///
/// `tops` holds each section's viewport-relative top, in nav order.
pub fn active_target(tops: &[(&'static str, f64)]) -> Option<&'static str> {
    tops.iter()
        .filter(|(_, top)| *top <= NAV_OFFSET_PX + 1.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(target, _)| *target)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub active: Option<&'static str>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link always closes the mobile menu.
    pub fn select(&mut self, target: &'static str) {
        self.menu_open = false;
        self.active = Some(target);
    }
}
