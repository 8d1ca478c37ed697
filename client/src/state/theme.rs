//! Site-wide light/dark theme.
//!
//! DESIGN
//! ======
//! `ThemeState` holds only the `dark_mode` flag; the palette is derived
//! from it on read so the two can never disagree. `ThemeStore` wraps the
//! signal pair and keeps the write half private, so `toggle` is the one
//! mutation any component can perform.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

/// Named colors for one theme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub background_secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub gradient: &'static str,
    pub card_bg: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    primary: "#00D9FF",
    secondary: "#FF6B35",
    accent: "#7C3AED",
    background: "#0A0A0F",
    background_secondary: "#12121A",
    text: "#FFFFFF",
    text_secondary: "#A0A0B0",
    gradient: "linear-gradient(135deg, #00D9FF 0%, #7C3AED 50%, #FF6B35 100%)",
    card_bg: "rgba(18, 18, 26, 0.8)",
};

pub const LIGHT_PALETTE: Palette = Palette {
    primary: "#0066CC",
    secondary: "#FF5722",
    accent: "#6200EA",
    background: "#F5F5F5",
    background_secondary: "#FFFFFF",
    text: "#1A1A2E",
    text_secondary: "#666666",
    gradient: "linear-gradient(135deg, #0066CC 0%, #6200EA 50%, #FF5722 100%)",
    card_bg: "rgba(255, 255, 255, 0.9)",
};

impl Palette {
    /// CSS custom properties exposed to the stylesheet.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--primary", self.primary),
            ("--secondary", self.secondary),
            ("--accent", self.accent),
            ("--bg", self.background),
            ("--bg-secondary", self.background_secondary),
            ("--text", self.text),
            ("--text-secondary", self.text_secondary),
            ("--gradient", self.gradient),
            ("--card-bg", self.card_bg),
        ]
    }

    /// Inline `style` attribute value declaring every variable.
    pub fn inline_style(&self) -> String {
        self.css_variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl ThemeState {
    pub fn palette(self) -> Palette {
        if self.dark_mode { DARK_PALETTE } else { LIGHT_PALETTE }
    }

    pub fn toggled(self) -> Self {
        Self { dark_mode: !self.dark_mode }
    }

    /// Value for the `data-theme` attribute.
    pub fn attribute(self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}

/// Shared theme handle provided via context at app start.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    state: ReadSignal<ThemeState>,
    set_state: WriteSignal<ThemeState>,
}

impl ThemeStore {
    pub fn new(initial: ThemeState) -> Self {
        let (state, set_state) = signal(initial);
        Self { state, set_state }
    }

    pub fn state(&self) -> ReadSignal<ThemeState> {
        self.state
    }

    pub fn dark_mode(&self) -> bool {
        self.state.get().dark_mode
    }

    pub fn palette(&self) -> Palette {
        self.state.get().palette()
    }

    /// Flip the theme and mirror it onto the document root.
    pub fn toggle(&self) {
        self.set_state.update(|s| *s = s.toggled());
        crate::util::dark_mode::apply(self.state.get_untracked());
    }
}
