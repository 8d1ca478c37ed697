use leptos::prelude::*;

use super::*;

#[test]
fn default_theme_is_dark() {
    let state = ThemeState::default();
    assert!(state.dark_mode);
    assert_eq!(state.palette(), DARK_PALETTE);
    assert_eq!(state.attribute(), "dark");
}

#[test]
fn palette_is_function_of_flag() {
    assert_eq!(ThemeState { dark_mode: false }.palette().primary, "#0066CC");
    assert_eq!(ThemeState { dark_mode: true }.palette().primary, "#00D9FF");
    assert_eq!(ThemeState { dark_mode: false }.palette().card_bg, "rgba(255, 255, 255, 0.9)");
}

#[test]
fn double_toggle_restores_state_and_palette() {
    let start = ThemeState::default();
    let twice = start.toggled().toggled();
    assert_eq!(twice, start);
    assert_eq!(twice.palette(), start.palette());
    assert_ne!(start.toggled().palette(), start.palette());
}

#[test]
fn inline_style_declares_all_variables() {
    let style = LIGHT_PALETTE.inline_style();
    assert!(style.starts_with("--primary: #0066CC;"));
    assert!(style.contains("--bg: #F5F5F5;"));
    assert!(style.contains("--card-bg: rgba(255, 255, 255, 0.9);"));
    assert_eq!(style.matches(';').count(), 9);
}

#[test]
fn store_toggle_is_the_only_write_path() {
    let owner = Owner::new();
    owner.with(|| {
        let store = ThemeStore::new(ThemeState::default());
        assert!(store.dark_mode());
        store.toggle();
        assert!(!store.dark_mode());
        assert_eq!(store.palette(), LIGHT_PALETTE);
        store.toggle();
        assert_eq!(store.state().get_untracked(), ThemeState::default());
    });
}
