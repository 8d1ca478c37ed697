use super::*;

#[test]
fn nav_items_cover_linked_sections_in_order() {
    let targets: Vec<_> = NAV_ITEMS.iter().map(|i| i.target).collect();
    assert_eq!(targets, ["hero", "about", "skills", "experience", "projects", "testimonials", "contact"]);
}

#[test]
fn scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(51.0));
}

#[test]
fn scroll_top_button_threshold() {
    assert!(!shows_scroll_top(499.0));
    assert!(shows_scroll_top(501.0));
}

#[test]
fn scroll_target_applies_nav_offset() {
    assert_eq!(scroll_target_y(400.0, 1000.0), 1320.0);
    assert_eq!(scroll_target_y(20.0, 0.0), 0.0);
}

#[test]
fn active_target_picks_last_section_above_nav() {
    let tops = [("hero", -900.0), ("about", -100.0), ("skills", 60.0), ("experience", 700.0)];
    assert_eq!(active_target(&tops), Some("skills"));
    assert_eq!(active_target(&[("hero", 200.0)]), None);
}

#[test]
fn select_closes_menu() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.select("contact");
    assert!(!nav.menu_open);
    assert_eq!(nav.active, Some("contact"));
}
