use super::*;

#[test]
fn current_year_follows_utc_clock() {
    let year = current_year();
    assert!(year >= 2025);
    assert!((year - OffsetDateTime::now_utc().year()).abs() <= 1);
}

#[test]
fn footer_links_target_page_sections() {
    for (_, target) in FOOTER_LINKS {
        assert!(crate::state::nav::NAV_ITEMS.iter().any(|item| item.target == *target));
    }
}
