use super::*;

#[test]
fn visible_fraction_fully_inside() {
    assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
}

#[test]
fn visible_fraction_partially_below_fold() {
    assert!((visible_fraction(700.0, 400.0, 800.0) - 0.25).abs() < 1e-9);
}

#[test]
fn visible_fraction_outside_viewport() {
    assert_eq!(visible_fraction(900.0, 400.0, 800.0), 0.0);
    assert_eq!(visible_fraction(-500.0, 400.0, 800.0), 0.0);
    assert_eq!(visible_fraction(0.0, 0.0, 800.0), 0.0);
}

#[test]
fn latch_never_resets_once_triggered() {
    let mut latch = EntranceLatch::once(0.3);
    assert!(!latch.observe(0.1));
    assert!(latch.observe(0.3));
    assert!(latch.observe(0.0));
    assert!(latch.entered());
}

#[test]
fn repeating_latch_follows_visibility() {
    let mut latch = EntranceLatch::repeating(0.5);
    assert!(latch.observe(0.6));
    assert!(!latch.observe(0.2));
}

#[test]
fn zero_threshold_needs_any_visibility() {
    let mut latch = EntranceLatch::once(CTA_THRESHOLD);
    assert!(!latch.observe(0.0));
    assert!(latch.observe(0.01));
}

#[test]
fn tall_section_filling_viewport_counts_as_entered() {
    let mut latch = EntranceLatch::once(0.3);
    // 3000px section, 800px viewport: never more than 27% visible.
    assert!(latch.observe_rect(-100.0, 3000.0, 800.0));
}

#[test]
fn observe_rect_below_threshold_stays_closed() {
    let mut latch = EntranceLatch::once(PROJECTS_THRESHOLD);
    assert!(!latch.observe_rect(780.0, 400.0, 800.0));
    assert!(latch.observe_rect(700.0, 400.0, 800.0));
}

#[test]
fn stagger_delay_grows_per_index() {
    assert_eq!(stagger_delay_ms(0, 100, 0), 0);
    assert_eq!(stagger_delay_ms(200, 100, 3), 500);
    assert_eq!(stagger_style(0, 50, 2), "transition-delay: 100ms;");
}
