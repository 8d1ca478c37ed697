use super::*;

#[test]
fn per_view_breakpoints() {
    assert_eq!(per_view_for_width(375.0), 1);
    assert_eq!(per_view_for_width(640.0), 1);
    assert_eq!(per_view_for_width(767.9), 1);
    assert_eq!(per_view_for_width(768.0), 2);
    assert_eq!(per_view_for_width(1023.0), 2);
    assert_eq!(per_view_for_width(1024.0), 3);
    assert_eq!(per_view_for_width(1920.0), 3);
}

#[test]
fn next_and_prev_wrap() {
    let mut c = CarouselState::new(5);
    c.prev();
    assert_eq!(c.index(), 4);
    c.next();
    assert_eq!(c.index(), 0);
    for _ in 0..7 {
        c.next();
    }
    assert_eq!(c.index(), 2);
}

#[test]
fn go_to_wraps_out_of_range() {
    let mut c = CarouselState::new(5);
    c.go_to(3);
    assert_eq!(c.index(), 3);
    c.go_to(11);
    assert_eq!(c.index(), 1);
}

#[test]
fn visible_indices_wrap_past_end() {
    let mut c = CarouselState::new(5);
    c.set_per_view(3);
    c.go_to(4);
    assert_eq!(c.visible_indices(), vec![4, 0, 1]);
}

#[test]
fn per_view_is_capped_by_len() {
    let mut c = CarouselState::new(2);
    c.set_per_view(3);
    assert_eq!(c.visible_indices(), vec![0, 1]);
    c.set_per_view(0);
    assert_eq!(c.per_view(), 1);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = CarouselState::new(0);
    c.next();
    c.prev();
    c.go_to(3);
    assert!(c.is_empty());
    assert!(c.visible_indices().is_empty());
}
