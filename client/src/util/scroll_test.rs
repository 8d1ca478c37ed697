use super::*;

#[test]
fn progress_is_zero_before_element_enters() {
    assert_eq!(scroll_progress(900.0, 400.0, 800.0), 0.0);
    assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
}

#[test]
fn progress_is_one_after_element_leaves() {
    assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
    assert_eq!(scroll_progress(-1200.0, 400.0, 800.0), 1.0);
}

#[test]
fn progress_is_half_when_element_centered() {
    // 800px viewport, 400px element centred: top at 200.
    assert!((scroll_progress(200.0, 400.0, 800.0) - 0.5).abs() < 1e-9);
}

#[test]
fn progress_degenerate_viewport_is_zero() {
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn parallax_layers_follow_their_tracks() {
    let layers = ParallaxLayers::default();
    assert_eq!(layers.y1.at(0.5), -100.0);
    assert_eq!(layers.y3.at(1.0), -300.0);
    assert_eq!(layers.y4.at(1.0), 150.0);
    assert_eq!(layers.rotate2.at(1.0), -30.0);
    assert!((layers.scale.at(0.5) - 1.0).abs() < 1e-9);
    assert_eq!(layers.opacity.at(0.0), 0.0);
    assert_eq!(layers.opacity.at(0.5), 1.0);
}

#[test]
fn workstation_tracks_resolve_full_transform() {
    let tracks = workstation_tracks();
    let start = tracks.resolve(0.0);
    assert_eq!(start.translate_y, 100.0);
    assert_eq!(start.rotate_deg, 0.0);
    assert!((start.scale - 0.8).abs() < 1e-9);
    assert_eq!(start.opacity, 1.0);

    let mid = tracks.resolve(0.5);
    assert_eq!(mid.translate_y, 0.0);
    assert!((mid.scale - 1.0).abs() < 1e-9);
}

#[test]
fn transform_css_formats_all_properties() {
    let css = Transform { translate_y: -12.5, rotate_deg: 3.0, scale: 0.9, opacity: 0.5 }.to_css();
    assert_eq!(css, "transform: translateY(-12.50px) rotate(3.00deg) scale(0.900); opacity: 0.500;");
}

#[test]
fn empty_tracks_resolve_to_identity() {
    assert_eq!(LayerTracks::default().resolve(0.7), Transform::default());
}
