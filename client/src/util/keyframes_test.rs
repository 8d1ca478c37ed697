use super::*;

#[test]
fn interpolate_midpoint_of_linear_track() {
    let frames = [(0.0, 0.0), (1.0, -200.0)];
    assert!((interpolate(0.5, &frames) + 100.0).abs() < 1e-9);
}

#[test]
fn interpolate_clamps_outside_range() {
    let frames = [(0.0, 0.0), (1.0, -200.0)];
    assert_eq!(interpolate(-0.3, &frames), 0.0);
    assert_eq!(interpolate(1.7, &frames), -200.0);
}

#[test]
fn interpolate_handles_multi_segment_tracks() {
    let opacity = [(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)];
    assert!((interpolate(0.1, &opacity) - 0.5).abs() < 1e-9);
    assert_eq!(interpolate(0.5, &opacity), 1.0);
    assert!((interpolate(0.9, &opacity) - 0.5).abs() < 1e-9);
}

#[test]
fn interpolate_empty_and_single_frame() {
    assert_eq!(interpolate(0.4, &[]), 0.0);
    assert_eq!(interpolate(0.4, &[(0.5, 3.0)]), 3.0);
}

#[test]
fn interpolate_nan_progress_yields_first_value() {
    assert_eq!(interpolate(f64::NAN, &[(0.0, 2.0), (1.0, 4.0)]), 2.0);
}

#[test]
fn keyframes_sorts_unordered_inputs() {
    let track = Keyframes::new(&[1.0, 0.0, 0.5], &[0.8, 0.8, 1.0]);
    assert_eq!(track.len(), 3);
    assert_eq!(track.at(0.5), 1.0);
    assert!((track.at(0.25) - 0.9).abs() < 1e-9);
}

#[test]
fn keyframes_linear_matches_endpoints() {
    let track = Keyframes::linear(100.0, -100.0);
    assert_eq!(track.at(0.0), 100.0);
    assert_eq!(track.at(1.0), -100.0);
    assert_eq!(track.at(0.5), 0.0);
    assert!(!track.is_empty());
}
