use std::f64::consts::TAU;

use super::*;

const EPS: f64 = 1e-9;

fn slice(label: &'static str, value: f64) -> ChartSlice {
    ChartSlice { label, value, color: "#000000" }
}

#[test]
fn radar_full_value_sits_on_outer_ring() {
    for angle in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0, 17.5] {
        let p = radar_point(RADAR_CENTER, RADAR_MAX_RADIUS, angle, 100.0);
        assert!((p.distance(RADAR_CENTER) - RADAR_MAX_RADIUS).abs() < EPS);
    }
}

#[test]
fn radar_zero_value_is_the_centre() {
    let p = radar_point(RADAR_CENTER, RADAR_MAX_RADIUS, 240.0, 0.0);
    assert!(p.distance(RADAR_CENTER) < EPS);
}

#[test]
fn radar_zero_degrees_points_up() {
    let p = radar_point(RADAR_CENTER, RADAR_MAX_RADIUS, 0.0, 50.0);
    assert!((p.x - 150.0).abs() < EPS);
    assert!((p.y - 90.0).abs() < EPS);
}

#[test]
fn radar_path_is_closed_polygon_in_input_order() {
    let axes = [
        RadarAxis { label: "a", value: 100.0, angle_deg: 0.0 },
        RadarAxis { label: "b", value: 100.0, angle_deg: 90.0 },
        RadarAxis { label: "c", value: 100.0, angle_deg: 180.0 },
    ];
    let points = radar_points(RADAR_CENTER, RADAR_MAX_RADIUS, &axes);
    assert_eq!(radar_path(&points), "M 150 30 L 270 150 L 150 270 Z");
}

#[test]
fn radar_path_empty_input_is_empty() {
    assert_eq!(radar_path(&[]), "");
}

#[test]
fn radar_label_sits_outside_ring() {
    let p = radar_label_position(RADAR_CENTER, 90.0);
    assert!((p.x - 295.0).abs() < EPS);
    assert!((p.y - 150.0).abs() < EPS);
    let end = radar_axis_end(RADAR_CENTER, RADAR_MAX_RADIUS, 90.0);
    assert!((end.x - 270.0).abs() < EPS);
}

#[test]
fn radar_rings_scale_levels() {
    assert_eq!(radar_rings(RADAR_MAX_RADIUS, &RADAR_RING_LEVELS), vec![24.0, 48.0, 72.0, 96.0, 120.0]);
}

#[test]
fn evenly_spaced_angles_divide_the_circle() {
    assert_eq!(evenly_spaced_angles(6), vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    assert!(evenly_spaced_angles(0).is_empty());
}

#[test]
fn donut_segments_are_cumulative_and_end_at_total() {
    let segments = donut_segments(&[slice("a", 35.0), slice("b", 30.0), slice("c", 20.0), slice("d", 15.0)]);
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0].start_pct, 0.0);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end_pct, pair[1].start_pct);
    }
    assert_eq!(segments[3].end_pct, 100.0);
}

#[test]
fn donut_sweeps_sum_to_full_turn() {
    let segments = donut_segments(&[slice("a", 35.0), slice("b", 30.0), slice("c", 20.0), slice("d", 15.0)]);
    let total: f64 = segments.iter().map(|s| segment_sweep(s.start_pct, s.end_pct)).sum();
    assert!((total - TAU).abs() < 1e-9);
}

#[test]
fn donut_arc_path_for_first_quarter() {
    let path = donut_arc_path(DONUT_CENTER, DONUT_RADIUS, 0.0, 25.0);
    assert_eq!(path, "M 100 100 L 100 20 A 80 80 0 0 1 180 100 Z");
}

#[test]
fn donut_arc_large_flag_only_above_half() {
    assert!(donut_arc_path(DONUT_CENTER, DONUT_RADIUS, 0.0, 50.0).contains(" 0 0 1 "));
    assert!(donut_arc_path(DONUT_CENTER, DONUT_RADIUS, 0.0, 65.0).contains(" 0 1 1 "));
}

#[test]
fn bar_width_clamps_display_only() {
    assert_eq!(bar_width_pct(95.0), 95.0);
    assert_eq!(bar_width_pct(130.0), 100.0);
    assert_eq!(bar_width_pct(-4.0), 0.0);
    assert_eq!(bar_width_pct(f64::NAN), 0.0);
}

#[test]
fn fmt_coord_trims_trailing_zeros() {
    assert_eq!(fmt_coord(150.0), "150");
    assert_eq!(fmt_coord(12.5), "12.5");
    assert_eq!(fmt_coord(-0.001), "0");
    assert_eq!(fmt_coord(3.14159), "3.14");
}
