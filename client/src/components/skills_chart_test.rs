use super::*;
use crate::util::chart::{segment_sweep, Point};

#[test]
fn chart_kinds_have_selector_labels() {
    let labels: Vec<_> = ChartKind::ALL.iter().map(|k| k.button_label()).collect();
    assert_eq!(labels, ["Radar Chart", "Bar Chart", "Donut Chart"]);
    assert_eq!(ChartKind::default(), ChartKind::Radar);
}

#[test]
fn donut_data_covers_full_circle() {
    let segments = donut_segments(DONUT_DATA);
    assert_eq!(segments.last().map(|s| s.end_pct), Some(100.0));
    let sweep: f64 = segments.iter().map(|s| segment_sweep(s.start_pct, s.end_pct)).sum();
    assert!((sweep - std::f64::consts::TAU).abs() < 1e-9);
}

#[test]
fn radar_axes_are_evenly_spaced() {
    let expected = crate::util::chart::evenly_spaced_angles(RADAR_SKILLS.len());
    let actual: Vec<_> = RADAR_SKILLS.iter().map(|a| a.angle_deg).collect();
    assert_eq!(actual, expected);
}

#[test]
fn radar_points_lie_inside_outer_ring() {
    let center = Point { x: 150.0, y: 150.0 };
    for p in radar_points(RADAR_CENTER, RADAR_MAX_RADIUS, RADAR_SKILLS) {
        assert!(p.distance(center) <= RADAR_MAX_RADIUS + 1e-9);
    }
}

#[test]
fn bar_values_are_percentages() {
    assert_eq!(BAR_SKILLS.len(), 8);
    assert!(BAR_SKILLS.iter().all(|s| (0.0..=100.0).contains(&s.value)));
}
