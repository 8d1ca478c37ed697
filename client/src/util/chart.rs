//! Skill chart geometry: radar polygon, donut arcs, bar widths.
//!
//! All coordinates are SVG user units. Angles are measured clockwise from
//! twelve o'clock, so `0°` points straight up.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

pub const RADAR_CENTER: Point = Point { x: 150.0, y: 150.0 };
pub const RADAR_MAX_RADIUS: f64 = 120.0;
pub const RADAR_LABEL_RADIUS: f64 = 145.0;
pub const RADAR_RING_LEVELS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];

pub const DONUT_CENTER: Point = Point { x: 100.0, y: 100.0 };
pub const DONUT_RADIUS: f64 = 80.0;
pub const DONUT_HOLE_RADIUS: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One spoke of the radar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: f64,
    pub angle_deg: f64,
}

/// One labelled value for bar and donut encodings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutSegment {
    pub label: &'static str,
    pub color: &'static str,
    pub start_pct: f64,
    pub end_pct: f64,
}

/// Polar to cartesian for a radar spoke. Values are not range-checked.
pub fn radar_point(center: Point, max_radius: f64, angle_deg: f64, value: f64) -> Point {
    let radius = value / 100.0 * max_radius;
    let theta = (angle_deg - 90.0).to_radians();
    Point { x: center.x + radius * theta.cos(), y: center.y + radius * theta.sin() }
}

pub fn radar_points(center: Point, max_radius: f64, axes: &[RadarAxis]) -> Vec<Point> {
    axes.iter()
        .map(|axis| radar_point(center, max_radius, axis.angle_deg, axis.value))
        .collect()
}

/// Spoke end on the outer ring.
pub fn radar_axis_end(center: Point, max_radius: f64, angle_deg: f64) -> Point {
    radar_point(center, max_radius, angle_deg, 100.0)
}

/// Label anchor just outside the outer ring.
pub fn radar_label_position(center: Point, angle_deg: f64) -> Point {
    let theta = (angle_deg - 90.0).to_radians();
    Point {
        x: center.x + RADAR_LABEL_RADIUS * theta.cos(),
        y: center.y + RADAR_LABEL_RADIUS * theta.sin(),
    }
}

/// Radii of the concentric background rings.
pub fn radar_rings(max_radius: f64, levels: &[f64]) -> Vec<f64> {
    levels.iter().map(|level| level * max_radius / 100.0).collect()
}

pub fn evenly_spaced_angles(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = 360.0 / count as f64;
    #[allow(clippy::cast_precision_loss)]
    (0..count).map(|i| i as f64 * step).collect()
}

/// Closed polygon path `M x y L x y ... Z`. Empty input yields an empty path.
pub fn radar_path(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{cmd} {} {}", fmt_coord(p.x), fmt_coord(p.y));
    }
    if !out.is_empty() {
        out.push_str(" Z");
    }
    out
}

/// Cumulative percentage ranges in input order.
pub fn donut_segments(slices: &[ChartSlice]) -> Vec<DonutSegment> {
    let mut cumulative = 0.0;
    slices
        .iter()
        .map(|slice| {
            let start_pct = cumulative;
            cumulative += slice.value;
            DonutSegment { label: slice.label, color: slice.color, start_pct, end_pct: cumulative }
        })
        .collect()
}

fn pct_to_radians(pct: f64) -> f64 {
    pct / 100.0 * TAU - FRAC_PI_2
}

/// Swept angle of a segment in radians.
pub fn segment_sweep(start_pct: f64, end_pct: f64) -> f64 {
    pct_to_radians(end_pct) - pct_to_radians(start_pct)
}

/// Wedge path from the centre along an arc of `radius`.
///
/// The large-arc flag is set when the segment spans more than half the circle.
pub fn donut_arc_path(center: Point, radius: f64, start_pct: f64, end_pct: f64) -> String {
    let start = pct_to_radians(start_pct);
    let end = pct_to_radians(end_pct);
    let x1 = center.x + radius * start.cos();
    let y1 = center.y + radius * start.sin();
    let x2 = center.x + radius * end.cos();
    let y2 = center.y + radius * end.sin();
    let large_arc = u8::from(end_pct - start_pct > 50.0);
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        fmt_coord(center.x),
        fmt_coord(center.y),
        fmt_coord(x1),
        fmt_coord(y1),
        fmt_coord(x2),
        fmt_coord(y2),
        r = fmt_coord(radius),
    )
}

/// CSS width percentage for the bar encoding.
pub fn bar_width_pct(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// Two-decimal coordinate with trailing zeros trimmed.
pub fn fmt_coord(v: f64) -> String {
    let v = if v.abs() < 0.005 { 0.0 } else { v };
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_owned()
}
