//! Technical proficiency charts: radar, horizontal bars and donut, with a
//! selector to switch between them and a row of performance metrics.
//!
//! Geometry comes from `util::chart`; this module only holds the data and
//! the SVG markup.

#[cfg(test)]
#[path = "skills_chart_test.rs"]
mod skills_chart_test;

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{SKILLS_CHART_THRESHOLD, stagger_style};
use crate::util::chart::{
    ChartSlice, DONUT_CENTER, DONUT_HOLE_RADIUS, DONUT_RADIUS, RADAR_CENTER, RADAR_MAX_RADIUS, RADAR_RING_LEVELS,
    RadarAxis, bar_width_pct, donut_arc_path, donut_segments, fmt_coord, radar_axis_end, radar_label_position,
    radar_path, radar_points, radar_rings,
};
use crate::util::color::glow;
use crate::util::filter::title_case;
use crate::util::viewport::use_entrance;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Radar,
    Bar,
    Donut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Radar, ChartKind::Bar, ChartKind::Donut];

    pub fn id(self) -> &'static str {
        match self {
            Self::Radar => "radar",
            Self::Bar => "bar",
            Self::Donut => "donut",
        }
    }

    pub fn button_label(self) -> String {
        format!("{} Chart", title_case(self.id()))
    }
}

pub const RADAR_SKILLS: &[RadarAxis] = &[
    RadarAxis { label: "Frontend", value: 95.0, angle_deg: 0.0 },
    RadarAxis { label: "Backend", value: 90.0, angle_deg: 60.0 },
    RadarAxis { label: "DevOps", value: 85.0, angle_deg: 120.0 },
    RadarAxis { label: "Database", value: 88.0, angle_deg: 180.0 },
    RadarAxis { label: "Cloud", value: 92.0, angle_deg: 240.0 },
    RadarAxis { label: "AI/ML", value: 78.0, angle_deg: 300.0 },
];

pub const BAR_SKILLS: &[ChartSlice] = &[
    ChartSlice { label: "React/Next.js", value: 98.0, color: "#61DAFB" },
    ChartSlice { label: "Node.js", value: 94.0, color: "#339933" },
    ChartSlice { label: "TypeScript", value: 92.0, color: "#3178C6" },
    ChartSlice { label: "Python", value: 88.0, color: "#3776AB" },
    ChartSlice { label: "AWS/Cloud", value: 90.0, color: "#FF9900" },
    ChartSlice { label: "Docker/K8s", value: 86.0, color: "#2496ED" },
    ChartSlice { label: "GraphQL", value: 84.0, color: "#E10098" },
    ChartSlice { label: "MongoDB", value: 89.0, color: "#47A248" },
];

pub const DONUT_DATA: &[ChartSlice] = &[
    ChartSlice { label: "Frontend", value: 35.0, color: "#00D9FF" },
    ChartSlice { label: "Backend", value: 30.0, color: "#7C3AED" },
    ChartSlice { label: "DevOps", value: 20.0, color: "#FF6B35" },
    ChartSlice { label: "Other", value: 15.0, color: "#10B981" },
];

const METRICS: &[(&str, u8, &str)] = &[
    ("Code Quality", 98, "⚡"),
    ("Problem Solving", 96, "🧩"),
    ("System Design", 94, "🏗️"),
    ("Team Leadership", 97, "👥"),
];

#[component]
fn RadarChart(entered: ReadSignal<bool>) -> impl IntoView {
    let points = radar_points(RADAR_CENTER, RADAR_MAX_RADIUS, RADAR_SKILLS);
    let path = radar_path(&points);
    let c = RADAR_CENTER;

    view! {
        <div class="chart-wrapper radar-chart">
            <svg viewBox="0 0 300 300" class="radar-svg">
                <defs>
                    <radialGradient id="radarGradient">
                        <stop offset="0%" stop-color="var(--primary)" stop-opacity="0.3"/>
                        <stop offset="100%" stop-color="var(--accent)" stop-opacity="0.8"/>
                    </radialGradient>
                </defs>
                {radar_rings(RADAR_MAX_RADIUS, &RADAR_RING_LEVELS)
                    .into_iter()
                    .map(|r| {
                        view! {
                            <circle cx=fmt_coord(c.x) cy=fmt_coord(c.y) r=fmt_coord(r) class="radar-ring"></circle>
                        }
                    })
                    .collect_view()}
                {RADAR_SKILLS
                    .iter()
                    .map(|axis| {
                        let end = radar_axis_end(c, RADAR_MAX_RADIUS, axis.angle_deg);
                        view! {
                            <line
                                x1=fmt_coord(c.x)
                                y1=fmt_coord(c.y)
                                x2=fmt_coord(end.x)
                                y2=fmt_coord(end.y)
                                class="radar-axis"
                            ></line>
                        }
                    })
                    .collect_view()}
                <path d=path class="radar-area" class:drawn=move || entered.get()></path>
                {points
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| {
                        view! {
                            <circle
                                cx=fmt_coord(p.x)
                                cy=fmt_coord(p.y)
                                r="6"
                                class="radar-point"
                                class:drawn=move || entered.get()
                                style=stagger_style(800, 100, i)
                            ></circle>
                        }
                    })
                    .collect_view()}
                {RADAR_SKILLS
                    .iter()
                    .map(|axis| {
                        let at = radar_label_position(c, axis.angle_deg);
                        view! {
                            <text
                                x=fmt_coord(at.x)
                                y=fmt_coord(at.y)
                                text-anchor="middle"
                                dominant-baseline="middle"
                                class="radar-label"
                            >
                                {format!("{} ({}%)", axis.label, axis.value)}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

#[component]
fn BarChart(entered: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="chart-wrapper bar-chart">
            {BAR_SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    let width = bar_width_pct(skill.value);
                    let color = skill.color;
                    view! {
                        <div class="bar-item reveal" style=stagger_style(0, 100, i)>
                            <div class="bar-label">
                                <span class="bar-name">{skill.label}</span>
                                <span class="bar-percentage">{format!("{}%", skill.value)}</span>
                            </div>
                            <div class="bar-track">
                                <div
                                    class="bar-fill"
                                    style=move || {
                                        let shown = if entered.get() { width } else { 0.0 };
                                        format!(
                                            "width: {shown}%; background: {color}; box-shadow: {}; {}",
                                            glow(color, 12),
                                            stagger_style(300, 100, i),
                                        )
                                    }
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DonutChart() -> impl IntoView {
    let segments = donut_segments(DONUT_DATA);
    view! {
        <div class="chart-wrapper donut-chart">
            <svg viewBox="0 0 200 200" class="donut-svg">
                {segments
                    .into_iter()
                    .enumerate()
                    .map(|(i, seg)| {
                        view! {
                            <path
                                d=donut_arc_path(DONUT_CENTER, DONUT_RADIUS, seg.start_pct, seg.end_pct)
                                fill=seg.color
                                class="donut-segment"
                                style=stagger_style(0, 200, i)
                            ></path>
                        }
                    })
                    .collect_view()}
                <circle
                    cx=fmt_coord(DONUT_CENTER.x)
                    cy=fmt_coord(DONUT_CENTER.y)
                    r=fmt_coord(DONUT_HOLE_RADIUS)
                    fill="var(--bg)"
                ></circle>
                <text x="100" y="95" text-anchor="middle" class="donut-value">"10+"</text>
                <text x="100" y="115" text-anchor="middle" class="donut-caption">"Years Exp"</text>
            </svg>
            <div class="donut-legend">
                {DONUT_DATA
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="legend-item">
                                <span class="legend-color" style=format!("background: {};", item.color)></span>
                                <span class="legend-label">{item.label}</span>
                                <span class="legend-value">{format!("{}%", item.value)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SkillsChart() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, SKILLS_CHART_THRESHOLD);
    let active = RwSignal::new(ChartKind::default());

    view! {
        <section class="skills-chart-section" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading
                    title="Technical Proficiency"
                    subtitle="Visualizing expertise across different technology domains"
                />

                <div class="chart-selector reveal">
                    {ChartKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class="chart-btn"
                                    class:active=move || active.get() == kind
                                    on:click=move |_| active.set(kind)
                                >
                                    {kind.button_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="charts-container">
                    {move || match active.get() {
                        ChartKind::Radar => view! { <RadarChart entered=entered/> }.into_any(),
                        ChartKind::Bar => view! { <BarChart entered=entered/> }.into_any(),
                        ChartKind::Donut => view! { <DonutChart/> }.into_any(),
                    }}
                </div>

                <div class="performance-metrics">
                    {METRICS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, value, icon))| {
                            let value = *value;
                            view! {
                                <div class="metric-card reveal" style=stagger_style(700, 100, i)>
                                    <span class="metric-icon">{*icon}</span>
                                    <div class="metric-info">
                                        <span class="metric-label">{*label}</span>
                                        <div class="metric-bar">
                                            <div
                                                class="metric-fill"
                                                style=move || {
                                                    format!("width: {}%;", if entered.get() { value } else { 0 })
                                                }
                                            ></div>
                                        </div>
                                        <span class="metric-value">{format!("{value}%")}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
