//! Development workstation illustration with scroll-linked 3D tilt and a
//! hardware spec grid.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{WORKSTATION_THRESHOLD, stagger_style};
use crate::util::color::with_alpha;
use crate::util::scroll::{Transform, workstation_tracks};
use crate::util::viewport::{use_entrance, use_scroll_progress};

struct Part {
    id: &'static str,
    icon: &'static str,
    label: &'static str,
    specs: &'static str,
    position: &'static str,
    color: &'static str,
}

const PARTS: &[Part] = &[
    Part { id: "monitor", icon: "🖥", label: "Ultra-Wide Display", specs: "49\" 5K Curved", position: "center-top", color: "#00D9FF" },
    Part { id: "keyboard", icon: "⌨", label: "Mechanical Keyboard", specs: "Custom 75%", position: "center-bottom", color: "#7C3AED" },
    Part { id: "mouse", icon: "🖱", label: "Ergonomic Mouse", specs: "Wireless 16K DPI", position: "right-bottom", color: "#FF6B35" },
    Part { id: "cpu", icon: "⚙", label: "Processor", specs: "Intel i9-14900K", position: "left-middle", color: "#10B981" },
    Part { id: "gpu", icon: "🎮", label: "Graphics Card", specs: "RTX 4090 24GB", position: "right-middle", color: "#00D9FF" },
    Part { id: "ram", icon: "▦", label: "Memory", specs: "128GB DDR5", position: "left-top", color: "#7C3AED" },
    Part { id: "storage", icon: "💾", label: "Storage", specs: "4TB NVMe SSD", position: "right-top", color: "#FF6B35" },
    Part { id: "motherboard", icon: "▣", label: "Motherboard", specs: "Z790 Hero", position: "left-bottom", color: "#10B981" },
];

const CLOUD_NODES: &[(&str, &str, &str)] = &[
    ("☁", "AWS", "#FF9900"),
    ("🗄", "Azure", "#0078D4"),
    ("🛢", "GCP", "#4285F4"),
    ("🔒", "Security", "#10B981"),
    ("📶", "Network", "#7C3AED"),
];

const KEY_COUNT: usize = 36;

/// Keys that flash as if typed on; fixed so SSR and hydration agree.
fn key_is_hot(index: usize) -> bool {
    index % 11 == 3
}

#[component]
pub fn WorkStation() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, WORKSTATION_THRESHOLD);
    let progress = use_scroll_progress(node);
    let tracks = StoredValue::new(workstation_tracks());

    let computer_style = move || {
        let t = tracks.with_value(|tr| tr.resolve(progress.get()));
        format!("transform: scale({:.3}) rotateY({:.2}deg);", t.scale, t.rotate_deg)
    };
    let tower_style = move || {
        let t = tracks.with_value(|tr| tr.resolve(progress.get()));
        Transform { translate_y: t.translate_y, ..Transform::default() }.to_css()
    };

    view! {
        <section class="workstation-section" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading
                    title="Development Workstation"
                    subtitle="Powered by cutting-edge hardware for maximum productivity"
                />

                <div class="workstation-container">
                    <div class="computer-3d" style=computer_style>
                        <div class="monitor-wrapper reveal">
                            <div class="monitor">
                                <div class="monitor-screen">
                                    <div class="screen-content">
                                        <div class="code-window-mini">
                                            <div class="mini-line"></div>
                                            <div class="mini-line short"></div>
                                            <div class="mini-line"></div>
                                            <div class="mini-line medium"></div>
                                            <div class="mini-line short"></div>
                                        </div>
                                        <div class="terminal-mini">
                                            <div class="terminal-line-mini"></div>
                                            <div class="terminal-line-mini blink"></div>
                                        </div>
                                    </div>
                                    <div class="screen-reflection"></div>
                                </div>
                                <div class="monitor-stand"></div>
                                <div class="monitor-base"></div>
                            </div>
                        </div>

                        <div class="keyboard-wrapper reveal" style="transition-delay: 200ms;">
                            <div class="keyboard">
                                <div class="keyboard-keys">
                                    {(0..KEY_COUNT)
                                        .map(|i| view! { <div class="key" class:hot=key_is_hot(i)></div> })
                                        .collect_view()}
                                </div>
                                <div class="keyboard-glow"></div>
                            </div>
                        </div>

                        <div class="mouse-wrapper reveal" style="transition-delay: 400ms;">
                            <div class="mouse-device">
                                <div class="mouse-body">
                                    <div class="mouse-scroll"></div>
                                    <div class="mouse-buttons">
                                        <div class="mouse-btn left"></div>
                                        <div class="mouse-btn right"></div>
                                    </div>
                                </div>
                                <div class="mouse-glow"></div>
                            </div>
                        </div>

                        <div class="cpu-tower" style=tower_style>
                            <div class="tower-body">
                                <div class="tower-front">
                                    <div class="power-button">
                                        <div class="power-led"></div>
                                    </div>
                                    <div class="rgb-strip">
                                        <div class="rgb-light"></div>
                                    </div>
                                    <div class="ventilation">
                                        {(0..8).map(|_| view! { <div class="vent-line"></div> }).collect_view()}
                                    </div>
                                </div>
                                <div class="tower-glass">
                                    <div class="fan"></div>
                                    <div class="fan fan-2"></div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="specs-grid">
                        {PARTS
                            .iter()
                            .enumerate()
                            .map(|(i, part)| {
                                view! {
                                    <div
                                        class=format!("spec-card reveal {}", part.position)
                                        data-part=part.id
                                        style=stagger_style(0, 200, i)
                                    >
                                        <div class="spec-icon" style=format!("color: {};", part.color)>{part.icon}</div>
                                        <div class="spec-info">
                                            <h4>{part.label}</h4>
                                            <span>{part.specs}</span>
                                        </div>
                                        <div
                                            class="spec-glow"
                                            style=format!(
                                                "background: radial-gradient(circle, {} 0%, transparent 70%);",
                                                with_alpha(part.color, 0.19),
                                            )
                                        ></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="cloud-infrastructure reveal">
                    <h3>"Cloud Development Environment"</h3>
                    <div class="cloud-nodes">
                        {CLOUD_NODES
                            .iter()
                            .enumerate()
                            .map(|(i, (icon, label, color))| {
                                view! {
                                    <div class="cloud-node reveal" style=stagger_style(0, 100, i)>
                                        <div class="node-icon" style=format!("color: {color};")>{*icon}</div>
                                        <span>{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
