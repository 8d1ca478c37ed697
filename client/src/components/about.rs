//! Biography, highlight list and headline stats.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{ABOUT_THRESHOLD, stagger_style};
use crate::util::viewport::use_entrance;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("🎯", "Strategic Vision", "Translating business goals into technical roadmaps"),
    ("🚀", "Scaling Excellence", "Built systems handling 10M+ daily transactions"),
    ("💡", "Innovation Driver", "15+ patents in AI and distributed systems"),
];

const STATS: &[(&str, &str, &str)] = &[
    ("</>", "500K+", "Lines of Code"),
    ("👥", "100+", "Team Members Led"),
    ("🏆", "25+", "Awards Won"),
    ("☕", "∞", "Coffee Consumed"),
];

#[component]
pub fn About() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, ABOUT_THRESHOLD);

    view! {
        <section id="about" class="about" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="About Me"/>

                <div class="about-content">
                    <div class="about-image reveal">
                        <div class="image-frame">
                            <div class="frame-border"></div>
                            <div class="about-img-placeholder">
                                <span>"A"</span>
                            </div>
                            <div class="experience-badge">
                                <span>"10+"</span>
                                <p>"Years Experience"</p>
                            </div>
                        </div>
                    </div>

                    <div class="about-text reveal" style=stagger_style(0, 200, 1)>
                        <h3>"Driving Innovation Through Technology Leadership"</h3>
                        <p>
                            "As a seasoned Software Head with over a decade of experience, I've had the \
                             privilege of leading transformative projects across fintech, healthcare, and \
                             enterprise software domains. My journey began as a passionate developer, and \
                             today I architect solutions that scale to millions of users."
                        </p>
                        <p>
                            "I believe in the power of combining technical excellence with strategic \
                             thinking. My leadership philosophy centers on empowering teams, fostering \
                             innovation, and delivering exceptional value to stakeholders."
                        </p>
                        <div class="about-highlights">
                            {HIGHLIGHTS
                                .iter()
                                .map(|(icon, title, text)| {
                                    view! {
                                        <div class="highlight-item">
                                            <span class="highlight-icon">{*icon}</span>
                                            <div>
                                                <h4>{*title}</h4>
                                                <p>{*text}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="stats-grid">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, (icon, number, label))| {
                            view! {
                                <div class="stat-card reveal" style=stagger_style(0, 200, i)>
                                    <span class="stat-icon">{*icon}</span>
                                    <span class="stat-number">{*number}</span>
                                    <p class="stat-label">{*label}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
