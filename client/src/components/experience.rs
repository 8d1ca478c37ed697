//! Career timeline.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{EXPERIENCE_THRESHOLD, stagger_style};
use crate::util::viewport::use_entrance;

struct Role {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    period: &'static str,
    description: &'static str,
    achievements: [&'static str; 3],
    color: &'static str,
}

const ROLES: &[Role] = &[
    Role {
        title: "Head of Software Engineering",
        company: "TechVision Corp",
        location: "San Francisco, CA",
        period: "2021 - Present",
        description: "Leading a team of 80+ engineers across 5 product lines. Spearheaded digital transformation initiatives resulting in 40% improvement in delivery velocity.",
        achievements: [
            "Architected microservices platform handling 10M+ daily transactions",
            "Reduced infrastructure costs by 35% through cloud optimization",
            "Implemented AI-driven testing reducing bug escape rate by 60%",
        ],
        color: "#00D9FF",
    },
    Role {
        title: "Director of Engineering",
        company: "InnovateTech Solutions",
        location: "New York, NY",
        period: "2018 - 2021",
        description: "Managed engineering operations for B2B SaaS products serving Fortune 500 clients. Grew team from 25 to 60 engineers.",
        achievements: [
            "Led successful migration to AWS saving $2M annually",
            "Established DevOps culture reducing deployment time by 80%",
            "Launched 3 new product lines generating $15M ARR",
        ],
        color: "#7C3AED",
    },
    Role {
        title: "Senior Software Architect",
        company: "DataFlow Systems",
        location: "Austin, TX",
        period: "2015 - 2018",
        description: "Designed and implemented enterprise-scale data processing systems. Technical lead for real-time analytics platform.",
        achievements: [
            "Built data pipeline processing 5TB daily with 99.99% uptime",
            "Patented novel algorithm for real-time anomaly detection",
            "Mentored team of 12 engineers in distributed systems design",
        ],
        color: "#FF6B35",
    },
    Role {
        title: "Full Stack Developer",
        company: "StartupXYZ",
        location: "Boston, MA",
        period: "2012 - 2015",
        description: "Core team member at early-stage fintech startup. Full-stack development across web and mobile platforms.",
        achievements: [
            "Developed MVP that secured $5M Series A funding",
            "Scaled platform from 0 to 100K users in 18 months",
            "Implemented PCI-DSS compliant payment infrastructure",
        ],
        color: "#10B981",
    },
];

/// Alternating side of the timeline for entry `index`.
fn side(index: usize) -> &'static str {
    if index % 2 == 0 { "left" } else { "right" }
}

#[component]
pub fn Experience() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, EXPERIENCE_THRESHOLD);

    view! {
        <section id="experience" class="experience" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="Experience"/>

                <div class="timeline">
                    {ROLES
                        .iter()
                        .enumerate()
                        .map(|(i, role)| {
                            view! {
                                <div
                                    class=format!("timeline-item reveal slide-x {}", side(i))
                                    style=stagger_style(0, 300, i)
                                >
                                    <div class="timeline-content" style=format!("border-top-color: {};", role.color)>
                                        <div class="timeline-header">
                                            <h3>{role.title}</h3>
                                            <span class="company" style=format!("color: {};", role.color)>
                                                "💼 "
                                                {role.company}
                                            </span>
                                        </div>

                                        <div class="timeline-meta">
                                            <span>"📅 " {role.period}</span>
                                            <span>"📍 " {role.location}</span>
                                        </div>

                                        <p class="timeline-description">{role.description}</p>

                                        <ul class="achievements">
                                            {role
                                                .achievements
                                                .iter()
                                                .enumerate()
                                                .map(|(j, achievement)| {
                                                    view! {
                                                        <li class="reveal" style=stagger_style(500, 100, j)>
                                                            <span
                                                                class="achievement-bullet"
                                                                style=format!("background: {};", role.color)
                                                            ></span>
                                                            {*achievement}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>

                                    <div class="timeline-dot" style=format!("background: {};", role.color)></div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="timeline-line"></div>
                </div>
            </div>
        </section>
    }
}
