//! Service offerings grid.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{SERVICES_THRESHOLD, stagger_style};
use crate::util::viewport::use_entrance;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

const SERVICES: &[Service] = &[
    Service {
        icon: "👥",
        title: "Team Leadership",
        description: "Building and scaling high-performing engineering teams with a focus on culture, growth, and delivery excellence.",
        features: ["Hiring & Onboarding", "Performance Management", "Mentorship Programs"],
    },
    Service {
        icon: "🎯",
        title: "Technical Strategy",
        description: "Developing technology roadmaps aligned with business objectives and market opportunities.",
        features: ["Technology Assessment", "Roadmap Planning", "Risk Mitigation"],
    },
    Service {
        icon: "⚡",
        title: "Architecture Design",
        description: "Designing scalable, resilient systems that support business growth and operational efficiency.",
        features: ["Microservices", "Cloud Native", "Event-Driven"],
    },
    Service {
        icon: "📈",
        title: "Digital Transformation",
        description: "Leading digital initiatives that modernize legacy systems and enable innovation.",
        features: ["Cloud Migration", "Process Automation", "Data Strategy"],
    },
    Service {
        icon: "🏆",
        title: "Quality Engineering",
        description: "Establishing engineering excellence through best practices, automation, and continuous improvement.",
        features: ["CI/CD Pipelines", "Test Automation", "Code Reviews"],
    },
    Service {
        icon: "🧪",
        title: "Innovation Labs",
        description: "Creating innovation programs that explore emerging technologies and drive competitive advantage.",
        features: ["AI/ML Initiatives", "R&D Programs", "PoC Development"],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, SERVICES_THRESHOLD);

    view! {
        <section id="services" class="services" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading
                    title="What I Offer"
                    subtitle="Comprehensive technology leadership services to transform your organization"
                />
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <div class="service-card reveal" style=stagger_style(0, 150, i)>
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="service-features">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li>
                                                        <span class="feature-dot"></span>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
