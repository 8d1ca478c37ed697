//! Filterable project gallery.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{PROJECTS_THRESHOLD, stagger_style};
use crate::util::filter::{ALL, Categorized, filter_by_category, title_case};
use crate::util::viewport::use_entrance;

pub const FILTERS: &[&str] = &[ALL, "web", "mobile", "ai", "enterprise"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    pub github: &'static str,
    pub live: &'static str,
    pub featured: bool,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Enterprise Cloud Platform",
        description: "Scalable multi-tenant SaaS platform serving 500+ enterprise clients with real-time analytics and AI-powered insights.",
        tags: &["React", "Node.js", "AWS", "Kubernetes"],
        category: "enterprise",
        github: "https://github.com",
        live: "https://example.com",
        featured: true,
    },
    Project {
        title: "AI Trading System",
        description: "Machine learning-powered algorithmic trading platform processing 1M+ transactions daily with predictive analytics.",
        tags: &["Python", "TensorFlow", "Redis", "PostgreSQL"],
        category: "ai",
        github: "https://github.com",
        live: "https://example.com",
        featured: true,
    },
    Project {
        title: "HealthTech Mobile App",
        description: "HIPAA-compliant telehealth platform with video consultations, prescription management, and health tracking.",
        tags: &["React Native", "Firebase", "WebRTC"],
        category: "mobile",
        github: "https://github.com",
        live: "https://example.com",
        featured: true,
    },
    Project {
        title: "Real-Time Collaboration Suite",
        description: "Enterprise collaboration platform with real-time document editing, video conferencing, and project management.",
        tags: &["Next.js", "Socket.io", "MongoDB"],
        category: "web",
        github: "https://github.com",
        live: "https://example.com",
        featured: false,
    },
    Project {
        title: "Supply Chain Optimizer",
        description: "AI-driven supply chain management system reducing logistics costs by 30% through intelligent route optimization.",
        tags: &["Python", "ML", "GraphQL", "Docker"],
        category: "ai",
        github: "https://github.com",
        live: "https://example.com",
        featured: false,
    },
    Project {
        title: "E-Commerce Platform",
        description: "High-performance e-commerce solution handling 100K+ concurrent users with personalized recommendations.",
        tags: &["React", "Node.js", "Elasticsearch"],
        category: "web",
        github: "https://github.com",
        live: "https://example.com",
        featured: false,
    },
];

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div class="project-card reveal" class:featured=project.featured style=stagger_style(0, 150, index)>
            <div class="project-image">
                <div class="image-overlay">
                    <span class="folder-icon">"📁"</span>
                </div>
            </div>
            <div class="project-content">
                <div class="project-header">
                    <h3>{project.title}</h3>
                    <div class="project-links">
                        <a href=project.github target="_blank" rel="noopener noreferrer" aria-label="Source">"⌥"</a>
                        <a href=project.live target="_blank" rel="noopener noreferrer" aria-label="Live demo">"↗"</a>
                    </div>
                </div>
                <p class="project-description">{project.description}</p>
                <div class="project-tags">
                    {project.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, PROJECTS_THRESHOLD);
    let active = RwSignal::new(ALL);

    view! {
        <section id="projects" class="projects" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="Featured Projects"/>

                <div class="project-filters reveal" style="transition-delay: 200ms;">
                    {FILTERS
                        .iter()
                        .map(|filter| {
                            let filter = *filter;
                            view! {
                                <button
                                    class="filter-btn"
                                    class:active=move || active.get() == filter
                                    on:click=move |_| active.set(filter)
                                >
                                    {title_case(filter)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="projects-grid">
                    {move || {
                        filter_by_category(PROJECTS, active.get())
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectCard project=*project index=i/> })
                            .collect_view()
                    }}
                </div>

                <div class="view-more reveal">
                    <a href="https://github.com" target="_blank" rel="noopener noreferrer" class="btn-secondary">
                        "View All Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
