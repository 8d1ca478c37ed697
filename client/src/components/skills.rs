//! Filterable skills grid with animated proficiency bars.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::reveal::{SKILLS_THRESHOLD, stagger_style};
use crate::util::color::with_alpha;
use crate::util::filter::{ALL, Categorized, filter_by_category};
use crate::util::viewport::use_entrance;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u8,
    pub category: &'static str,
    pub color: &'static str,
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        self.category
    }
}

pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL, "All Skills"),
    ("frontend", "Frontend"),
    ("backend", "Backend"),
    ("devops", "DevOps"),
    ("data", "Data & AI"),
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", icon: "⚛", level: 95, category: "frontend", color: "#61DAFB" },
    Skill { name: "TypeScript", icon: "TS", level: 92, category: "frontend", color: "#3178C6" },
    Skill { name: "JavaScript", icon: "JS", level: 98, category: "frontend", color: "#F7DF1E" },
    Skill { name: "Node.js", icon: "⬢", level: 94, category: "backend", color: "#339933" },
    Skill { name: "Python", icon: "🐍", level: 90, category: "backend", color: "#3776AB" },
    Skill { name: "GraphQL", icon: "◈", level: 88, category: "backend", color: "#E10098" },
    Skill { name: "AWS", icon: "☁", level: 91, category: "devops", color: "#FF9900" },
    Skill { name: "Docker", icon: "🐳", level: 93, category: "devops", color: "#2496ED" },
    Skill { name: "Kubernetes", icon: "☸", level: 87, category: "devops", color: "#326CE5" },
    Skill { name: "MongoDB", icon: "🍃", level: 89, category: "data", color: "#47A248" },
    Skill { name: "PostgreSQL", icon: "🐘", level: 91, category: "data", color: "#336791" },
    Skill { name: "Redis", icon: "◆", level: 86, category: "data", color: "#DC382D" },
    Skill { name: "TensorFlow", icon: "🧠", level: 82, category: "data", color: "#FF6F00" },
    Skill { name: "Git", icon: "⎇", level: 96, category: "devops", color: "#F05032" },
    Skill { name: "Databases", icon: "🗄", level: 94, category: "data", color: "#00D9FF" },
    Skill { name: "Cloud", icon: "☁", level: 92, category: "devops", color: "#7C3AED" },
];

const SUMMARY: &[(&str, &str)] = &[
    (
        "Technical Leadership",
        "With deep expertise across the full stack, I lead teams in building scalable, maintainable systems that drive business value.",
    ),
    (
        "Architecture Design",
        "Experienced in designing microservices, event-driven architectures, and cloud-native solutions for enterprise applications.",
    ),
    (
        "Innovation Focus",
        "Constantly exploring emerging technologies like AI/ML, blockchain, and edge computing to create competitive advantages.",
    ),
];

#[component]
fn SkillCard(skill: Skill, index: usize, entered: ReadSignal<bool>) -> impl IntoView {
    let hover_shadow = format!("--hover-shadow: 0 20px 50px {};", with_alpha(skill.color, 0.19));
    let level = skill.level;
    view! {
        <div class="skill-card reveal" style=format!("{hover_shadow} {}", stagger_style(0, 100, index))>
            <div class="skill-icon" style=format!("color: {};", skill.color)>{skill.icon}</div>
            <h3 class="skill-name">{skill.name}</h3>
            <div class="skill-bar">
                <div
                    class="skill-progress"
                    style=move || {
                        format!(
                            "width: {}%; background: {}; {}",
                            if entered.get() { level } else { 0 },
                            skill.color,
                            stagger_style(0, 100, index),
                        )
                    }
                ></div>
            </div>
            <span class="skill-percentage">{format!("{level}%")}</span>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, SKILLS_THRESHOLD);
    let active = RwSignal::new(ALL);

    view! {
        <section id="skills" class="skills" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="Skills & Expertise"/>

                <div class="skills-categories reveal" style="transition-delay: 200ms;">
                    {CATEGORIES
                        .iter()
                        .map(|(id, name)| {
                            let id = *id;
                            view! {
                                <button
                                    class="category-btn"
                                    class:active=move || active.get() == id
                                    on:click=move |_| active.set(id)
                                >
                                    {*name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="skills-grid">
                    {move || {
                        filter_by_category(SKILLS, active.get())
                            .into_iter()
                            .enumerate()
                            .map(|(i, skill)| view! { <SkillCard skill=*skill index=i entered=entered/> })
                            .collect_view()
                    }}
                </div>

                <div class="skills-summary reveal" style="transition-delay: 500ms;">
                    {SUMMARY
                        .iter()
                        .map(|(title, text)| {
                            view! {
                                <div class="summary-card">
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
