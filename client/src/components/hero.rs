//! Landing banner: typewriter headline, call-to-action buttons, decorative
//! particles and floating stat cards.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::state::typewriter::Typewriter;
use crate::util::viewport::scroll_to_section;

const PARTICLE_COUNT: u32 = 50;

/// Served from the site root; the file lives in `public/`.
pub const RESUME_PATH: &str = "/resume.pdf";

/// Social profile links shown under the hero buttons.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
];

const FLOATING_CARDS: &[(&str, &str, &str)] = &[
    ("card-1", "10+", "Years Exp."),
    ("card-2", "50+", "Projects"),
    ("card-3", "100+", "Team Led"),
];

/// Tech glyphs drifting behind the hero: (glyph, left %, top %, color).
const TECH_GLYPHS: &[(&str, u8, u8, &str)] = &[
    ("🖥", 10, 15, "#00D9FF"),
    ("⌨", 85, 20, "#7C3AED"),
    ("⚙", 75, 70, "#FF6B35"),
    ("🖱", 15, 75, "#10B981"),
    ("🗄", 90, 45, "#00D9FF"),
    ("💾", 20, 30, "#FF6B35"),
    ("☁", 60, 90, "#7C3AED"),
    ("</>", 70, 10, "#10B981"),
    (">_", 40, 75, "#00D9FF"),
    ("⎇", 25, 55, "#7C3AED"),
];

/// Deterministic placement for one background particle.
///
/// Positions are derived from the index so server-rendered markup and the
/// hydrated DOM agree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration_secs: f64,
}

fn unit_hash(seed: u32) -> f64 {
    // xorshift-multiply; good enough spread for decoration
    let mut x = seed.wrapping_mul(0x9E37_79B9).wrapping_add(0x7F4A_7C15);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    f64::from(x) / f64::from(u32::MAX)
}

pub fn particle(index: u32) -> Particle {
    let base = index.wrapping_mul(5);
    Particle {
        left_pct: unit_hash(base) * 100.0,
        top_pct: unit_hash(base + 1) * 100.0,
        drift_x: unit_hash(base + 2) * 100.0 - 50.0,
        drift_y: unit_hash(base + 3) * 100.0 - 50.0,
        duration_secs: unit_hash(base + 4) * 3.0 + 2.0,
    }
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.drift_x, self.drift_y, self.duration_secs
        )
    }
}

#[component]
fn TypedTitle() -> impl IntoView {
    let writer = RwSignal::new(Typewriter::hero());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::liveness::{Liveness, sleep};

        let alive = Liveness::until_cleanup();
        leptos::task::spawn_local(async move {
            let mut delay = writer.with_untracked(Typewriter::initial_delay);
            loop {
                sleep(delay).await;
                if !alive.is_alive() {
                    break;
                }
                match writer.try_update(Typewriter::tick) {
                    Some(next) => delay = next,
                    None => break,
                }
            }
        });
    }

    view! {
        <span class="hero-title">
            <span class="typed-text">{move || writer.with(|w| w.text().to_owned())}</span>
            <span class="cursor">"|"</span>
        </span>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="tech-animation-container" aria-hidden="true">
                {TECH_GLYPHS
                    .iter()
                    .enumerate()
                    .map(|(i, (glyph, left, top, color))| {
                        view! {
                            <span
                                class="tech-icon"
                                style=format!(
                                    "left: {left}%; top: {top}%; color: {color}; animation-delay: {}ms;",
                                    i * 200,
                                )
                            >
                                {*glyph}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="hero-bg">
                <div class="hero-gradient"></div>
                <div class="hero-particles">
                    {(0..PARTICLE_COUNT)
                        .map(|i| view! { <div class="particle" style=particle(i).style()></div> })
                        .collect_view()}
                </div>
            </div>

            <div class="hero-content container">
                <div class="hero-text">
                    <span class="hero-greeting">"👋 Hello, I'm"</span>
                    <h1 class="hero-name">"ADAM " <span class="highlight">"SMITH"</span></h1>
                    <div class="hero-title-wrapper">
                        <TypedTitle/>
                    </div>
                    <p class="hero-description">
                        "Passionate technology leader with 10+ years of experience in building scalable \
                         software solutions, leading high-performing teams, and driving digital \
                         transformation across Fortune 500 companies."
                    </p>
                    <div class="hero-buttons">
                        <button class="btn-primary" on:click=move |_| scroll_to_section("projects")>
                            "View My Work →"
                        </button>
                        <a href=RESUME_PATH class="btn-secondary" download="resume.pdf">
                            "Download CV ⬇"
                        </a>
                    </div>
                    <div class="hero-socials">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-image">
                    <div class="image-wrapper">
                        <div class="image-bg"></div>
                        <div class="image-container">
                            <div class="profile-image">
                                <div class="image-placeholder">
                                    <span>"A"</span>
                                </div>
                            </div>
                        </div>
                        <div class="floating-elements">
                            {FLOATING_CARDS
                                .iter()
                                .map(|(class, value, label)| {
                                    view! {
                                        <div class=format!("floating-card {class}")>
                                            <span>{*value}</span>
                                            <p>{*label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <button class="scroll-indicator" aria-label="Scroll to about" on:click=move |_| scroll_to_section("about")>
                <div class="mouse">
                    <div class="wheel"></div>
                </div>
            </button>
        </section>
    }
}
