//! Achievements band with scroll-linked parallax shapes.
//!
//! Three of the shapes follow their scroll targets through damped springs
//! stepped on a frame timer; the rest track scroll progress directly.

use leptos::prelude::*;

use super::hero::particle;
use crate::state::reveal::{PARALLAX_THRESHOLD, stagger_style};
use crate::util::keyframes::Keyframes;
use crate::util::scroll::ParallaxLayers;
use crate::util::spring::Spring;
#[cfg(feature = "hydrate")]
use crate::util::spring::step_all;
use crate::util::viewport::{scroll_to_section, use_entrance, use_scroll_progress};

const ACHIEVEMENTS: &[(&str, &str, &str)] = &[
    ("👥", "50M+", "Users Impacted"),
    ("💰", "$100M+", "Revenue Generated"),
    ("⚡", "99.99%", "System Uptime"),
    ("🎓", "200+", "Engineers Mentored"),
];

const GRID_LINES: usize = 10;
const PARTICLE_COUNT: u32 = 40;
/// Keeps these particles from lining up with the hero's.
const PARTICLE_SEED: u32 = 1_000;

/// Frame timer for the smoothed layers. Runs only while a spring is moving
/// and stops once all of them rest; the next target change restarts it.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct SpringDriver {
    springs: RwSignal<[Spring; 3]>,
    running: std::rc::Rc<std::cell::Cell<bool>>,
    alive: crate::util::liveness::Liveness,
}

#[cfg(feature = "hydrate")]
impl SpringDriver {
    const FRAME: std::time::Duration = std::time::Duration::from_millis(16);

    fn new(springs: RwSignal<[Spring; 3]>) -> Self {
        Self {
            springs,
            running: std::rc::Rc::default(),
            alive: crate::util::liveness::Liveness::until_cleanup(),
        }
    }

    fn wake(&self) {
        if self.running.replace(true) {
            return;
        }
        let Self { springs, running, alive } = self.clone();
        leptos::task::spawn_local(async move {
            loop {
                crate::util::liveness::sleep(Self::FRAME).await;
                if !alive.is_alive() {
                    break;
                }
                let moving = springs
                    .try_update(|s| step_all(s, Self::FRAME.as_secs_f64()))
                    .unwrap_or(false);
                if !moving {
                    break;
                }
            }
            running.set(false);
        });
    }
}

#[component]
pub fn ParallaxSection() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, PARALLAX_THRESHOLD);
    let progress = use_scroll_progress(node);
    let layers = StoredValue::new(ParallaxLayers::default());
    let springs = RwSignal::new([Spring::new(0.0); 3]);

    #[cfg(feature = "hydrate")]
    let driver = SpringDriver::new(springs);

    Effect::new(move |_| {
        let p = progress.get();
        let targets = layers.with_value(|l| [l.y1.at(p), l.y2.at(p), l.y3.at(p)]);
        let moving = springs
            .try_update(|s| {
                for (spring, target) in s.iter_mut().zip(targets) {
                    spring.set_target(target);
                }
                s.iter().any(|spring| !spring.is_settled())
            })
            .unwrap_or(false);
        #[cfg(feature = "hydrate")]
        if moving {
            driver.wake();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = moving;
    });

    let at = move |pick: fn(&ParallaxLayers) -> &Keyframes| {
        let p = progress.get();
        layers.with_value(|l| pick(l).at(p))
    };
    let smooth = move |i: usize| springs.with(|s| s[i].value());

    view! {
        <section class="parallax-section" node_ref=node class:in-view=move || entered.get()>
            <div class="parallax-bg" style=move || format!("opacity: {:.3};", at(|l| &l.opacity))>
                <div
                    class="parallax-shape shape-1"
                    style=move || {
                        format!("transform: translateY({:.2}px) rotate({:.2}deg);", smooth(0), at(|l| &l.rotate1))
                    }
                >
                    <div class="shape-inner gradient-1"></div>
                </div>
                <div
                    class="parallax-shape shape-2"
                    style=move || {
                        format!("transform: translateY({:.2}px) rotate({:.2}deg);", smooth(1), at(|l| &l.rotate2))
                    }
                >
                    <div class="shape-inner gradient-2"></div>
                </div>
                <div
                    class="parallax-shape shape-3"
                    style=move || format!("transform: translateY({:.2}px);", smooth(2))
                >
                    <div class="shape-inner gradient-3"></div>
                </div>
                <div
                    class="parallax-shape shape-4"
                    style=move || {
                        format!("transform: translateY({:.2}px) scale({:.3});", at(|l| &l.y4), at(|l| &l.scale))
                    }
                >
                    <div class="shape-inner gradient-4"></div>
                </div>

                <div class="parallax-grid">
                    {(0..GRID_LINES)
                        .map(|i| {
                            view! {
                                <div
                                    class="grid-line-h"
                                    style=format!("top: {}%; transition-delay: {}ms;", i * 10, i * 100)
                                ></div>
                                <div
                                    class="grid-line-v"
                                    style=format!("left: {}%; transition-delay: {}ms;", i * 10, i * 100)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="parallax-particles">
                    {(0..PARTICLE_COUNT)
                        .map(|i| view! { <div class="p-particle" style=particle(PARTICLE_SEED + i).style()></div> })
                        .collect_view()}
                </div>
            </div>

            <div class="container">
                <div class="parallax-content">
                    <h2 class="parallax-title reveal">
                        "Transforming Ideas into" <span class="highlight-text">" Digital Reality"</span>
                    </h2>
                    <p class="parallax-subtitle reveal" style="transition-delay: 200ms;">
                        "Building the future of technology, one line of code at a time"
                    </p>

                    <div class="achievements-grid">
                        {ACHIEVEMENTS
                            .iter()
                            .enumerate()
                            .map(|(i, (icon, number, label))| {
                                view! {
                                    <div class="achievement-card reveal" style=stagger_style(300, 100, i)>
                                        <span class="achievement-icon">{*icon}</span>
                                        <span class="achievement-number">{*number}</span>
                                        <span class="achievement-label">{*label}</span>
                                        <div class="achievement-glow"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="cta-buttons reveal" style="transition-delay: 800ms;">
                        <button class="btn-primary" on:click=move |_| scroll_to_section("contact")>
                            "Start a Project"
                        </button>
                        <button class="btn-outline" on:click=move |_| scroll_to_section("projects")>
                            "View Portfolio"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
