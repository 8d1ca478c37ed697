//! Auto-advancing testimonials carousel and client logo strip.

use leptos::prelude::*;

use super::section_heading::SectionHeading;
use crate::state::carousel::{CarouselState, per_view_for_width};
use crate::state::reveal::{TESTIMONIALS_THRESHOLD, stagger_style};
use crate::util::viewport::{use_entrance, use_viewport_width};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
    rating: usize,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CTO, TechGiant Inc.",
        text: "Adam is one of the most talented engineering leaders I've worked with. His ability to translate complex technical concepts into business value is remarkable. He transformed our entire development culture.",
        rating: 5,
        company: "TechGiant Inc.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "VP of Engineering, StartupX",
        text: "Working with Adam was a game-changer for our organization. His strategic vision and hands-on leadership helped us scale from a small team to a 100+ person engineering department.",
        rating: 5,
        company: "StartupX",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "CEO, InnovateCorp",
        text: "Adam's technical expertise combined with his exceptional communication skills makes him a rare find. He delivered our most critical project on time and under budget.",
        rating: 5,
        company: "InnovateCorp",
    },
    Testimonial {
        name: "David Park",
        role: "Product Director, CloudSolutions",
        text: "I've had the pleasure of collaborating with Adam on multiple projects. His attention to detail and commitment to excellence consistently delivers outstanding results.",
        rating: 5,
        company: "CloudSolutions",
    },
    Testimonial {
        name: "Lisa Thompson",
        role: "Engineering Manager, DataFlow",
        text: "Adam is not just a technical leader but a mentor who genuinely invests in his team's growth. His guidance helped me advance my career significantly.",
        rating: 5,
        company: "DataFlow",
    },
];

const CLIENTS: &[&str] = &["Google", "Microsoft", "Amazon", "Meta", "Apple", "Netflix"];

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial) -> impl IntoView {
    view! {
        <div class="testimonial-card">
            <div class="testimonial-header">
                <div class="testimonial-avatar">
                    <div class="avatar-placeholder">{initial(testimonial.name)}</div>
                </div>
                <div class="testimonial-info">
                    <h4>{testimonial.name}</h4>
                    <p>{testimonial.role}</p>
                </div>
                <a
                    href="https://linkedin.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="linkedin-link"
                    aria-label="LinkedIn"
                >
                    "in"
                </a>
            </div>
            <div class="testimonial-rating">
                {(0..testimonial.rating).map(|_| view! { <span class="star-icon">"★"</span> }).collect_view()}
            </div>
            <p class="testimonial-text">"\"" {testimonial.text} "\""</p>
            <div class="testimonial-company">{testimonial.company}</div>
        </div>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, TESTIMONIALS_THRESHOLD);
    let width = use_viewport_width();
    let carousel = RwSignal::new(CarouselState::new(TESTIMONIALS.len()));

    Effect::new(move |_| {
        let per_view = per_view_for_width(width.get());
        carousel.update(|c| c.set_per_view(per_view));
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::carousel::AUTOPLAY_INTERVAL;
        use crate::util::liveness::{Liveness, sleep};

        let alive = Liveness::until_cleanup();
        leptos::task::spawn_local(async move {
            loop {
                sleep(AUTOPLAY_INTERVAL).await;
                if !alive.is_alive() || carousel.try_update(CarouselState::next).is_none() {
                    break;
                }
            }
        });
    }

    view! {
        <section id="testimonials" class="testimonials" node_ref=node class:in-view=move || entered.get()>
            <div class="container">
                <SectionHeading title="What People Say" subtitle="Trusted by industry leaders and teams worldwide"/>

                <div class="testimonials-slider reveal" style="transition-delay: 300ms;">
                    <button
                        class="carousel-nav prev"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(CarouselState::prev)
                    >
                        "‹"
                    </button>
                    <div
                        class="testimonials-track"
                        style=move || format!("--per-view: {};", carousel.with(CarouselState::per_view))
                    >
                        {move || {
                            carousel
                                .with(CarouselState::visible_indices)
                                .into_iter()
                                .map(|i| view! { <TestimonialCard testimonial=&TESTIMONIALS[i]/> })
                                .collect_view()
                        }}
                    </div>
                    <button
                        class="carousel-nav next"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(CarouselState::next)
                    >
                        "›"
                    </button>
                    <div class="carousel-dots">
                        {(0..TESTIMONIALS.len())
                            .map(|i| {
                                view! {
                                    <button
                                        class="carousel-dot"
                                        class:active=move || carousel.with(CarouselState::index) == i
                                        aria-label=format!("Go to testimonial {}", i + 1)
                                        on:click=move |_| carousel.update(|c| c.go_to(i))
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="clients-section reveal" style="transition-delay: 500ms;">
                    <h3>"Trusted By Industry Leaders"</h3>
                    <div class="clients-logos">
                        {CLIENTS
                            .iter()
                            .enumerate()
                            .map(|(i, client)| view! { <div class="client-logo reveal" style=stagger_style(600, 100, i)>{*client}</div> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
