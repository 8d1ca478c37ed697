//! Site footer: brand blurb, quick links, services and newsletter stub.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::util::viewport::scroll_to_section;

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Home", "hero"),
    ("About", "about"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com", "GH"),
    ("LinkedIn", "https://linkedin.com", "in"),
    ("Twitter", "https://twitter.com", "𝕏"),
    ("Email", "mailto:adam@example.com", "✉"),
];

const SERVICES: &[&str] = &[
    "Technical Leadership",
    "Software Architecture",
    "Team Building",
    "Digital Transformation",
    "Consulting",
];

/// UTC calendar year, read on each side so SSR and hydration match outside
/// the New Year boundary.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer-top">
                <div class="container">
                    <div class="footer-content">
                        <div class="footer-brand">
                            <h2 class="footer-logo">"ADAM" <span>"."</span></h2>
                            <p>
                                "Software Head & Technology Leader passionate about building \
                                 innovative solutions and leading high-performing teams."
                            </p>
                            <div class="footer-socials">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|(label, href, glyph)| {
                                        view! {
                                            <a href=*href target="_blank" rel="noopener noreferrer" aria-label=*label>
                                                {*glyph}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="footer-links">
                            <h3>"Quick Links"</h3>
                            <ul>
                                {FOOTER_LINKS
                                    .iter()
                                    .map(|(name, target)| {
                                        let target = *target;
                                        view! {
                                            <li>
                                                <button class="link-btn" on:click=move |_| scroll_to_section(target)>
                                                    {*name}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="footer-services">
                            <h3>"Services"</h3>
                            <ul>{SERVICES.iter().map(|s| view! { <li>{*s}</li> }).collect_view()}</ul>
                        </div>

                        <div class="footer-newsletter">
                            <h3>"Stay Updated"</h3>
                            <p>"Subscribe to get updates on my latest projects and articles."</p>
                            <form class="newsletter-form" on:submit=|ev| ev.prevent_default()>
                                <input type="email" placeholder="Enter your email"/>
                                <button type="submit">"Subscribe"</button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="container">
                    <p>
                        "© " {year} " Adam Smith. Made with " <span class="heart-icon">"♥"</span>
                        " using Rust"
                    </p>
                    <button class="back-to-top" aria-label="Back to top" on:click=move |_| scroll_to_section("hero")>
                        "↑"
                    </button>
                </div>
            </div>
        </footer>
    }
}
