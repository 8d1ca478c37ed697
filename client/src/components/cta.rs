//! Closing call-to-action banner.

use leptos::prelude::*;

use super::hero::RESUME_PATH;
use crate::state::reveal::CTA_THRESHOLD;
use crate::util::viewport::{scroll_to_section, use_entrance};

#[component]
pub fn Cta() -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let entered = use_entrance(node, CTA_THRESHOLD);

    view! {
        <section class="cta" node_ref=node class:in-view=move || entered.get()>
            <div class="cta-bg">
                <div class="cta-gradient"></div>
                <div class="cta-pattern"></div>
            </div>
            <div class="container">
                <div class="cta-content reveal">
                    <h2 class="reveal" style="transition-delay: 200ms;">
                        "Ready to Transform Your Technology Vision?"
                    </h2>
                    <p class="reveal" style="transition-delay: 300ms;">
                        "Let's collaborate to build innovative solutions that drive business growth \
                         and create lasting impact. I'm always open to new opportunities and challenges."
                    </p>
                    <div class="cta-buttons reveal" style="transition-delay: 400ms;">
                        <button class="btn-cta-primary" on:click=move |_| scroll_to_section("contact")>
                            "Let's Talk →"
                        </button>
                        <a href=RESUME_PATH class="btn-cta-secondary" download="resume.pdf">
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
