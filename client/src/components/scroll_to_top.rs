use leptos::prelude::*;

use crate::state::nav::shows_scroll_top;
use crate::util::viewport::{scroll_to, use_scroll_y};

/// Floating button that appears once the page is scrolled past the fold.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let scroll_y = use_scroll_y();

    view! {
        <button
            class="scroll-to-top"
            class:visible=move || shows_scroll_top(scroll_y.get())
            aria-label="Scroll to top"
            on:click=move |_| scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
