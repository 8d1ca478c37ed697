//! Title and optional subtitle shared by every content section.

use leptos::prelude::*;

/// Section heading. Fades in with its parent's `in-view` class.
#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <h2 class="section-title reveal">{title}</h2>
        {subtitle.map(|text| view! { <p class="section-subtitle reveal" style="transition-delay: 200ms;">{text}</p> })}
    }
}
