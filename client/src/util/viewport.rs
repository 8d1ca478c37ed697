//! Browser glue for scroll-driven sections.
//!
//! Each hook returns a signal that starts at the same value on the server
//! and in the browser, then tracks window scroll/resize once hydrated.
//! Listeners are removed when the owning component is disposed.

use leptos::html::Section;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::reveal::EntranceLatch;
#[cfg(feature = "hydrate")]
use crate::util::scroll::scroll_progress;

/// Width assumed before the first measurement.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

#[cfg(feature = "hydrate")]
fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[cfg(feature = "hydrate")]
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}

#[cfg(feature = "hydrate")]
fn current_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Run `check` now (once the node is mounted) and on every scroll/resize.
#[cfg(feature = "hydrate")]
fn on_scroll_or_resize(node: Option<NodeRef<Section>>, check: impl Fn() + 'static) {
    let check = std::rc::Rc::new(check);

    let on_scroll = check.clone();
    let scroll = window_event_listener(leptos::ev::scroll, move |_| on_scroll());
    let on_resize = check.clone();
    let resize = window_event_listener(leptos::ev::resize, move |_| on_resize());
    on_cleanup(move || {
        scroll.remove();
        resize.remove();
    });

    Effect::new(move |_| {
        if let Some(node) = node {
            if node.get().is_none() {
                return;
            }
        }
        check();
    });
}

/// One-way entrance flag for a section; flips to `true` the first time the
/// section's visible fraction reaches `threshold`.
pub fn use_entrance(node: NodeRef<Section>, threshold: f64) -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    #[cfg(feature = "hydrate")]
    {
        let latch = std::cell::Cell::new(EntranceLatch::once(threshold));
        on_scroll_or_resize(Some(node), move || {
            let mut current = latch.get();
            if current.entered() {
                return;
            }
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            if current.observe_rect(rect.top(), rect.height(), viewport_height()) {
                set_entered.set(true);
            }
            latch.set(current);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, threshold, set_entered);
    }
    entered
}

/// Scroll progress of a section through the viewport, in `[0, 1]`.
pub fn use_scroll_progress(node: NodeRef<Section>) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);
    #[cfg(feature = "hydrate")]
    {
        on_scroll_or_resize(Some(node), move || {
            let Some(el) = node.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            set_progress.set(scroll_progress(rect.top(), rect.height(), viewport_height()));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, set_progress);
    }
    progress
}

/// Vertical page scroll offset.
pub fn use_scroll_y() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = signal(0.0);
    #[cfg(feature = "hydrate")]
    on_scroll_or_resize(None, move || set_scroll_y.set(current_scroll_y()));
    #[cfg(not(feature = "hydrate"))]
    let _ = set_scroll_y;
    scroll_y
}

/// Window inner width.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(DEFAULT_VIEWPORT_WIDTH);
    #[cfg(feature = "hydrate")]
    on_scroll_or_resize(None, move || set_width.set(viewport_width()));
    #[cfg(not(feature = "hydrate"))]
    let _ = set_width;
    width
}

/// Smooth-scroll the window to document offset `top`.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Smooth-scroll so the element with `id` lands just below the navbar.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("scroll target #{id} not found");
            return;
        };
        let top = el.get_bounding_client_rect().top();
        scroll_to(crate::state::nav::scroll_target_y(top, current_scroll_y()));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Viewport-relative top of each element id, skipping ids not in the page.
pub fn section_tops(ids: &[&'static str]) -> Vec<(&'static str, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| {
                doc.get_element_by_id(id)
                    .map(|el| (*id, el.get_bounding_client_rect().top()))
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Vec::new()
    }
}
