//! Mirror the active theme onto the `<html>` element.
//!
//! Sets `data-theme` and the palette's CSS custom properties on the document
//! root so `body`, scrollbars and anything outside the app tree follow the
//! toggle. Theme choice is in-memory only; every page load starts dark.
//! SSR paths no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeState;

/// Apply `state` to the document root.
pub fn apply(state: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("data-theme", state.attribute());
        if let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() {
            let style = html.style();
            for (name, value) in state.palette().css_variables() {
                let _ = style.set_property(name, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}
