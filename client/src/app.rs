//! Root application component with routing and the theme context.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::theme::{ThemeState, ThemeStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme store and renders the palette as CSS custom
/// properties on the outermost wrapper so every section can read them.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeStore::new(ThemeState::default());
    provide_context(theme);

    let state = theme.state();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Adam Smith | Software Head & Technology Leader"/>
        <Meta
            name="description"
            content="Portfolio of Adam Smith: engineering leadership, software architecture and cloud systems."
        />

        <div
            class="app"
            data-theme=move || state.get().attribute()
            style=move || state.get().palette().inline_style()
        >
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </div>
    }
}
