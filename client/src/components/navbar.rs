//! Fixed top navigation with section links, theme toggle and mobile menu.

use leptos::prelude::*;

use crate::state::nav::{NAV_ITEMS, NavItem, NavState, active_target, is_scrolled};
use crate::state::reveal::stagger_style;
use crate::state::theme::ThemeStore;
use crate::util::viewport::{scroll_to_section, section_tops, use_scroll_y};

fn nav_targets() -> Vec<&'static str> {
    NAV_ITEMS.iter().map(|item| item.target).collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<ThemeStore>();
    let nav = RwSignal::new(NavState::default());
    let scroll_y = use_scroll_y();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let scrolled = is_scrolled(y);
        let active = active_target(&section_tops(&nav_targets()));
        nav.update(|n| {
            n.scrolled = scrolled;
            if !n.menu_open {
                n.active = active;
            }
        });
    });

    let go = move |target: &'static str| {
        nav.update(|n| n.select(target));
        scroll_to_section(target);
    };

    let link = move |index: usize, item: &'static NavItem| {
        view! {
            <li style=stagger_style(0, 100, index)>
                <a
                    href=format!("#{}", item.target)
                    class:active=move || nav.get().active == Some(item.target)
                    on:click=move |ev| {
                        ev.prevent_default();
                        go(item.target);
                    }
                >
                    {item.label}
                </a>
            </li>
        }
    };

    view! {
        <nav class="navbar" class:scrolled=move || nav.get().scrolled>
            <div class="navbar-container">
                <a
                    class="logo"
                    href="#hero"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go("hero");
                    }
                >
                    <span class="logo-text">"ADAM"</span>
                    <span class="logo-dot">"."</span>
                </a>

                <ul class="nav-links">
                    {NAV_ITEMS.iter().enumerate().map(|(i, item)| link(i, item)).collect_view()}
                </ul>

                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.dark_mode() { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="mobile-menu-btn"
                        aria-label="Menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.get().menu_open { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || nav.get().menu_open>
                    <div class="mobile-menu">
                        <ul>
                            {NAV_ITEMS.iter().enumerate().map(|(i, item)| link(i, item)).collect_view()}
                        </ul>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
