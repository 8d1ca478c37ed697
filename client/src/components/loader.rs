//! Full-screen splash shown until the progress counter completes.

use leptos::prelude::*;

use crate::state::loader::LoadProgress;

/// Splash screen. Clears `loading` 500 ms after reaching 100%.
#[component]
pub fn Loader(loading: RwSignal<bool>) -> impl IntoView {
    let progress = RwSignal::new(LoadProgress::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::loader::{EXIT_DELAY, TICK_INTERVAL};
        use crate::util::liveness::{Liveness, sleep};

        let alive = Liveness::until_cleanup();
        leptos::task::spawn_local(async move {
            loop {
                sleep(TICK_INTERVAL).await;
                if !alive.is_alive() {
                    return;
                }
                let done = progress.try_update(LoadProgress::tick).unwrap_or(true);
                if done {
                    break;
                }
            }
            sleep(EXIT_DELAY).await;
            if alive.is_alive() {
                log::debug!("loader complete");
                loading.set(false);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = loading;
    }

    view! {
        <div class="loader">
            <div class="loader-content">
                <div class="loader-logo">
                    <span>"A"</span>
                </div>
                <div class="loader-bar-container">
                    <div class="loader-bar" style=move || progress.get().bar_style()></div>
                </div>
                <span class="loader-percentage">{move || format!("{}%", progress.get().percent())}</span>
            </div>
        </div>
    }
}
