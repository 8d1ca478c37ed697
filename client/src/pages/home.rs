//! The single scrolling portfolio page.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::code_editor::CodeEditor;
use crate::components::contact::Contact;
use crate::components::cta::Cta;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::loader::Loader;
use crate::components::navbar::Navbar;
use crate::components::parallax_section::ParallaxSection;
use crate::components::projects::Projects;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::services::Services;
use crate::components::skills::Skills;
use crate::components::skills_chart::SkillsChart;
use crate::components::testimonials::Testimonials;
use crate::components::workstation::WorkStation;

/// Loader first; the rest of the page mounts once it finishes.
#[component]
pub fn HomePage() -> impl IntoView {
    let loading = RwSignal::new(true);

    view! {
        <Show when=move || !loading.get() fallback=move || view! { <Loader loading=loading/> }>
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Services/>
                <SkillsChart/>
                <Skills/>
                <WorkStation/>
                <Experience/>
                <CodeEditor/>
                <Projects/>
                <ParallaxSection/>
                <Testimonials/>
                <Cta/>
                <Contact/>
            </main>
            <Footer/>
            <ScrollToTop/>
        </Show>
    }
}
