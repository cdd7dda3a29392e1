// Context Generator landing page, Leptos 0.8 CSR build.

pub mod sections;

use leptos::prelude::*;
use sections::*;

/// Composition root. Owns the single piece of page state (overlay
/// visibility) and hands the write half down to every open trigger.
#[component]
pub fn App() -> impl IntoView {
    let (overlay_open, set_overlay_open) = signal(false);

    view! {
        <Header set_open=set_overlay_open />
        <main>
            <Hero set_open=set_overlay_open />
            <Features />
            <Workflow />
            <Testimonials />
            <Comparison />
            <CallToAction set_open=set_overlay_open />
        </main>
        <Footer />
        <LaunchOverlay open=overlay_open set_open=set_overlay_open />
    }
}
