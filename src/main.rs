// Context Generator landing page, Leptos 0.8 CSR build.

use context_generator_landing::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}
