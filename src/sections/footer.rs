use super::REPO_URL;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    <a href=REPO_URL target="_blank" class="footer-link">"GitHub"</a>
                </div>
                <p class="footer-copyright">
                    "© 2024 Context Generator. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
