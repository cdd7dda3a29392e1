use super::REPO_URL;
use leptos::prelude::*;

#[component]
pub fn CallToAction(set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <h2 class="section-title">"AIとの開発を最適化する準備はできましたか？"</h2>
                <p class="cta-description">
                    "Context Generatorで、あなたの開発プロセスを革新しましょう。"
                </p>
                <div class="cta-actions">
                    <button class="cta-open btn btn-primary btn-large" on:click=move |_| set_open.set(true)>
                        "今すぐ始める →"
                    </button>
                    <a href=REPO_URL target="_blank" class="btn btn-secondary">
                        "View on GitHub →"
                    </a>
                </div>
            </div>
        </section>
    }
}
