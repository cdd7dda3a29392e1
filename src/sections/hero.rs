use leptos::prelude::*;

#[component]
pub fn Hero(set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">"生成AIと開発者の架け橋"</h1>
                <p class="hero-description">
                    "生成AIを活用する開発者のための究極のプロジェクト要約ツール"
                </p>
                <button class="hero-cta btn btn-primary btn-large" on:click=move |_| set_open.set(true)>
                    "今すぐ始める →"
                </button>
            </div>
        </section>
    }
}
