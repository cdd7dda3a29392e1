use leptos::prelude::*;

#[component]
pub fn Header(set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="container header-inner">
                <span class="header-brand">"Context Generator"</span>
                <button class="header-cta btn btn-primary" on:click=move |_| set_open.set(true)>
                    "使い方を見る"
                </button>
            </div>
        </header>
    }
}
