use leptos::prelude::*;

/// Fixed launch instructions shown in the overlay. Also the clipboard payload.
pub const LAUNCH_COMMANDS: &str = "\
# リポジトリをクローン
git clone https://github.com/noricha-vr/ContextGenerator.git

# プロジェクトディレクトリに移動
cd ContextGenerator

# アプリケーションを起動
python gui.py";

#[component]
pub fn LaunchOverlay(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    setup_escape_listener(open, set_open);

    let (copied, set_copied) = signal(false);

    let copy_commands = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(LAUNCH_COMMANDS);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="overlay">
                <div class="overlay-panel">
                    <div class="overlay-header">
                        <h2 class="overlay-title">"アプリケーションの起動方法"</h2>
                        <button class="overlay-close" on:click=move |_| set_open.set(false)>
                            "✕"
                        </button>
                    </div>
                    <p>"以下のコマンドを順番に実行してください："</p>
                    <div class="code-block-with-copy">
                        <pre class="overlay-commands">{LAUNCH_COMMANDS}</pre>
                        <button class="code-copy-btn" on:click=copy_commands>
                            {move || if copied.get() { "copied" } else { "copy" }}
                        </button>
                    </div>
                    <p>"これらのコマンドを実行すると、Context Generatorが起動します。"</p>
                </div>
            </div>
        </Show>
    }
}

/// Document-level listener so Escape closes the overlay without the panel
/// holding focus. Installed once per page; the closure stays alive for the
/// page lifetime.
fn setup_escape_listener(open: ReadSignal<bool>, set_open: WriteSignal<bool>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" && open.get() {
                set_open.set(false);
            }
        }) as Box<dyn FnMut(_)>);

        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());

        closure.forget();
    }
}
