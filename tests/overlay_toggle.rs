//! Browser tests for the overlay toggle and the stateless display cards.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use context_generator_landing::App;
use context_generator_landing::sections::{Feature, Testimonial};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn test_root() -> web_sys::HtmlElement {
    let doc = document();
    let el = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

fn overlay_count() -> u32 {
    document().query_selector_all(".overlay").unwrap().length()
}

/// Lets queued reactive effects flush before asserting on the DOM.
async fn tick() {
    for _ in 0..2 {
        let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }
}

#[wasm_bindgen_test]
async fn overlay_hidden_on_initial_render() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), || view! { <App/> });
    tick().await;

    assert!(document().query_selector(".overlay").unwrap().is_none());

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn open_trigger_shows_launch_instructions() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), || view! { <App/> });
    tick().await;

    click(".header-cta");
    tick().await;

    let overlay = document().query_selector(".overlay").unwrap();
    let text = overlay
        .expect("overlay should be in the DOM after an open trigger")
        .text_content()
        .unwrap_or_default();
    assert!(text.contains("アプリケーションの起動方法"));
    assert!(text.contains("git clone https://github.com/noricha-vr/ContextGenerator.git"));
    assert!(text.contains("cd ContextGenerator"));
    assert!(text.contains("python gui.py"));

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn close_control_hides_overlay() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), || view! { <App/> });
    tick().await;

    click(".hero-cta");
    tick().await;
    assert_eq!(overlay_count(), 1);

    click(".overlay-close");
    tick().await;
    assert_eq!(overlay_count(), 0);

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn repeated_opens_keep_a_single_overlay() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), || view! { <App/> });
    tick().await;

    click(".header-cta");
    tick().await;
    click(".cta-open");
    tick().await;

    assert_eq!(overlay_count(), 1);

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn reopening_after_close_works() {
    let root = test_root();
    let handle = leptos::mount::mount_to(root.clone(), || view! { <App/> });
    tick().await;

    click(".header-cta");
    tick().await;
    click(".overlay-close");
    tick().await;
    click(".header-cta");
    tick().await;

    assert_eq!(overlay_count(), 1);

    drop(handle);
    root.remove();
}

#[wasm_bindgen_test]
async fn feature_card_renders_identically_for_identical_inputs() {
    let a = test_root();
    let b = test_root();
    let ha = leptos::mount::mount_to(a.clone(), || {
        view! { <Feature icon="⚡" title="ワンクリック要約" description="集約"/> }
    });
    let hb = leptos::mount::mount_to(b.clone(), || {
        view! { <Feature icon="⚡" title="ワンクリック要約" description="集約"/> }
    });
    tick().await;

    assert!(a.inner_html().contains("ワンクリック要約"));
    assert_eq!(a.inner_html(), b.inner_html());

    drop(ha);
    drop(hb);
    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
async fn testimonial_renders_identically_for_identical_inputs() {
    let a = test_root();
    let b = test_root();
    let ha = leptos::mount::mount_to(a.clone(), || {
        view! { <Testimonial quote="良いツール" author="Taro" role="Senior Developer"/> }
    });
    let hb = leptos::mount::mount_to(b.clone(), || {
        view! { <Testimonial quote="良いツール" author="Taro" role="Senior Developer"/> }
    });
    tick().await;

    assert!(a.inner_html().contains("Taro"));
    assert_eq!(a.inner_html(), b.inner_html());

    drop(ha);
    drop(hb);
    a.remove();
    b.remove();
}
