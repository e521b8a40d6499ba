//! Browser tests for the gallery's window keyboard binding.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use folio::app::AppContext;
use folio::components::GalleryViewer;
use folio_core::gallery::ImageRef;
use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to_body;
use leptos::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Fires a cancelable `keydown` at `window`.
///
/// Returns whether some listener handled it (called `prevent_default`).
fn press(key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_cancelable(true);
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window().dispatch_event(&ev).unwrap();
    ev.default_prevented()
}

/// Yields to the event loop so scheduled effects run.
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn images(count: usize) -> Vec<ImageRef> {
    (0..count)
        .map(|i| ImageRef::new(format!("images/test/{i}.png")))
        .collect()
}

#[wasm_bindgen_test]
async fn test_keyboard_binding_follows_open_state() {
    let ctx = AppContext::new();
    mount_to_body(move || {
        provide_context(ctx);
        view! { <GalleryViewer /> }
    });
    let gallery = ctx.gallery;
    let index = move || gallery.session.with_untracked(|s| s.current_index());
    let is_open = move || gallery.session.with_untracked(|s| s.is_open());

    settle().await;
    assert!(!press("ArrowRight"), "no listener before the viewer opens");

    gallery.open(images(3), 0, Some("Demo".into()));
    settle().await;

    assert!(press("ArrowRight"));
    assert_eq!(index(), 1);
    assert!(!press("Enter"));
    assert!(press("ArrowLeft"));
    assert_eq!(index(), 0);

    assert!(press("Escape"));
    assert!(!is_open());
    settle().await;

    assert!(!press("ArrowRight"), "listener must be removed after close");
    assert!(!press("Escape"));
    assert_eq!(index(), 0);

    gallery.open(images(3), 2, None);
    settle().await;

    assert!(press("ArrowLeft"));
    assert_eq!(index(), 1);
}
