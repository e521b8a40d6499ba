//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document `<body>`.
#[inline]
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Lock or unlock page scrolling behind a modal.
///
/// Returns `true` if the body style was updated.
pub fn set_scroll_locked(locked: bool) -> bool {
    let Some(body) = body() else {
        return false;
    };
    let style = body.style();

    if locked {
        style.set_property("overflow", "hidden").is_ok()
    } else {
        style.remove_property("overflow").is_ok()
    }
}
