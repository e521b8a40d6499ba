//! Keyboard binding for the gallery viewer.
//!
//! The window `keydown` listener is a page-wide resource: it is attached when
//! the session opens and removed as soon as it closes (or the owning
//! component is cleaned up), so no keys are captured while the viewer is
//! hidden.

use folio_core::gallery::{GalleryInput, GallerySession, NavKey};
use leptos::leptos_dom::helpers::{WindowListenerHandle, window_event_listener};
use leptos::{ev, prelude::*};
use tracing::debug;

use crate::app::GalleryState;

/// Bind Left/Right/Escape to the gallery while it is open.
pub fn use_gallery_keyboard(gallery: GalleryState) {
    let handle = StoredValue::new_local(None::<WindowListenerHandle>);
    let is_open = Memo::new(move |_| gallery.session.with(GallerySession::is_open));

    let release = move || {
        handle.try_update_value(|slot| {
            if let Some(listener) = slot.take() {
                listener.remove();
                debug!("gallery keyboard binding released");
            }
        });
    };

    Effect::new(move || {
        if !is_open.get() {
            release();
            return;
        }
        if handle.with_value(Option::is_some) {
            return;
        }

        let listener = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
            let Some(key) = NavKey::from_key(&ev.key()) else {
                return;
            };
            ev.prevent_default();
            gallery.dispatch(GalleryInput::Key(key));
        });
        handle.set_value(Some(listener));
        debug!("gallery keyboard binding acquired");
    });

    on_cleanup(release);
}
