//! Thumbnail strip along the bottom of the viewer.

use folio_core::gallery::GalleryInput;
use leptos::{ev, prelude::*};

use crate::app::GalleryState;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// One thumbnail per image; clicking jumps straight to it.
#[component]
pub fn ThumbnailStrip(gallery: GalleryState) -> impl IntoView {
    let images = Memo::new(move |_| gallery.session.with(|s| s.images().to_vec()));

    view! {
        <nav
            class=css::thumbnails
            aria-label="Gallery thumbnails"
            on:click=|ev: ev::MouseEvent| ev.stop_propagation()
        >
            <For
                each=move || images.get().into_iter().enumerate()
                key=|(index, image)| (*index, image.clone())
                children=move |(index, image)| {
                    let is_active = move || {
                        gallery.session.with(|s| s.is_thumbnail_active(index))
                    };
                    view! {
                        <img
                            class=move || {
                                if is_active() {
                                    format!("{} {}", css::thumbnail, css::thumbnailActive)
                                } else {
                                    css::thumbnail.to_string()
                                }
                            }
                            src=image.to_string()
                            alt=format!("Thumbnail {}", index + 1)
                            aria-current=move || is_active().then_some("true")
                            on:click=move |_| {
                                gallery.dispatch(GalleryInput::Thumbnail(index));
                            }
                        />
                    }
                }
            />
        </nav>
    }
}
