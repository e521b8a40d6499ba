//! Full-screen gallery viewer modal.
//!
//! Renders nothing while the session is closed. While open it shows the
//! title and position counter, the current image with a directional slide,
//! the loading indicator, boundary-aware arrows and the thumbnail strip.

use folio_core::gallery::{Direction, Edge, GalleryInput, GallerySession, ImageRef};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;
use tracing::warn;

use super::{ThumbnailStrip, use_gallery_keyboard};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DEFAULT_GALLERY_TITLE, REDUCED_MOTION_QUERY};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

/// Animation class for the incoming image.
fn enter_class(direction: Direction, reduced_motion: bool) -> &'static str {
    if reduced_motion {
        return css::fadeIn;
    }
    match direction.enter_edge() {
        Some(Edge::Trailing) => css::enterTrailing,
        Some(Edge::Leading) => css::enterLeading,
        None => "",
    }
}

/// Animation class for the outgoing image (mirror of the incoming edge).
fn exit_class(direction: Direction, reduced_motion: bool) -> &'static str {
    if reduced_motion {
        return css::fadeOut;
    }
    match direction.enter_edge() {
        Some(Edge::Trailing) => css::exitLeading,
        Some(Edge::Leading) => css::exitTrailing,
        None => css::fadeOut,
    }
}

/// Gallery viewer modal.
///
/// Mount once; open it through `AppContext::gallery`.
#[component]
pub fn GalleryViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let gallery = ctx.gallery;

    use_gallery_keyboard(gallery);

    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    let is_open = Memo::new(move |_| gallery.session.with(GallerySession::is_open));
    let loaded = Memo::new(move |_| gallery.session.with(GallerySession::is_loaded));
    let show_loading =
        Memo::new(move |_| gallery.session.with(GallerySession::show_loading_indicator));
    let has_next = Memo::new(move |_| gallery.session.with(GallerySession::has_next));
    let has_previous = Memo::new(move |_| gallery.session.with(GallerySession::has_previous));
    let counter = Memo::new(move |_| gallery.session.with(GallerySession::counter));

    // Only changes when the displayed frame does, so load-state updates
    // never restart the slide animation.
    let current = Memo::new(move |_| {
        gallery.session.with(|s| {
            s.current_image()
                .cloned()
                .map(|image| (image, s.current_index(), s.generation(), s.direction()))
        })
    });

    Effect::new(move || {
        dom::set_scroll_locked(is_open.get());
    });

    let title = move || {
        gallery
            .title
            .get()
            .unwrap_or_else(|| DEFAULT_GALLERY_TITLE.to_string())
    };

    let render_current = move || {
        current.get().map(|frame: (ImageRef, usize, u64, Direction)| {
            let (image, index, generation, direction) = frame;
            let class = format!(
                "{} {}",
                css::frame,
                enter_class(direction, reduced_motion.get_untracked())
            );
            let alt = format!("{} - Image {}", title(), index + 1);
            let src = image.to_string();
            let failed_src = src.clone();

            view! {
                <div class=class>
                    <img
                        class=css::image
                        src=src
                        alt=alt
                        style:opacity=move || {
                            if loaded.get() { "1" } else { "0" }
                        }
                        on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                        on:load=move |_| {
                            gallery.dispatch(GalleryInput::ImageLoaded { index, generation });
                        }
                        on:error=move |_| {
                            warn!(src = %failed_src, index, "gallery image failed to load");
                        }
                    />
                </div>
            }
        })
    };

    let render_outgoing = move || {
        gallery.outgoing.get().map(|frame| {
            let class = format!(
                "{} {}",
                css::frame,
                exit_class(frame.direction, reduced_motion.get_untracked())
            );
            view! {
                <div class=class aria-hidden="true">
                    <img class=css::image src=frame.image.to_string() alt="" />
                </div>
            }
        })
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class=css::backdrop
                role="dialog"
                aria-modal="true"
                on:click=move |_| {
                    gallery.dispatch(GalleryInput::Backdrop);
                }
            >
                <header class=css::header on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                    <div>
                        <Show when=move || gallery.title.with(Option::is_some)>
                            <h2 class=css::title>{title}</h2>
                        </Show>
                        <span class=css::counter>{move || counter.get()}</span>
                    </div>
                    <button
                        class=css::closeButton
                        title="Close gallery"
                        aria-label="Close gallery"
                        on:click=move |_| {
                            gallery.dispatch(GalleryInput::CloseButton);
                        }
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <div class=css::stage>
                    {render_outgoing}
                    {render_current}
                    <Show when=move || show_loading.get()>
                        <div class=css::loading>"Loading..."</div>
                    </Show>
                </div>

                <Show when=move || has_previous.get()>
                    <button
                        class=css::navPrevious
                        aria-label="Previous image"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            gallery.dispatch(GalleryInput::PreviousArrow);
                        }
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                </Show>
                <Show when=move || has_next.get()>
                    <button
                        class=css::navNext
                        aria-label="Next image"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            gallery.dispatch(GalleryInput::NextArrow);
                        }
                    >
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </Show>

                <ThumbnailStrip gallery=gallery />
            </div>
        </Show>
    }
}
