//! Gallery viewer components.
//!
//! The viewer is mounted once at the app root and driven entirely by
//! [`GalleryState`](crate::app::GalleryState).
//!
//! Components:
//! - [`GalleryViewer`] - Modal with header, slide stage, arrows and loading indicator
//! - [`ThumbnailStrip`] - Clickable thumbnails for direct jumps
//! - [`use_gallery_keyboard`] - Window keydown binding scoped to the open viewer

mod keyboard;
mod thumbnails;
mod viewer;

pub use keyboard::use_gallery_keyboard;
pub use thumbnails::ThumbnailStrip;
pub use viewer::GalleryViewer;
