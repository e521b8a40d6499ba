//! UI components built with Leptos.
//!
//! - [`grid`] - Filterable project card grid (the gallery's host)
//! - [`gallery`] - Full-screen image gallery viewer
//! - [`icons`] - Centralized icon definitions

pub mod gallery;
pub mod grid;
pub mod icons;

pub use gallery::GalleryViewer;
pub use grid::ProjectGrid;
