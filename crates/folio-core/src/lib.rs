//! Core logic for the folio portfolio page.
//!
//! This crate has no browser dependencies so everything here runs under a
//! plain `cargo test`:
//! - [`gallery`] - Gallery viewer state machine and input routing
//! - [`catalog`] - Project cards, categories and filtering
//! - [`error`] - Error types

pub mod catalog;
pub mod error;
pub mod gallery;

pub use catalog::{Catalog, Project};
pub use error::{CatalogError, GalleryError};
pub use gallery::{Direction, GalleryInput, GallerySession, ImageRef, NavKey, Outcome, Transition};
