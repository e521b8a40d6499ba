//! Error types for the core crate.
//!
//! - [`GalleryError`] - Gallery session contract violations reported to the host
//! - [`CatalogError`] - Project catalog parsing and validation failures

use thiserror::Error;

/// Gallery session errors.
///
/// Navigation itself never fails (boundary requests are no-ops); the only
/// reportable failure is an `open` the session refuses to honour.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// `open` was called with no images. The session stays closed.
    #[error("cannot open a gallery with no images")]
    EmptyGallery,
}

/// Project catalog errors.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The TOML document could not be deserialized.
    #[error("invalid project catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// Two projects share a title (titles key the grid).
    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),
    /// A project has an empty or whitespace-only title.
    #[error("project #{0} has an empty title")]
    EmptyTitle(usize),
    /// A gallery image reference is empty.
    #[error("project {project:?} has an empty image reference at position {position}")]
    EmptyImageRef { project: String, position: usize },
}
