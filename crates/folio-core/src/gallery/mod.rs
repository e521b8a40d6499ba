//! Image gallery navigation engine.
//!
//! - [`GallerySession`] - Index, direction and load-state machine
//! - [`Direction`], [`direction_between`] - Pure transition direction selection
//! - [`GalleryInput`], [`NavKey`], [`Outcome`] - Input multiplexing

mod direction;
mod input;
mod session;

use std::fmt;

use serde::Deserialize;

pub use direction::{Direction, Edge, direction_between};
pub use input::{GalleryInput, NavKey, Outcome};
pub use session::{GallerySession, Transition};

/// Opaque image reference (URL or asset path).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

impl From<String> for ImageRef {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
