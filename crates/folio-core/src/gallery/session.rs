//! Gallery session state machine.
//!
//! A [`GallerySession`] is the single authoritative state of the image viewer.
//! Every reset that a reactive view would otherwise do in an effect (clearing
//! the loaded flag when the index changes or the viewer opens) happens here,
//! inside the operation that changes the state.

use tracing::{debug, warn};

use super::ImageRef;
use super::direction::{Direction, direction_between};
use crate::error::GalleryError;

/// An applied index change.
///
/// Emitted for every move so the view can run exactly one slide animation
/// per change. Boundary no-ops and self-jumps emit nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Live state of the gallery viewer.
///
/// # Invariants
///
/// - While open, `images` is non-empty and `current_index < images.len()`.
/// - `loaded` is false after every open and every index change, and becomes
///   true only through [`GallerySession::on_image_loaded`] or
///   [`GallerySession::mark_loaded`] for the current frame.
/// - `generation` increases on every open and every index change, so each
///   displayed frame has a tag no earlier frame shares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GallerySession {
    images: Vec<ImageRef>,
    current_index: usize,
    direction: Direction,
    loaded: bool,
    is_open: bool,
    generation: u64,
}

impl GallerySession {
    /// Creates a closed session with no images.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Opens the viewer on `images`, showing `initial_index`.
    ///
    /// An out-of-range index is clamped to the last image. An empty list is
    /// rejected and leaves the session untouched.
    ///
    /// Returns the index actually displayed.
    pub fn open(
        &mut self,
        images: Vec<ImageRef>,
        initial_index: usize,
    ) -> Result<usize, GalleryError> {
        let Some(last) = images.len().checked_sub(1) else {
            warn!("gallery open rejected: empty image list");
            return Err(GalleryError::EmptyGallery);
        };

        let index = if initial_index > last {
            warn!(
                requested = initial_index,
                clamped = last,
                "gallery open index out of range"
            );
            last
        } else {
            initial_index
        };

        self.images = images;
        self.current_index = index;
        self.direction = Direction::None;
        self.loaded = false;
        self.is_open = true;
        self.generation += 1;

        debug!(
            index,
            total = self.images.len(),
            generation = self.generation,
            "gallery opened"
        );
        Ok(index)
    }

    /// Closes the viewer. Always legal.
    ///
    /// The index is left as is; the next `open` supplies a fresh one.
    /// Returns `true` if the session was open.
    pub fn close(&mut self) -> bool {
        let was_open = std::mem::replace(&mut self.is_open, false);
        if was_open {
            debug!(index = self.current_index, "gallery closed");
        }
        was_open
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Advances one image. No-op at the last image.
    pub fn next(&mut self) -> Option<Transition> {
        if !self.has_next() {
            return None;
        }
        Some(self.move_to(self.current_index + 1))
    }

    /// Steps back one image. No-op at the first image.
    pub fn previous(&mut self) -> Option<Transition> {
        if !self.has_previous() {
            return None;
        }
        Some(self.move_to(self.current_index - 1))
    }

    /// Jumps straight to `index` (thumbnail selection).
    ///
    /// Out-of-range indices and the current index are no-ops; in particular a
    /// self-jump does not reset the loaded flag.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        if !self.is_open || index >= self.images.len() || index == self.current_index {
            return None;
        }
        Some(self.move_to(index))
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.current_index;
        let direction = direction_between(from, to);

        self.direction = direction;
        self.current_index = to;
        self.loaded = false;
        self.generation += 1;

        debug!(from, to, ?direction, generation = self.generation, "gallery transition");
        Transition {
            from,
            to,
            direction,
        }
    }

    // ========================================================================
    // Load state
    // ========================================================================

    /// Records that the displayed image finished decoding.
    ///
    /// Idempotent: returns `true` only when the flag actually flips.
    pub fn on_image_loaded(&mut self) -> bool {
        if !self.is_open || self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }

    /// Records a decode completion for the frame tagged `(index, generation)`.
    ///
    /// Signals from any other frame are ignored, including a late decode of
    /// an earlier frame showing the same index (A to B and back to A) and
    /// one from a previous open.
    pub fn mark_loaded(&mut self, index: usize, generation: u64) -> bool {
        if index != self.current_index || generation != self.generation {
            debug!(
                index,
                generation,
                current = self.current_index,
                current_generation = self.generation,
                "stale image load ignored"
            );
            return false;
        }
        self.on_image_loaded()
    }

    // ========================================================================
    // Observables
    // ========================================================================

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Tag of the displayed frame; decode signals must echo it back.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Direction of the most recent index change.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The image currently displayed, if open.
    pub fn current_image(&self) -> Option<&ImageRef> {
        if !self.is_open {
            return None;
        }
        self.images.get(self.current_index)
    }

    /// Whether the "next" arrow is rendered.
    pub fn has_next(&self) -> bool {
        self.is_open && self.current_index + 1 < self.images.len()
    }

    /// Whether the "previous" arrow is rendered.
    pub fn has_previous(&self) -> bool {
        self.is_open && self.current_index > 0
    }

    /// Whether the loading indicator is visible.
    pub fn show_loading_indicator(&self) -> bool {
        self.is_open && !self.loaded
    }

    /// Whether thumbnail `index` is the highlighted one.
    pub fn is_thumbnail_active(&self, index: usize) -> bool {
        self.is_open && index == self.current_index
    }

    /// Position counter, e.g. `"2 / 5"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.images.len())
    }
}
