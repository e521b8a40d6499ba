//! Input multiplexing for the gallery viewer.
//!
//! Keyboard, arrow clicks, thumbnail clicks, close triggers and image decode
//! signals all funnel through [`GallerySession::handle`], so there is never
//! per-source shadow state.

use super::session::{GallerySession, Transition};

/// Keyboard command recognised while the viewer is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
    Close,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// A single input event delivered to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryInput {
    Key(NavKey),
    NextArrow,
    PreviousArrow,
    /// Thumbnail strip click at the given position.
    Thumbnail(usize),
    CloseButton,
    Backdrop,
    /// A displayed frame finished decoding. `generation` is the session's
    /// [`GallerySession::generation`] when the frame was rendered.
    ImageLoaded { index: usize, generation: u64 },
}

/// What an input did to the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed.
    #[default]
    Ignored,
    /// The displayed index changed.
    Moved(Transition),
    /// The displayed image is now loaded.
    Loaded,
    /// The viewer closed.
    Closed,
}

impl GallerySession {
    /// Routes one input to the matching operation.
    ///
    /// Every input is ignored while the session is closed.
    pub fn handle(&mut self, input: GalleryInput) -> Outcome {
        if !self.is_open() {
            return Outcome::Ignored;
        }

        match input {
            GalleryInput::Key(NavKey::Next) | GalleryInput::NextArrow => {
                self.next().map_or(Outcome::Ignored, Outcome::Moved)
            }
            GalleryInput::Key(NavKey::Previous) | GalleryInput::PreviousArrow => {
                self.previous().map_or(Outcome::Ignored, Outcome::Moved)
            }
            GalleryInput::Thumbnail(index) => {
                self.jump_to(index).map_or(Outcome::Ignored, Outcome::Moved)
            }
            GalleryInput::Key(NavKey::Close) | GalleryInput::CloseButton | GalleryInput::Backdrop => {
                self.close();
                Outcome::Closed
            }
            GalleryInput::ImageLoaded { index, generation } => {
                if self.mark_loaded(index, generation) {
                    Outcome::Loaded
                } else {
                    Outcome::Ignored
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{Direction, ImageRef};

    fn opened(count: usize, index: usize) -> GallerySession {
        let images = (0..count)
            .map(|i| ImageRef::new(format!("img-{i}.png")))
            .collect();
        let mut session = GallerySession::new();
        session.open(images, index).unwrap();
        session
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Close));
        assert_eq!(NavKey::from_key("ArrowUp"), None);
        assert_eq!(NavKey::from_key("escape"), None);
        assert_eq!(NavKey::from_key(""), None);
    }

    #[test]
    fn test_keys_and_arrows_share_state() {
        let mut session = opened(4, 0);

        let out = session.handle(GalleryInput::Key(NavKey::Next));
        assert!(matches!(out, Outcome::Moved(t) if t.to == 1));

        let out = session.handle(GalleryInput::NextArrow);
        assert!(matches!(out, Outcome::Moved(t) if t.to == 2));

        let out = session.handle(GalleryInput::PreviousArrow);
        assert!(matches!(out, Outcome::Moved(t) if t.direction == Direction::Backward));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_thumbnail_click_jumps() {
        let mut session = opened(4, 1);
        let out = session.handle(GalleryInput::Thumbnail(3));
        assert!(matches!(out, Outcome::Moved(t) if t.direction == Direction::Forward));
        assert_eq!(session.current_index(), 3);
        assert!(!session.is_loaded());

        assert_eq!(session.handle(GalleryInput::Thumbnail(3)), Outcome::Ignored);
        assert_eq!(session.handle(GalleryInput::Thumbnail(9)), Outcome::Ignored);
    }

    #[test]
    fn test_escape_closes_once_then_keys_are_ignored() {
        let mut session = opened(3, 1);

        assert_eq!(session.handle(GalleryInput::Key(NavKey::Close)), Outcome::Closed);
        assert!(!session.is_open());

        assert_eq!(session.handle(GalleryInput::Key(NavKey::Close)), Outcome::Ignored);
        assert_eq!(session.handle(GalleryInput::Key(NavKey::Next)), Outcome::Ignored);
        assert_eq!(session.handle(GalleryInput::Key(NavKey::Previous)), Outcome::Ignored);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_backdrop_and_close_button_close() {
        let mut session = opened(2, 0);
        assert_eq!(session.handle(GalleryInput::Backdrop), Outcome::Closed);

        let mut session = opened(2, 0);
        assert_eq!(session.handle(GalleryInput::CloseButton), Outcome::Closed);
    }

    #[test]
    fn test_boundary_inputs_are_ignored() {
        let mut session = opened(2, 1);
        assert_eq!(session.handle(GalleryInput::NextArrow), Outcome::Ignored);
        assert_eq!(session.handle(GalleryInput::Key(NavKey::Next)), Outcome::Ignored);
        assert_eq!(session.current_index(), 1);
    }

    fn loaded(session: &GallerySession, index: usize) -> GalleryInput {
        GalleryInput::ImageLoaded {
            index,
            generation: session.generation(),
        }
    }

    #[test]
    fn test_image_loaded_routing() {
        let mut session = opened(3, 0);
        assert_eq!(session.handle(loaded(&session, 1)), Outcome::Ignored);
        assert_eq!(session.handle(loaded(&session, 0)), Outcome::Loaded);
        assert_eq!(session.handle(loaded(&session, 0)), Outcome::Ignored);

        session.handle(GalleryInput::NextArrow);
        assert!(session.show_loading_indicator());
        assert_eq!(session.handle(loaded(&session, 1)), Outcome::Loaded);
        assert!(!session.show_loading_indicator());
    }

    #[test]
    fn test_late_decode_of_replaced_frame_is_ignored() {
        let mut session = opened(2, 0);
        let replaced = loaded(&session, 0);

        session.handle(GalleryInput::NextArrow);
        session.handle(GalleryInput::PreviousArrow);
        assert_eq!(session.handle(replaced), Outcome::Ignored);
        assert!(session.show_loading_indicator());

        let late_from_last_open = loaded(&session, 0);
        session.handle(GalleryInput::Backdrop);
        session
            .open(vec![ImageRef::from("y1.png"), ImageRef::from("y2.png")], 0)
            .unwrap();
        assert_eq!(session.handle(late_from_last_open), Outcome::Ignored);
        assert!(session.show_loading_indicator());
    }
}
