//! Project card grid.
//!
//! Components:
//! - [`ProjectGrid`] - Category filter pills, card grid and empty state
//! - [`ProjectCard`] - A single project; opens the gallery for multi-image projects

mod card;
#[allow(clippy::module_inception)]
mod grid;

pub use card::ProjectCard;
pub use grid::ProjectGrid;
