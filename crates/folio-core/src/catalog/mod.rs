//! Project catalog for the card grid.
//!
//! Contains:
//! - [`Catalog`], [`Project`], [`Category`] - Data loaded from TOML
//! - [`CardSize`] - Grid footprint and tech-chip limits
//! - [`filter_projects`] - Category filtering

mod filter;
mod project;

pub use filter::{FILTER_PROMPT, filter_label, filter_projects, filter_prompt};
pub use project::{CardSize, Catalog, Category, CategoryAccent, Project, category_accent};
