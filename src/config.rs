//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The project catalog is loaded at compile time using `include_str!`.

use tracing::Level;

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Project catalog rendered by the grid (TOML, see `folio_core::catalog`).
pub const PROJECTS_TOML: &str = include_str!("../assets/projects.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the page header.
pub const APP_NAME: &str = "folio";

/// Heading shown above the project grid.
pub const PROJECTS_HEADING: &str = "~/projects";

/// Fallback title used in gallery alt text.
pub const DEFAULT_GALLERY_TITLE: &str = "Project";

// =============================================================================
// Gallery Configuration
// =============================================================================

/// Slide transition duration in milliseconds.
///
/// Must match the animation duration in `gallery.module.css`; the outgoing
/// frame is removed after this delay.
pub const TRANSITION_MS: u32 = 350;

/// Media query that switches slides to a plain cross-fade.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};
