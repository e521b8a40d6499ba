//! Portfolio project grid with a full-screen gallery viewer.
//!
//! The binary in `main.rs` mounts [`app::App`]; browser tests mount
//! individual components against an [`app::AppContext`].

pub mod app;
pub mod components;
pub mod config;
pub mod utils;
