//! Utility modules for browser glue.
//!
//! Provides:
//! - [`dom`] - Window/body access and scroll locking
//! - [`logging`] - `tracing` subscriber writing to the devtools console

pub mod dom;
pub mod logging;
