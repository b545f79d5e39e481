//! Encoding sinks.
//!
//! Sinks consume rendered frames in tick order and are used by [`crate::Backdrop::render_range`].

/// Generic frame sink trait and built-in sinks.
pub mod sink;
