//! The mounted backdrop layer.

/// Mount, tick, input and teardown.
pub mod backdrop;
