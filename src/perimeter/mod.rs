//! Markers that glide around the border of a rectangular panel.

/// Pulsing dot drawn at a tracker position.
pub(crate) mod marker;
/// Progress-to-boundary mapping.
pub(crate) mod tracker;
