//! Cooperative per-frame tick source.

/// Deterministic timestamps for offline hosts.
pub mod clock;
/// Callback registry driven by host timestamps.
pub mod scheduler;
