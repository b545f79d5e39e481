//! The drifting node-and-edge network: generation, per-tick physics and the owning engine.

/// Owned simulation state and its tick entry point.
pub mod engine;
/// One-shot graph and particle generation.
pub mod generate;
/// Per-tick node and particle updates.
pub mod physics;
