//! Display lists and the CPU rasterizer that turns them into frames.

/// Frame type and backend trait.
pub mod backend;
/// CPU raster backend powered by `vello_cpu`.
pub mod cpu;
/// Draw operations.
pub mod display;
/// Network display-list builder.
pub mod network;
