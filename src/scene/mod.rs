//! Simulation state owned by a mounted backdrop.

/// Graph nodes.
pub mod node;
/// Light particles travelling along edges.
pub mod particle;
/// Latest pointer sample.
pub mod pointer;
