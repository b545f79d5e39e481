use std::sync::Arc;

use smallvec::SmallVec;

use crate::foundation::core::{Point, Vec2};

/// Outgoing adjacency of one node. Never holds the node's own index.
pub type Neighbors = SmallVec<[usize; 3]>;

/// A drifting point of the network.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Point,
    pub radius: f64,
    /// Palette entry as written in the theme; parsed when drawn.
    pub color: Arc<str>,
    pub opacity: f64,
    pub velocity: Vec2,
    /// Filled once at generation, never shrunk. Not necessarily symmetric.
    pub neighbors: Neighbors,
}

impl Node {
    pub fn is_linked_to(&self, other: usize) -> bool {
        self.neighbors.contains(&other)
    }
}
