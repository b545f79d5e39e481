use std::sync::Arc;

use crate::config::NetworkConfig;
use crate::foundation::core::{Point, Size, Vec2};
use crate::foundation::rng::Rng64;
use crate::scene::node::{Neighbors, Node};
use crate::scene::particle::Particle;

/// Node density class, picked from the surface width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityTier {
    Compact,
    Wide,
}

impl DensityTier {
    pub fn for_width(width: f64, cfg: &NetworkConfig) -> Self {
        if width <= cfg.compact_max_width {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    pub fn area_per_node(self, cfg: &NetworkConfig) -> f64 {
        match self {
            Self::Compact => cfg.compact_area_per_node,
            Self::Wide => cfg.wide_area_per_node,
        }
    }
}

/// Hard ceiling on generated nodes, whatever the surface and density.
pub const NODE_CEILING: usize = 10_000;

/// Number of nodes for a surface of `size`, never more than [`NODE_CEILING`].
pub fn node_count(size: Size, tier: DensityTier, cfg: &NetworkConfig) -> usize {
    let by_area = (size.width * size.height / tier.area_per_node(cfg)).floor();
    let by_area = if by_area.is_finite() && by_area > 0.0 {
        by_area.min(NODE_CEILING as f64) as usize
    } else {
        0
    };
    let n = by_area.max(cfg.min_nodes).min(NODE_CEILING);
    match cfg.max_nodes {
        Some(cap) => n.min(cap),
        None => n,
    }
}

/// Number of particle slots for a surface of `width`.
pub fn particle_slots(width: f64, cfg: &NetworkConfig) -> usize {
    let by_width = (width / cfg.particle_spacing).floor();
    let by_width = if by_width.is_finite() && by_width > 0.0 {
        by_width as usize
    } else {
        0
    };
    by_width.min(cfg.max_particles)
}

/// Build the node set, their adjacency and the initial particles for a surface of `size`.
///
/// `palette` must not be empty.
pub fn generate(
    size: Size,
    tier: DensityTier,
    cfg: &NetworkConfig,
    palette: &[Arc<str>],
    rng: &mut Rng64,
) -> (Vec<Node>, Vec<Particle>) {
    let count = node_count(size, tier, cfg);
    let mut nodes: Vec<Node> = (0..count)
        .map(|_| Node {
            position: Point::new(rng.next_f64() * size.width, rng.next_f64() * size.height),
            radius: rng.range(cfg.node_radius[0], cfg.node_radius[1]),
            color: palette[rng.index(palette.len())].clone(),
            opacity: rng.range(cfg.node_opacity[0], cfg.node_opacity[1]),
            velocity: Vec2::new(
                rng.centered(cfg.initial_speed),
                rng.centered(cfg.initial_speed),
            ),
            neighbors: Neighbors::new(),
        })
        .collect();

    link_neighbors(
        &mut nodes,
        cfg.connection_distance(size.width, size.height),
        cfg.max_neighbors,
    );

    let mut particles = Vec::new();
    if !nodes.is_empty() {
        for _ in 0..particle_slots(size.width, cfg) {
            let source = rng.index(nodes.len());
            let links = &nodes[source].neighbors;
            if links.is_empty() {
                continue;
            }
            let target = links[rng.index(links.len())];
            particles.push(Particle {
                progress: 0.0,
                speed: rng.range(cfg.particle_speed[0], cfg.particle_speed[1]),
                source,
                target,
            });
        }
    }

    (nodes, particles)
}

/// Scan pairs in index order, giving each node up to `max_neighbors` closer than `max_distance`.
///
/// Only the scanning node's list is extended, so `j` may appear in `i`'s list without the reverse.
pub fn link_neighbors(nodes: &mut [Node], max_distance: f64, max_neighbors: usize) {
    for i in 0..nodes.len() {
        let origin = nodes[i].position;
        for j in 0..nodes.len() {
            if nodes[i].neighbors.len() >= max_neighbors {
                break;
            }
            if i == j || nodes[i].is_linked_to(j) {
                continue;
            }
            if origin.distance(nodes[j].position) < max_distance {
                nodes[i].neighbors.push(j);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/generate.rs"]
mod tests;
