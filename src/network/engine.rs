use std::sync::Arc;
use std::time::Duration;

use crate::config::{BackdropConfig, NetworkConfig};
use crate::foundation::core::Size;
use crate::foundation::rng::Rng64;
use crate::network::generate::{DensityTier, generate};
use crate::network::physics::{advance_nodes, advance_particles, step_ratio};
use crate::scene::node::Node;
use crate::scene::particle::Particle;
use crate::scene::pointer::PointerState;

/// Owned network state: nodes, particles and the random stream that drives them.
///
/// Nodes are generated the first time the engine sees a non-empty surface and are kept for the
/// rest of the session. Later resizes only move the walls.
#[derive(Clone, Debug)]
pub struct NetworkEngine {
    cfg: NetworkConfig,
    palette: Vec<Arc<str>>,
    reference_interval_secs: f64,
    max_step_ratio: f64,
    rng: Rng64,
    size: Size,
    nodes: Vec<Node>,
    particles: Vec<Particle>,
}

impl NetworkEngine {
    pub fn new(config: &BackdropConfig) -> Self {
        Self {
            cfg: config.network.clone(),
            palette: config
                .theme
                .node_palette
                .iter()
                .map(|c| Arc::from(c.as_str()))
                .collect(),
            reference_interval_secs: config.reference_interval_secs(),
            max_step_ratio: config.max_step_ratio,
            rng: Rng64::new(config.seed),
            size: Size::ZERO,
            nodes: Vec::new(),
            particles: Vec::new(),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.cfg
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_generated(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Distance below which two nodes are linked, for the current surface.
    pub fn connection_distance(&self) -> f64 {
        self.cfg
            .connection_distance(self.size.width, self.size.height)
    }

    /// Track a new logical surface size. Returns `true` when this call generated the network.
    pub fn resize(&mut self, size: Size) -> bool {
        self.size = size;
        if self.is_generated() || size.width <= 0.0 || size.height <= 0.0 {
            tracing::debug!(width = size.width, height = size.height, "network resize");
            return false;
        }
        if self.palette.is_empty() {
            tracing::warn!("node palette is empty; network not generated");
            return false;
        }

        let tier = DensityTier::for_width(size.width, &self.cfg);
        let (nodes, particles) = generate(size, tier, &self.cfg, &self.palette, &mut self.rng);
        tracing::info!(
            width = size.width,
            height = size.height,
            ?tier,
            nodes = nodes.len(),
            particles = particles.len(),
            "network generated"
        );
        self.nodes = nodes;
        self.particles = particles;
        true
    }

    /// Advance particles, then nodes, by `elapsed`. Returns the step ratio that was applied.
    pub fn update(&mut self, elapsed: Duration, pointer: &PointerState) -> f64 {
        let k = step_ratio(
            elapsed.as_secs_f64(),
            self.reference_interval_secs,
            self.max_step_ratio,
        );
        if k == 0.0 || self.nodes.is_empty() {
            return k;
        }
        advance_particles(&mut self.particles, &self.nodes, k, &mut self.rng);
        advance_nodes(
            &mut self.nodes,
            pointer,
            self.size,
            &self.cfg,
            k,
            &mut self.rng,
        );
        k
    }

    /// Unordered edges `(i, j)` with `i < j`, taken from the lower index's adjacency list.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(i, n)| {
            n.neighbors
                .iter()
                .copied()
                .filter(move |&j| i < j)
                .map(move |j| (i, j))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/engine.rs"]
mod tests;
