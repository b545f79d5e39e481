//! JSON configuration for a mounted backdrop.
//!
//! Every field has a default matching the stock login-page look, so `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::error::{NetglowError, NetglowResult};
use crate::paint::color::ColorDef;
use crate::perimeter::tracker::Direction;

/// Top-level configuration for [`crate::Backdrop`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackdropConfig {
    /// Seed for every random draw (graph layout, routing, jitter).
    pub seed: u64,
    /// Cadence the per-tick constants were tuned for. Increments scale by `elapsed * reference_fps`.
    pub reference_fps: f64,
    /// Upper bound on the elapsed/reference ratio for a single tick, so a stalled host does not
    /// teleport nodes when it resumes.
    pub max_step_ratio: f64,
    pub network: NetworkConfig,
    pub theme: Theme,
    pub markers: Vec<MarkerConfig>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            reference_fps: 60.0,
            max_step_ratio: 4.0,
            network: NetworkConfig::default(),
            theme: Theme::default(),
            markers: vec![
                MarkerConfig {
                    direction: Direction::Forward,
                    color: ColorDef::from_rgb8_alpha(94.0, 234.0, 212.0, 1.0),
                    ..MarkerConfig::default()
                },
                MarkerConfig {
                    direction: Direction::Reverse,
                    color: ColorDef::WHITE,
                    ..MarkerConfig::default()
                },
            ],
        }
    }
}

impl BackdropConfig {
    pub fn from_json_str(s: &str) -> NetglowResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| NetglowError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> NetglowResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            NetglowError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Seconds per reference tick.
    pub fn reference_interval_secs(&self) -> f64 {
        1.0 / self.reference_fps
    }

    pub fn validate(&self) -> NetglowResult<()> {
        if !(self.reference_fps.is_finite() && self.reference_fps > 0.0) {
            return Err(NetglowError::validation("reference_fps must be > 0"));
        }
        if !(self.max_step_ratio.is_finite() && self.max_step_ratio > 0.0) {
            return Err(NetglowError::validation("max_step_ratio must be > 0"));
        }
        self.network.validate()?;
        self.theme.validate()?;
        for (i, m) in self.markers.iter().enumerate() {
            m.validate()
                .map_err(|e| NetglowError::validation(format!("markers[{i}]: {e}")))?;
        }
        Ok(())
    }
}

/// Largest neighbour list a node may hold.
pub const MAX_NEIGHBORS: usize = 3;
/// Smallest accepted area per node, in square logical pixels.
pub const MIN_AREA_PER_NODE: f64 = 1_000.0;

/// Graph generation, physics and edge styling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Surfaces this wide or narrower use the compact density tier.
    pub compact_max_width: f64,
    /// Square pixels per node on compact surfaces.
    pub compact_area_per_node: f64,
    /// Square pixels per node on wide surfaces.
    pub wide_area_per_node: f64,
    pub min_nodes: usize,
    pub max_nodes: Option<usize>,
    pub max_neighbors: usize,
    /// Connection distance is `min(width, height) / connection_divisor`.
    pub connection_divisor: f64,
    /// One particle per this many pixels of surface width.
    pub particle_spacing: f64,
    pub max_particles: usize,
    pub node_radius: [f64; 2],
    pub node_opacity: [f64; 2],
    pub particle_speed: [f64; 2],
    /// Full width of the uniform range initial velocity components are drawn from.
    pub initial_speed: f64,
    pub pointer_radius: f64,
    pub repulsion: f64,
    pub jitter: f64,
    pub damping: f64,
    pub edge_width: f64,
    pub edge_alpha_scale: f64,
    pub edge_alpha_floor: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            compact_max_width: 768.0,
            compact_area_per_node: 15_000.0,
            wide_area_per_node: 12_000.0,
            min_nodes: 15,
            max_nodes: None,
            max_neighbors: MAX_NEIGHBORS,
            connection_divisor: 4.0,
            particle_spacing: 40.0,
            max_particles: 50,
            node_radius: [1.5, 3.5],
            node_opacity: [0.3, 0.8],
            particle_speed: [0.2, 0.7],
            initial_speed: 0.2,
            pointer_radius: 100.0,
            repulsion: 0.2,
            jitter: 0.01,
            damping: 0.99,
            edge_width: 0.5,
            edge_alpha_scale: 0.15,
            edge_alpha_floor: 0.1,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> NetglowResult<()> {
        let positive = [
            ("compact_area_per_node", self.compact_area_per_node),
            ("wide_area_per_node", self.wide_area_per_node),
            ("connection_divisor", self.connection_divisor),
            ("particle_spacing", self.particle_spacing),
            ("pointer_radius", self.pointer_radius),
            ("edge_width", self.edge_width),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(NetglowError::validation(format!("network.{name} must be > 0")));
            }
        }
        let non_negative = [
            ("compact_max_width", self.compact_max_width),
            ("initial_speed", self.initial_speed),
            ("repulsion", self.repulsion),
            ("jitter", self.jitter),
            ("edge_alpha_scale", self.edge_alpha_scale),
            ("edge_alpha_floor", self.edge_alpha_floor),
        ];
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(NetglowError::validation(format!(
                    "network.{name} must be >= 0"
                )));
            }
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(NetglowError::validation("network.damping must be in (0, 1]"));
        }
        for (name, v) in [
            ("compact_area_per_node", self.compact_area_per_node),
            ("wide_area_per_node", self.wide_area_per_node),
        ] {
            if v < MIN_AREA_PER_NODE {
                return Err(NetglowError::validation(format!(
                    "network.{name} must be >= {MIN_AREA_PER_NODE}"
                )));
            }
        }
        if !(1..=MAX_NEIGHBORS).contains(&self.max_neighbors) {
            return Err(NetglowError::validation(format!(
                "network.max_neighbors must be in 1..={MAX_NEIGHBORS}"
            )));
        }
        if self.min_nodes < 2 {
            return Err(NetglowError::validation("network.min_nodes must be >= 2"));
        }
        if self.max_nodes.is_some_and(|m| m < 2) {
            return Err(NetglowError::validation("network.max_nodes must be >= 2"));
        }
        for (name, [lo, hi]) in [
            ("node_radius", self.node_radius),
            ("node_opacity", self.node_opacity),
            ("particle_speed", self.particle_speed),
        ] {
            if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
                return Err(NetglowError::validation(format!(
                    "network.{name} must be a [min, max] pair with 0 < min <= max"
                )));
            }
        }
        if self.node_opacity[1] > 1.0 {
            return Err(NetglowError::validation("network.node_opacity must be <= 1"));
        }
        Ok(())
    }

    /// Connection distance for a surface of the given logical size.
    pub fn connection_distance(&self, width: f64, height: f64) -> f64 {
        width.min(height) / self.connection_divisor
    }
}

/// Colours of the backdrop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub background: ColorDef,
    /// Node colours, kept as written. Nodes parse them at draw time and fall back to a flat fill
    /// when a value is not an `rgb()`/`rgba()` function.
    pub node_palette: Vec<String>,
    /// Edge colour; its alpha is replaced by the distance-based edge alpha.
    pub edge: ColorDef,
    pub particle: ColorDef,
    pub particle_core: ColorDef,
    pub pointer_highlight: ColorDef,
    pub marker_glow: ColorDef,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: ColorDef::from_rgb8_alpha(16.0, 18.0, 27.0, 1.0),
            node_palette: vec![
                "rgba(145, 188, 242, 0.9)".to_owned(),
                "rgba(116, 140, 171, 0.9)".to_owned(),
                "rgba(86, 130, 163, 0.9)".to_owned(),
                "rgba(182, 210, 237, 0.9)".to_owned(),
            ],
            edge: ColorDef::from_rgb8_alpha(86.0, 110.0, 145.0, 0.12),
            particle: ColorDef::from_rgb8_alpha(209.0, 231.0, 255.0, 0.85),
            particle_core: ColorDef::from_rgb8_alpha(255.0, 255.0, 255.0, 0.9),
            pointer_highlight: ColorDef::from_rgb8_alpha(180.0, 210.0, 240.0, 0.04),
            marker_glow: ColorDef::from_rgb8_alpha(255.0, 255.0, 255.0, 0.5),
        }
    }
}

impl Theme {
    pub fn validate(&self) -> NetglowResult<()> {
        if self.node_palette.is_empty() {
            return Err(NetglowError::validation("theme.node_palette must not be empty"));
        }
        Ok(())
    }
}

/// One marker gliding around the panel border.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub direction: Direction,
    pub color: ColorDef,
    /// Seconds for one full lap of the perimeter.
    pub lap_secs: f64,
    /// Initial progress in `[0, 1)`.
    pub start_progress: f64,
    /// Dot diameter in logical pixels.
    pub size: f64,
    /// Seconds for one scale/opacity pulse.
    pub pulse_secs: f64,
    pub pulse_ease: Ease,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Forward,
            color: ColorDef::WHITE,
            lap_secs: 10.0,
            start_progress: 0.0,
            size: 8.0,
            pulse_secs: 2.0,
            pulse_ease: Ease::InOutSine,
        }
    }
}

impl MarkerConfig {
    pub fn validate(&self) -> NetglowResult<()> {
        if !(self.lap_secs.is_finite() && self.lap_secs > 0.0) {
            return Err(NetglowError::validation("lap_secs must be > 0"));
        }
        if !(self.pulse_secs.is_finite() && self.pulse_secs > 0.0) {
            return Err(NetglowError::validation("pulse_secs must be > 0"));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(NetglowError::validation("size must be > 0"));
        }
        if !(0.0..1.0).contains(&self.start_progress) {
            return Err(NetglowError::validation("start_progress must be in [0, 1)"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
