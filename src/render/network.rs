//! Turns network state into a display list.

use std::f64::consts::PI;

use crate::config::Theme;
use crate::foundation::core::Rect;
use crate::network::engine::NetworkEngine;
use crate::paint::color::{ColorDef, parse_css_channels};
use crate::render::display::{DisplayList, GradientStop};
use crate::scene::node::Node;
use crate::scene::pointer::PointerState;

const PARTICLE_PULSE_AMPLITUDE: f64 = 1.8;
const PARTICLE_PULSE_BASE: f64 = 2.5;
const PARTICLE_PULSE_STAGGER: f64 = 0.3;
const GLOW_SCALE: f64 = 1.5;

/// Append the background, pointer highlight, edges, particles and nodes for one frame.
///
/// `time_secs` drives the particle shimmer and is independent of the physics step.
pub fn build(
    engine: &NetworkEngine,
    pointer: &PointerState,
    theme: &Theme,
    time_secs: f64,
    out: &mut DisplayList,
) {
    let size = engine.size();
    out.fill_rect(Rect::from_origin_size((0.0, 0.0), size), theme.background);

    let cfg = engine.config();
    if let Some(at) = pointer.active_position() {
        out.radial_gradient(
            at,
            cfg.pointer_radius,
            [
                GradientStop::new(0.0, theme.pointer_highlight),
                GradientStop::new(1.0, theme.pointer_highlight.with_alpha(0.0)),
            ],
        );
    }

    let nodes = engine.nodes();
    let reach = engine.connection_distance();
    for (i, j) in engine.edges() {
        let (a, b) = (nodes[i].position, nodes[j].position);
        let d = a.distance(b);
        let closeness = if reach > 0.0 {
            (1.0 - d / reach).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let alpha = cfg.edge_alpha_scale * closeness + cfg.edge_alpha_floor;
        out.line(a, b, cfg.edge_width, theme.edge.with_alpha(alpha));
    }

    for (n, p) in engine.particles().iter().enumerate() {
        let Some(at) = p.position(nodes) else {
            continue;
        };
        let pulse = particle_pulse(time_secs, n);
        out.radial_gradient(
            at,
            GLOW_SCALE * pulse,
            [
                GradientStop::new(0.0, theme.particle),
                GradientStop::new(1.0, theme.particle.with_alpha(0.0)),
            ],
        );
        out.fill_circle(at, pulse / 2.0, theme.particle_core);
    }

    for (i, node) in nodes.iter().enumerate() {
        draw_node(i, node, out);
    }
}

/// Size of particle `n` at `time_secs`. Neighbouring particles are phase-shifted.
pub fn particle_pulse(time_secs: f64, n: usize) -> f64 {
    PARTICLE_PULSE_AMPLITUDE * (time_secs * PI + n as f64 * PARTICLE_PULSE_STAGGER).sin()
        + PARTICLE_PULSE_BASE
}

fn draw_node(index: usize, node: &Node, out: &mut DisplayList) {
    let Some(ch) = parse_css_channels(&node.color) else {
        match ColorDef::parse(&node.color) {
            Ok(flat) => out.fill_circle(node.position, node.radius, flat),
            Err(err) => {
                tracing::trace!(node = index, color = %node.color, %err, "skipping node");
            }
        }
        return;
    };

    let base = ch.to_color_or_alpha(node.opacity);
    out.radial_gradient(
        node.position,
        GLOW_SCALE * node.radius,
        [
            GradientStop::new(0.0, base.brighten(40.0)),
            GradientStop::new(0.6, base),
            GradientStop::new(1.0, base.with_alpha(0.0)),
        ],
    );
    out.fill_circle(node.position, node.radius * 0.5, base.brighten(80.0));
}

#[cfg(test)]
#[path = "../../tests/unit/render/network.rs"]
mod tests;
