//! Per-tick motion. Every increment is multiplied by `k`, the elapsed time measured in reference
//! ticks, so the animation runs at the same speed whatever the host's frame rate.

use crate::config::NetworkConfig;
use crate::foundation::core::Size;
use crate::foundation::rng::Rng64;
use crate::scene::node::Node;
use crate::scene::particle::Particle;
use crate::scene::pointer::PointerState;

/// Convert an elapsed duration into reference ticks, clamped to `max_ratio`.
pub fn step_ratio(elapsed_secs: f64, reference_interval_secs: f64, max_ratio: f64) -> f64 {
    if !(elapsed_secs.is_finite() && elapsed_secs > 0.0) || reference_interval_secs <= 0.0 {
        return 0.0;
    }
    (elapsed_secs / reference_interval_secs).min(max_ratio)
}

/// Move particles along their edges, rewiring those that arrive.
pub fn advance_particles(particles: &mut [Particle], nodes: &[Node], k: f64, rng: &mut Rng64) {
    for p in particles {
        p.progress += p.speed / 100.0 * k;
        if p.progress < 1.0 {
            continue;
        }
        rewire(p, nodes, rng);
    }
}

/// Hand an arrived particle to the next edge, starting from the node it reached.
///
/// The next target is a random neighbor of that node, or any other node when it has none.
pub fn rewire(p: &mut Particle, nodes: &[Node], rng: &mut Rng64) {
    let source = p.target;
    p.source = source;
    p.progress = 0.0;
    let links = match nodes.get(source) {
        Some(n) => &n.neighbors,
        None => return,
    };
    p.target = if links.is_empty() {
        if nodes.len() < 2 {
            return;
        }
        rng.index_except(nodes.len(), source)
    } else {
        links[rng.index(links.len())]
    };
}

/// Integrate every node for one tick of `k` reference ticks inside a `bounds` surface.
pub fn advance_nodes(
    nodes: &mut [Node],
    pointer: &PointerState,
    bounds: Size,
    cfg: &NetworkConfig,
    k: f64,
    rng: &mut Rng64,
) {
    let damping = cfg.damping.powf(k);
    for n in nodes {
        n.position += n.velocity * k;

        if let Some(at) = pointer.active_position() {
            let offset = at - n.position;
            let d = offset.hypot();
            if d > 0.0 && d < cfg.pointer_radius {
                let force = (1.0 - d / cfg.pointer_radius) * cfg.repulsion;
                n.velocity -= offset * (force / d * k);
            }
        }

        n.velocity.x += rng.centered(cfg.jitter) * k;
        n.velocity.y += rng.centered(cfg.jitter) * k;
        n.velocity *= damping;

        if n.position.x < 0.0 || n.position.x > bounds.width {
            n.velocity.x = -n.velocity.x;
            n.position.x = n.position.x.clamp(0.0, bounds.width);
        }
        if n.position.y < 0.0 || n.position.y > bounds.height {
            n.velocity.y = -n.velocity.y;
            n.position.y = n.position.y.clamp(0.0, bounds.height);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/network/physics.rs"]
mod tests;
