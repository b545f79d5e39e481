use crate::foundation::core::Point;
use crate::scene::node::Node;

/// Light travelling from `source` to `target`. `progress` stays in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub progress: f64,
    /// Progress gained per reference tick, in percent.
    pub speed: f64,
    pub source: usize,
    pub target: usize,
}

impl Particle {
    /// Interpolated position between the current endpoints, or `None` if an index is stale.
    pub fn position(&self, nodes: &[Node]) -> Option<Point> {
        let a = nodes.get(self.source)?.position;
        let b = nodes.get(self.target)?.position;
        Some(a.lerp(b, self.progress))
    }
}
