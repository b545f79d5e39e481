use std::time::Duration;

use crate::animation::ease::Ease;
use crate::config::MarkerConfig;
use crate::foundation::core::{Point, Rect};
use crate::paint::color::ColorDef;
use crate::perimeter::tracker::PerimeterTracker;
use crate::render::display::{DisplayList, GradientStop};

const PULSE_SCALE: (f64, f64) = (1.0, 1.2);
const PULSE_OPACITY: (f64, f64) = (0.7, 1.0);
/// Soft glow reaching past the dot edge, in logical pixels at scale 1.
const GLOW_REACH: f64 = 4.0;

/// Scale and opacity of a marker at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub scale: f64,
    pub opacity: f64,
}

/// A small dot travelling around the panel border while pulsing in size and opacity.
#[derive(Clone, Debug)]
pub struct BorderMarker {
    tracker: PerimeterTracker,
    color: ColorDef,
    size: f64,
    pulse_secs: f64,
    pulse_ease: Ease,
    elapsed_secs: f64,
}

impl BorderMarker {
    pub fn from_config(cfg: &MarkerConfig) -> Self {
        let lap = Duration::try_from_secs_f64(cfg.lap_secs).unwrap_or(Duration::ZERO);
        let tracker =
            PerimeterTracker::new(cfg.direction, lap).with_progress(cfg.start_progress);
        Self {
            tracker,
            color: cfg.color,
            size: cfg.size,
            pulse_secs: cfg.pulse_secs,
            pulse_ease: cfg.pulse_ease,
            elapsed_secs: 0.0,
        }
    }

    pub fn tracker(&self) -> &PerimeterTracker {
        &self.tracker
    }

    pub fn advance(&mut self, dt: Duration) {
        self.tracker.advance(dt);
        self.elapsed_secs += dt.as_secs_f64();
    }

    pub fn pulse(&self) -> Pulse {
        let phase = if self.pulse_secs > 0.0 {
            (self.elapsed_secs / self.pulse_secs).rem_euclid(1.0)
        } else {
            0.0
        };
        Pulse {
            scale: self.pulse_ease.ping_pong(PULSE_SCALE.0, PULSE_SCALE.1, phase),
            opacity: self.pulse_ease.ping_pong(PULSE_OPACITY.0, PULSE_OPACITY.1, phase),
        }
    }

    /// Centre of the dot for the panel's current rectangle.
    pub fn position(&self, panel: Rect) -> Point {
        self.tracker.position(panel)
    }

    pub fn draw(&self, panel: Rect, glow: ColorDef, out: &mut DisplayList) {
        let center = self.position(panel);
        let Pulse { scale, opacity } = self.pulse();
        let radius = self.size * 0.5 * scale;
        let reach = radius + GLOW_REACH * scale;
        let glow = glow.fade(opacity);

        out.radial_gradient(
            center,
            reach,
            [
                GradientStop::new(0.0, glow),
                GradientStop::new(radius / reach, glow),
                GradientStop::new(1.0, glow.with_alpha(0.0)),
            ],
        );
        out.fill_circle(center, radius, self.color.fade(opacity));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/perimeter/marker.rs"]
mod tests;
