use std::time::Duration;

use crate::foundation::core::{Point, Rect};

/// Rotational direction around the rectangle. `Forward` walks top → right → bottom → left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    #[serde(alias = "clockwise")]
    Forward,
    #[serde(alias = "counterclockwise")]
    Reverse,
}

/// Normalized progress around a rectangle's perimeter.
#[derive(Clone, Debug, PartialEq)]
pub struct PerimeterTracker {
    progress: f64,
    direction: Direction,
    lap: Duration,
}

impl PerimeterTracker {
    pub fn new(direction: Direction, lap: Duration) -> Self {
        Self {
            progress: 0.0,
            direction,
            lap,
        }
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = wrap_unit(progress);
        self
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move along the perimeter by `dt`; one full lap takes `lap`.
    pub fn advance(&mut self, dt: Duration) {
        let lap = self.lap.as_secs_f64();
        if lap <= 0.0 {
            return;
        }
        let increment = dt.as_secs_f64() / lap;
        self.progress = match self.direction {
            Direction::Forward => wrap_unit(self.progress + increment),
            Direction::Reverse => wrap_unit(self.progress - increment + 1.0),
        };
    }

    /// Current point on the boundary of `rect`, measured fresh by the caller every frame.
    pub fn position(&self, rect: Rect) -> Point {
        let local = position_for(self.progress, rect.width(), rect.height());
        Point::new(rect.x0 + local.x, rect.y0 + local.y)
    }
}

/// Map progress to a point on the boundary of a `width × height` rectangle anchored at the
/// origin. Segments, in order: top (left to right), right (top to bottom), bottom (right to
/// left), left (bottom to top). Periodic with period 1.
pub fn position_for(progress: f64, width: f64, height: f64) -> Point {
    let perimeter = 2.0 * (width + height);
    if !(perimeter.is_finite() && perimeter > 0.0) {
        return Point::ORIGIN;
    }
    let d = wrap_unit(progress) * perimeter;

    if d < width {
        Point::new(d, 0.0)
    } else if d < width + height {
        Point::new(width, d - width)
    } else if d < 2.0 * width + height {
        Point::new(width - (d - width - height), height)
    } else {
        Point::new(0.0, height - (d - 2.0 * width - height))
    }
}

fn wrap_unit(p: f64) -> f64 {
    if !p.is_finite() {
        return 0.0;
    }
    let w = p.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}

#[cfg(test)]
#[path = "../../tests/unit/perimeter/tracker.rs"]
mod tests;
