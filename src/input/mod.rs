//! Host input: pointer and touch samples, viewport resizes, panel moves.

use crate::foundation::core::{Point, Rect};

/// Pointer and touch tracking.
pub mod pointer;
/// Viewport size and pixel ratio tracking.
pub mod resize;

/// Everything a host may forward to a mounted backdrop. Coordinates are logical pixels relative
/// to the surface origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    TouchMove { touches: Vec<Point> },
    TouchEnd,
    Resize { width: f64, height: f64 },
    /// New bounds of the panel the border markers travel around.
    PanelMoved(Rect),
}
