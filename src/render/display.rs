//! Backend-agnostic draw operations in logical coordinates.

use smallvec::SmallVec;

use crate::foundation::core::{Point, Rect};
use crate::paint::color::ColorDef;

/// One colour stop of a radial gradient. `offset` is in `[0, 1]` from the centre outwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: ColorDef,
}

impl GradientStop {
    pub fn new(offset: f64, color: ColorDef) -> Self {
        Self { offset, color }
    }
}

/// Gradients in this crate use two or three stops.
pub type GradientStops = SmallVec<[GradientStop; 3]>;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: ColorDef,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: ColorDef,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: ColorDef,
    },
    /// Disc of `radius` around `center` filled with a radial gradient.
    RadialGradient {
        center: Point,
        radius: f64,
        stops: GradientStops,
    },
}

/// Ordered draw operations for one frame. Later ops paint over earlier ones.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all ops, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: ColorDef) {
        self.push(DrawOp::FillRect { rect, color });
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: ColorDef) {
        self.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, width: f64, color: ColorDef) {
        self.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn radial_gradient(
        &mut self,
        center: Point,
        radius: f64,
        stops: impl IntoIterator<Item = GradientStop>,
    ) {
        self.push(DrawOp::RadialGradient {
            center,
            radius,
            stops: stops.into_iter().collect(),
        });
    }
}
