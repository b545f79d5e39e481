use crate::foundation::core::{Canvas, Size};
use crate::foundation::error::{NetglowError, NetglowResult};

/// Largest physical side the CPU backend can hold.
pub const MAX_PHYSICAL_SIDE: u32 = u16::MAX as u32;

/// Logical size plus the device-pixel buffer backing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub logical: Size,
    pub physical: Canvas,
}

/// Tracks viewport size changes and maps them to physical pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeWatcher {
    device_pixel_ratio: f64,
    current: SurfaceSize,
}

impl ResizeWatcher {
    pub fn new(device_pixel_ratio: f64) -> NetglowResult<Self> {
        if !(device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0) {
            return Err(NetglowError::surface(format!(
                "device pixel ratio must be finite and > 0, got {device_pixel_ratio}"
            )));
        }
        Ok(Self {
            device_pixel_ratio,
            current: SurfaceSize::default(),
        })
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub fn current(&self) -> SurfaceSize {
        self.current
    }

    /// Record a new logical size. Negative or non-finite sides count as zero.
    pub fn resize(&mut self, width: f64, height: f64) -> NetglowResult<SurfaceSize> {
        let logical = Size::new(sanitize(width), sanitize(height));
        let physical = Canvas {
            width: self.to_physical(logical.width)?,
            height: self.to_physical(logical.height)?,
        };
        self.current = SurfaceSize { logical, physical };
        tracing::debug!(
            width = logical.width,
            height = logical.height,
            physical_width = physical.width,
            physical_height = physical.height,
            "surface resized"
        );
        Ok(self.current)
    }

    fn to_physical(&self, side: f64) -> NetglowResult<u32> {
        let px = (side * self.device_pixel_ratio).round();
        if px > f64::from(MAX_PHYSICAL_SIDE) {
            return Err(NetglowError::surface(format!(
                "physical side {px} exceeds {MAX_PHYSICAL_SIDE}"
            )));
        }
        Ok(px as u32)
    }
}

fn sanitize(side: f64) -> f64 {
    if side.is_finite() && side > 0.0 { side } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/input/resize.rs"]
mod tests;
