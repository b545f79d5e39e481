use crate::foundation::core::Canvas;
use crate::foundation::error::NetglowResult;
use crate::render::display::DisplayList;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. The `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A 0×0 frame, produced while the surface has no area.
    pub fn empty() -> Self {
        Self {
            premultiplied: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A rasterizer for [`DisplayList`]s.
pub trait RenderBackend {
    /// Size the target to `physical` pixels; display lists are in logical units scaled by
    /// `scale`.
    fn resize(&mut self, physical: Canvas, scale: f64) -> NetglowResult<()>;

    /// Rasterize `list` and return the finished frame.
    fn render(&mut self, list: &DisplayList) -> NetglowResult<&FrameRGBA>;

    /// Most recent successfully rendered frame.
    fn frame(&self) -> &FrameRGBA;
}

/// Available backend kinds.
///
/// - `Cpu` is always available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new()),
    }
}
