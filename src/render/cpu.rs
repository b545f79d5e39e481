use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape;
use smallvec::SmallVec;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{NetglowError, NetglowResult};
use crate::paint::color::ColorDef;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::display::{DisplayList, DrawOp, GradientStop};

const CIRCLE_TOLERANCE: f64 = 0.1;
const SPRITE_CACHE_LIMIT: usize = 512;
/// Gradient sprites larger than this (in physical pixels per side) are clamped.
const MAX_SPRITE_SIDE: u32 = 4096;

/// CPU raster backend powered by `vello_cpu`.
///
/// Radial gradients are rasterized once into premultiplied sprites and reused as image paints.
pub struct CpuBackend {
    surface: Option<CpuSurface>,
    scale: f64,
    ctx: Option<vello_cpu::RenderContext>,
    sprite_cache: HashMap<SpriteKey, vello_cpu::Image>,
    frame: FrameRGBA,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SpriteKey {
    side: u32,
    stops: SmallVec<[(u16, [u8; 4]); 3]>,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            surface: None,
            scale: 1.0,
            ctx: None,
            sprite_cache: HashMap::new(),
            frame: FrameRGBA::empty(),
        }
    }

    pub fn cached_sprites(&self) -> usize {
        self.sprite_cache.len()
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> NetglowResult<R>,
    ) -> NetglowResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> NetglowResult<()> {
        let scale = vello_cpu::kurbo::Affine::scale(self.scale);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::FillRect { rect, color } => {
                ctx.set_transform(scale);
                ctx.set_paint(paint_color(*color));
                ctx.fill_rect(&rect_to_cpu(*rect));
            }
            DrawOp::FillCircle {
                center,
                radius,
                color,
            } => {
                if !(*radius > 0.0) {
                    return Ok(());
                }
                let path = kurbo::Circle::new(*center, *radius).to_path(CIRCLE_TOLERANCE);
                ctx.set_transform(scale);
                ctx.set_paint(paint_color(*color));
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
            DrawOp::Line {
                from,
                to,
                width,
                color,
            } => {
                let Some(quad) = line_quad(*from, *to, *width) else {
                    return Ok(());
                };
                ctx.set_transform(scale);
                ctx.set_paint(paint_color(*color));
                ctx.fill_path(&bezpath_to_cpu(&quad));
            }
            DrawOp::RadialGradient {
                center,
                radius,
                stops,
            } => {
                if !(*radius > 0.0) || stops.is_empty() {
                    return Ok(());
                }
                let diameter_px = 2.0 * radius * self.scale;
                let side = (diameter_px.ceil() as u32).clamp(1, MAX_SPRITE_SIDE);
                let sprite = self.gradient_sprite(side, stops)?;

                // Map sprite pixels onto the physical-space disc bounding box.
                let origin = Point::new(center.x - radius, center.y - radius);
                let transform = vello_cpu::kurbo::Affine::translate((
                    origin.x * self.scale,
                    origin.y * self.scale,
                )) * vello_cpu::kurbo::Affine::scale(diameter_px / f64::from(side));
                ctx.set_transform(transform);
                ctx.set_paint(sprite);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(side),
                    f64::from(side),
                ));
            }
        }
        Ok(())
    }

    fn gradient_sprite(
        &mut self,
        side: u32,
        stops: &[GradientStop],
    ) -> NetglowResult<vello_cpu::Image> {
        let key = SpriteKey {
            side,
            stops: stops
                .iter()
                .map(|s| {
                    (
                        (s.offset.clamp(0.0, 1.0) * 1000.0).round() as u16,
                        s.color.to_rgba8(),
                    )
                })
                .collect(),
        };
        if let Some(img) = self.sprite_cache.get(&key).cloned() {
            return Ok(img);
        }
        if self.sprite_cache.len() >= SPRITE_CACHE_LIMIT {
            tracing::trace!(entries = self.sprite_cache.len(), "gradient sprite cache reset");
            self.sprite_cache.clear();
        }

        let bytes = rasterize_radial(side, stops);
        let pixmap = pixmap_from_premul_bytes(&bytes, side, side)?;
        let img = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.sprite_cache.insert(key, img.clone());
        Ok(img)
    }
}

impl RenderBackend for CpuBackend {
    fn resize(&mut self, physical: Canvas, scale: f64) -> NetglowResult<()> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(NetglowError::surface("render scale must be finite and > 0"));
        }
        if scale != self.scale {
            self.sprite_cache.clear();
        }
        self.scale = scale;

        if physical.is_empty() {
            self.surface = None;
            self.frame = FrameRGBA::empty();
            return Ok(());
        }
        let width: u16 = physical
            .width
            .try_into()
            .map_err(|_| NetglowError::surface("surface width exceeds u16"))?;
        let height: u16 = physical
            .height
            .try_into()
            .map_err(|_| NetglowError::surface("surface height exceeds u16"))?;

        let unchanged = self
            .surface
            .as_ref()
            .is_some_and(|s| s.width == width && s.height == height);
        if !unchanged {
            self.surface = Some(CpuSurface {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
            });
        }
        Ok(())
    }

    fn render(&mut self, list: &DisplayList) -> NetglowResult<&FrameRGBA> {
        let Some(mut surface) = self.surface.take() else {
            self.frame = FrameRGBA::empty();
            return Ok(&self.frame);
        };

        clear_pixmap_to_transparent(&mut surface.pixmap);
        let result = self.with_ctx_mut(surface.width, surface.height, |backend, ctx| {
            for op in list.ops() {
                backend.draw_op(ctx, op)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut surface.pixmap);
            Ok(())
        });

        if result.is_ok() {
            self.frame.width = u32::from(surface.width);
            self.frame.height = u32::from(surface.height);
            self.frame.premultiplied = true;
            self.frame.data.clear();
            self.frame
                .data
                .extend_from_slice(surface.pixmap.data_as_u8_slice());
        }
        self.surface = Some(surface);
        result?;
        Ok(&self.frame)
    }

    fn frame(&self) -> &FrameRGBA {
        &self.frame
    }
}

/// Premultiplied RGBA8 disc of `side × side` pixels shaded by `stops` from centre to rim.
/// Pixels outside the disc are transparent.
fn rasterize_radial(side: u32, stops: &[GradientStop]) -> Vec<u8> {
    let n = side as usize;
    let mut bytes = vec![0u8; n.saturating_mul(n).saturating_mul(4)];
    let half = f64::from(side) / 2.0;
    for y in 0..n {
        for x in 0..n {
            let dx = (x as f64 + 0.5) - half;
            let dy = (y as f64 + 0.5) - half;
            let t = (dx * dx + dy * dy).sqrt() / half;
            if t > 1.0 {
                continue;
            }
            let idx = (y * n + x) * 4;
            bytes[idx..idx + 4].copy_from_slice(&sample_stops(stops, t).to_rgba8_premul());
        }
    }
    bytes
}

/// Colour at offset `t`, interpolating straight channels between the surrounding stops.
fn sample_stops(stops: &[GradientStop], t: f64) -> ColorDef {
    let Some(first) = stops.first() else {
        return ColorDef::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    stops.last().map_or(ColorDef::TRANSPARENT, |s| s.color)
}

/// Filled rectangle standing in for a stroked segment of `width`.
fn line_quad(from: Point, to: Point, width: f64) -> Option<kurbo::BezPath> {
    let dir = to - from;
    let len = dir.hypot();
    if !(len > 0.0 && width > 0.0) {
        return None;
    }
    let n = kurbo::Vec2::new(-dir.y, dir.x) * (width * 0.5 / len);
    let mut path = kurbo::BezPath::new();
    path.move_to(from + n);
    path.line_to(to + n);
    path.line_to(to - n);
    path.line_to(from - n);
    path.close_path();
    Some(path)
}

fn paint_color(c: ColorDef) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> NetglowResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| NetglowError::render("sprite width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| NetglowError::render("sprite height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(NetglowError::render("sprite byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
