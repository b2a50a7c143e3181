use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Canvas, Point};
use crate::foundation::error::{OrreryError, OrreryResult};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::text::{TextKey, TextRasterizer, system_fontdb};
use crate::scene::model::{DisplayList, DrawNode, Shape};

const TOLERANCE: f64 = 0.1;

/// CPU rasterizer on `vello_cpu`.
///
/// Display lists are laid out in the 1920x1080 design space and scaled to the backend canvas.
/// The render context and text sprites are reused across frames.
pub struct CpuBackend {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
    text: TextRasterizer,
}

impl CpuBackend {
    pub fn new(canvas: Canvas) -> OrreryResult<Self> {
        let dim = |v: u32, what: &str| -> OrreryResult<u16> {
            u16::try_from(v).ok().filter(|&d| d > 0).ok_or_else(|| {
                OrreryError::validation(format!("canvas {what} must be in 1..=65535"))
            })
        };
        Ok(Self {
            canvas,
            width: dim(canvas.width, "width")?,
            height: dim(canvas.height, "height")?,
            ctx: None,
            text: TextRasterizer::new(system_fontdb()),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Design space to pixel space.
    pub fn design_transform(&self) -> Affine {
        Affine::scale_non_uniform(
            f64::from(self.canvas.width) / f64::from(Canvas::DESIGN.width),
            f64::from(self.canvas.height) / f64::from(Canvas::DESIGN.height),
        )
    }

    fn draw_node(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        node: &DrawNode,
        base: Affine,
    ) -> OrreryResult<()> {
        let transform = base * node.transform;
        if let Shape::Text {
            text,
            origin,
            size,
            bold,
            anchor,
        } = &node.shape
        {
            if text.is_empty() || *size <= 0.0 {
                return Ok(());
            }
            let scale = raster_scale(transform);
            let key = TextKey::new(text, *size, *bold, *anchor, node.fill, scale);
            let sprite = self.text.sprite(&key)?;
            let placed = transform
                * Affine::translate(origin.to_vec2() + sprite.offset)
                * Affine::scale(1.0 / key.scale());
            ctx.set_transform(affine_to_cpu(placed));
            ctx.set_paint(sprite.image.clone());
            let layered = node.opacity < 1.0;
            if layered {
                ctx.push_opacity_layer(node.opacity);
            }
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(sprite.width),
                f64::from(sprite.height),
            ));
            if layered {
                ctx.pop_layer();
            }
            return Ok(());
        }

        let Some(path) = shape_path(&node.shape) else {
            return Ok(());
        };
        let c = node.fill;
        let alpha = (node.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
        if alpha == 0 {
            return Ok(());
        }
        ctx.set_transform(affine_to_cpu(transform));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, alpha));
        ctx.fill_path(&bezpath_to_cpu(&path));
        Ok(())
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "trace", skip_all, fields(nodes = list.len()))]
    fn render(&mut self, list: &DisplayList) -> OrreryResult<FrameRGBA> {
        let (w, h) = (self.width, self.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let bg = list.background;
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(w),
            f64::from(h),
        ));

        let base = self.design_transform();
        for node in list.nodes() {
            self.draw_node(&mut ctx, node, base)?;
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Outline of a filled shape in design space; `None` for degenerate shapes and text.
pub(crate) fn shape_path(shape: &Shape) -> Option<BezPath> {
    match shape {
        Shape::Circle { center, radius } => {
            (*radius > 0.0).then(|| kurbo::Circle::new(*center, *radius).to_path(TOLERANCE))
        }
        Shape::Ellipse { center, rx, ry } => (*rx > 0.0 && *ry > 0.0)
            .then(|| kurbo::Ellipse::new(*center, (*rx, *ry), 0.0).to_path(TOLERANCE)),
        Shape::Ring {
            center,
            rx,
            ry,
            width,
        } => (*rx > 0.0 && *ry > 0.0 && *width > 0.0).then(|| {
            kurbo::stroke(
                kurbo::Ellipse::new(*center, (*rx, *ry), 0.0).path_elements(TOLERANCE),
                &kurbo::Stroke::new(*width),
                &kurbo::StrokeOpts::default(),
                TOLERANCE,
            )
        }),
        Shape::Rect {
            rect,
            corner_radius,
        } => {
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                None
            } else if *corner_radius > 0.0 {
                Some(kurbo::RoundedRect::from_rect(*rect, *corner_radius).to_path(TOLERANCE))
            } else {
                Some(rect.to_path(TOLERANCE))
            }
        }
        Shape::Polygon { points } => {
            let (first, rest) = points.split_first()?;
            if rest.len() < 2 {
                return None;
            }
            let mut path = BezPath::new();
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            path.close_path();
            Some(path)
        }
        Shape::Line { from, to, width } => (*width > 0.0 && from != to).then(|| {
            kurbo::stroke(
                kurbo::Line::new(*from, *to).path_elements(TOLERANCE),
                &kurbo::Stroke::new(*width).with_caps(kurbo::Cap::Round),
                &kurbo::StrokeOpts::default(),
                TOLERANCE,
            )
        }),
        Shape::Text { .. } => None,
    }
}

/// Uniform scale a transform applies to areas, used to pick a sharp text raster size.
fn raster_scale(t: Affine) -> f64 {
    let s = t.determinant().abs().sqrt();
    if s.is_finite() && s > 0.0 { s } else { 1.0 }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
