use kurbo::Shape;

use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgb8, Vec2};
use crate::foundation::error::{AirglyphError, AirglyphResult};
use crate::geometry::overlay::{TextAnchor, TextLabel};
use crate::render::backend::{FrameRGBA, Renderer};
use crate::render::sink::{FrameSink, SinkConfig};
use crate::render::text::{TextBrush, TextLayoutEngine};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Options for [`CpuRenderer`].
#[derive(Clone, Debug, Default)]
pub struct CpuRendererOpts {
    /// Output size.
    pub canvas: Canvas,
    /// Font file bytes for labels. Without a font, text calls are no-ops.
    pub font: Option<Vec<u8>>,
}

/// Map `domain` (y up) onto `canvas` (y down), uniformly scaled and centered.
pub fn world_to_pixel(domain: Rect, canvas: Canvas) -> Affine {
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let s = (w / domain.width()).min(h / domain.height());
    let c = domain.center();
    Affine::new([s, 0.0, 0.0, -s, w * 0.5 - c.x * s, h * 0.5 + c.y * s])
}

/// `vello_cpu` rasterizer. Every presented frame goes to the sink as premultiplied RGBA8.
pub struct CpuRenderer<S: FrameSink> {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    canvas: Canvas,
    view: Affine,
    px_per_unit: f64,
    text: Option<(TextLayoutEngine, vello_cpu::peniko::FontData)>,
    sink: S,
    next_index: u64,
    released: bool,
}

impl<S: FrameSink> CpuRenderer<S> {
    /// Allocate the surface and start the sink.
    pub fn new(opts: CpuRendererOpts, mut sink: S) -> AirglyphResult<Self> {
        opts.canvas.validate()?;
        let (w, h) = surface_size(opts.canvas)?;

        let text = match opts.font {
            Some(bytes) => {
                let engine = TextLayoutEngine::new(&bytes)?;
                tracing::debug!(family = engine.family_name(), "label font registered");
                let font =
                    vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
                Some((engine, font))
            }
            None => {
                tracing::debug!("no font configured, labels will be skipped");
                None
            }
        };

        sink.begin(SinkConfig {
            width: opts.canvas.width,
            height: opts.canvas.height,
        })?;

        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            canvas: opts.canvas,
            view: Affine::IDENTITY,
            px_per_unit: 1.0,
            text,
            sink,
            next_index: 0,
            released: false,
        })
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the renderer and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn set_color(&mut self, color: Rgb8, alpha: f64) {
        let [r, g, b, a] = color.with_alpha(alpha);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }
}

fn surface_size(canvas: Canvas) -> AirglyphResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| AirglyphError::render(format!("width exceeds u16: {}", canvas.width)))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| AirglyphError::render(format!("height exceeds u16: {}", canvas.height)))?;
    Ok((w, h))
}

impl<S: FrameSink> Renderer for CpuRenderer<S> {
    fn begin_frame(&mut self, background: Rgb8, domain: Rect) -> AirglyphResult<()> {
        if domain.width() <= 0.0 || domain.height() <= 0.0 {
            return Err(AirglyphError::render("frame domain must have a positive area"));
        }
        self.view = world_to_pixel(domain, self.canvas);
        self.px_per_unit = self.view.as_coeffs()[0];

        self.ctx.reset();
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(background, 1.0);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.canvas.width),
            f64::from(self.canvas.height),
        ));
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Rgb8,
        alpha: f64,
    ) -> AirglyphResult<()> {
        if radius.is_nan() || radius <= 0.0 {
            return Ok(());
        }
        let path = kurbo::Circle::new(center, radius).to_path(CIRCLE_TOLERANCE / self.px_per_unit);
        self.ctx.set_transform(affine_to_cpu(self.view));
        self.set_color(color, alpha);
        self.ctx.fill_path(&bezpath_to_cpu(&path));
        Ok(())
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb8, alpha: f64) -> AirglyphResult<()> {
        if vertices.len() < 3 {
            return Ok(());
        }
        self.ctx.set_transform(affine_to_cpu(self.view));
        self.set_color(color, alpha);
        self.ctx.fill_path(&polygon_to_cpu(vertices));
        Ok(())
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        width_px: f64,
        color: Rgb8,
        alpha: f64,
    ) -> AirglyphResult<()> {
        // stroked as a quad in pixel space so the width stays in pixels
        let (a, b) = (self.view * start, self.view * end);
        let d = b - a;
        let len = d.hypot();
        if len == 0.0 || !len.is_finite() || width_px.is_nan() || width_px <= 0.0 {
            return Ok(());
        }
        let n = Vec2::new(-d.y, d.x) * (width_px * 0.5 / len);
        let quad = [a + n, b + n, b - n, a - n];

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.set_color(color, alpha);
        self.ctx.fill_path(&polygon_to_cpu(&quad));
        Ok(())
    }

    fn draw_text(&mut self, label: &TextLabel) -> AirglyphResult<()> {
        let Some((engine, font)) = self.text.as_mut() else {
            tracing::trace!(text = %label.text, "label skipped, no font");
            return Ok(());
        };
        if label.text.is_empty() {
            return Ok(());
        }

        let layout = engine.layout(&label.text, label.size_px, TextBrush::new(label.color, 1.0))?;
        let anchor = self.view * label.position;
        let dx = match label.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Center => -f64::from(layout.width()) * 0.5,
        };
        self.ctx.set_transform(affine_to_cpu(Affine::translate((
            anchor.x + dx,
            anchor.y,
        ))));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn present(&mut self) -> AirglyphResult<()> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        let frame = FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        let idx = self.next_index;
        self.next_index += 1;
        self.sink.push_frame(idx, &frame)
    }

    fn release(&mut self) -> AirglyphResult<()> {
        if std::mem::replace(&mut self.released, true) {
            return Ok(());
        }
        self.sink.end()
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn polygon_to_cpu(vertices: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut it = vertices.iter();
    if let Some(p) = it.next() {
        out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y));
    }
    for p in it {
        out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y));
    }
    out.close_path();
    out
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
