use crate::compose::composer::Composition;
use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::AirglyphResult;
use crate::geometry::overlay::{Overlay, TextLabel};
use crate::geometry::primitive::Primitive;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Drawing capability the scheduler drives.
///
/// Coordinates are domain units with y pointing up; the renderer maps `domain` onto its output.
/// Calls for one frame are bracketed by [`Renderer::begin_frame`] and [`Renderer::present`].
/// Any error is fatal for the run.
pub trait Renderer {
    /// Start a frame filled with `background`, showing `domain`.
    fn begin_frame(&mut self, background: Rgb8, domain: Rect) -> AirglyphResult<()>;
    /// Filled circle.
    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Rgb8,
        alpha: f64,
    ) -> AirglyphResult<()>;
    /// Filled polygon with any number of vertices.
    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb8, alpha: f64) -> AirglyphResult<()>;
    /// Straight line; `width_px` is in output pixels.
    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        width_px: f64,
        color: Rgb8,
        alpha: f64,
    ) -> AirglyphResult<()>;
    /// Positioned text.
    fn draw_text(&mut self, label: &TextLabel) -> AirglyphResult<()>;
    /// Finish and flush the current frame.
    fn present(&mut self) -> AirglyphResult<()>;
    /// Release backend resources. Called once when the run stops.
    fn release(&mut self) -> AirglyphResult<()> {
        Ok(())
    }
}

/// Paint `comp` through `renderer`: primitives first, overlays on top, then present.
///
/// Rotations are applied here from the stored angles. With a halo configured, each circle is
/// followed by its white highlight and its outer ring.
pub fn render_composition<R: Renderer + ?Sized>(
    renderer: &mut R,
    comp: &Composition,
) -> AirglyphResult<()> {
    renderer.begin_frame(comp.background, comp.domain)?;

    for p in &comp.primitives {
        match p {
            Primitive::Circle(c) => {
                renderer.fill_circle(c.center, c.radius, c.color, c.alpha)?;
                if let Some(h) = &comp.halo {
                    renderer.fill_circle(
                        c.center,
                        c.radius * h.inner_ratio,
                        Rgb8::WHITE,
                        h.inner_alpha,
                    )?;
                    renderer.fill_circle(
                        c.center,
                        c.radius * h.outer_ratio,
                        c.color,
                        h.outer_alpha,
                    )?;
                }
            }
            Primitive::Triangle(t) => renderer.fill_polygon(&t.outline(), t.color, t.alpha)?,
            Primitive::Rectangle(r) => renderer.fill_polygon(&r.outline(), r.color, r.alpha)?,
            Primitive::Line(l) => renderer.draw_line(l.start, l.end, l.width, l.color, l.alpha)?,
            Primitive::Polygon(g) => renderer.fill_polygon(&g.outline(), g.color, g.alpha)?,
        }
    }

    for o in &comp.overlays {
        match o {
            Overlay::Text(t) => renderer.draw_text(t)?,
            Overlay::Arrow(a) => {
                renderer.draw_line(a.start, a.shaft_end(), a.width, a.color, a.alpha)?;
                if let Some(head) = a.head() {
                    renderer.fill_polygon(&head, a.color, a.alpha)?;
                }
            }
            Overlay::Swatch(c) => renderer.fill_circle(c.center, c.radius, c.color, c.alpha)?,
        }
    }

    renderer.present()
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
