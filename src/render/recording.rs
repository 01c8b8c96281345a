use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::error::{AirglyphError, AirglyphResult};
use crate::geometry::overlay::TextLabel;
use crate::render::backend::Renderer;

/// One captured renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// `begin_frame`.
    Begin {
        /// Frame background.
        background: Rgb8,
        /// Visible domain.
        domain: Rect,
    },
    /// `fill_circle`.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill.
        color: Rgb8,
        /// Opacity.
        alpha: f64,
    },
    /// `fill_polygon`.
    Polygon {
        /// Vertices as drawn (already rotated).
        vertices: Vec<Point>,
        /// Fill.
        color: Rgb8,
        /// Opacity.
        alpha: f64,
    },
    /// `draw_line`.
    Line {
        /// Start.
        start: Point,
        /// End.
        end: Point,
        /// Width in pixels.
        width_px: f64,
        /// Stroke.
        color: Rgb8,
        /// Opacity.
        alpha: f64,
    },
    /// `draw_text`.
    Text(TextLabel),
}

/// Renderer that keeps every call, grouped per presented frame.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    current: Vec<DrawCall>,
    frames: Vec<Vec<DrawCall>>,
    released: bool,
    fail_at_frame: Option<usize>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `present` fail on the frame with this zero-based index.
    pub fn failing_at(frame: usize) -> Self {
        Self {
            fail_at_frame: Some(frame),
            ..Self::default()
        }
    }

    /// Presented frames, oldest first.
    pub fn frames(&self) -> &[Vec<DrawCall>] {
        &self.frames
    }

    /// Whether `release` was called.
    pub fn released(&self) -> bool {
        self.released
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, background: Rgb8, domain: Rect) -> AirglyphResult<()> {
        self.current.clear();
        self.current.push(DrawCall::Begin { background, domain });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        color: Rgb8,
        alpha: f64,
    ) -> AirglyphResult<()> {
        self.current.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha,
        });
        Ok(())
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb8, alpha: f64) -> AirglyphResult<()> {
        self.current.push(DrawCall::Polygon {
            vertices: vertices.to_vec(),
            color,
            alpha,
        });
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
        self.current.push(DrawCall::Line {
            start,
            end,
            width_px,
            color,
            alpha,
        });
        Ok(())
    }

    fn draw_text(&mut self, label: &TextLabel) -> AirglyphResult<()> {
        self.current.push(DrawCall::Text(label.clone()));
        Ok(())
    }

    fn present(&mut self) -> AirglyphResult<()> {
        if self.fail_at_frame == Some(self.frames.len()) {
            return Err(AirglyphError::render(format!(
                "present failed on frame {}",
                self.frames.len()
            )));
        }
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn release(&mut self) -> AirglyphResult<()> {
        self.released = true;
        Ok(())
    }
}
