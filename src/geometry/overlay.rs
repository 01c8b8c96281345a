use crate::foundation::core::{Point, Rgb8, Vec2};
use crate::geometry::primitive::Circle;

/// Horizontal placement of a text label relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Text starts at the position.
    #[default]
    Start,
    /// Text is centered on the position.
    Center,
}

/// Positioned text. May span several lines separated by `\n`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextLabel {
    /// Anchor point in domain units (top of the first line).
    pub position: Point,
    /// Text content.
    pub text: String,
    /// Text color.
    pub color: Rgb8,
    /// Font size in output pixels.
    pub size_px: f32,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
}

/// Straight arrow with a triangular head whose tip sits at `end`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Arrow {
    /// Tail in domain units.
    pub start: Point,
    /// Tip in domain units.
    pub end: Point,
    /// Color of shaft and head.
    pub color: Rgb8,
    /// Shaft width in output pixels.
    pub width: f64,
    /// Opacity in `[0,1]`.
    pub alpha: f64,
    /// Head base width in domain units.
    pub head_width: f64,
    /// Head length in domain units.
    pub head_length: f64,
}

impl Arrow {
    /// Shaft end point (where the head starts). Equals `start` when the head is longer than the
    /// whole arrow.
    pub fn shaft_end(&self) -> Point {
        let v = self.end - self.start;
        let len = v.hypot();
        if len <= self.head_length || len == 0.0 {
            return self.start;
        }
        self.end - v * (self.head_length / len)
    }

    /// Head triangle `[tip, left, right]`, or `None` for a zero-length arrow.
    pub fn head(&self) -> Option<[Point; 3]> {
        let v = self.end - self.start;
        let len = v.hypot();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        let dir = v / len;
        let base = self.end - dir * self.head_length.min(len);
        let half = Vec2::new(-dir.y, dir.x) * (self.head_width * 0.5);
        Some([self.end, base + half, base - half])
    }
}

/// Annotation drawn on top of the generated primitives.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    /// Text label.
    Text(TextLabel),
    /// Wind arrow.
    Arrow(Arrow),
    /// Legend color swatch.
    Swatch(Circle),
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/overlay.rs"]
mod tests;
