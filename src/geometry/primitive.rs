use smallvec::SmallVec;

use crate::foundation::core::{Point, Rgb8};

/// Vertex storage for polygons; the generator never exceeds eight sides.
pub type Vertices = SmallVec<[Point; 8]>;

/// Filled circle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Circle {
    /// Center in domain units.
    pub center: Point,
    /// Radius in domain units, `>= 0`.
    pub radius: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Opacity in `[0,1]`.
    pub alpha: f64,
}

/// Filled equilateral triangle pointing up before rotation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Triangle {
    /// Center in domain units.
    pub center: Point,
    /// Circumradius in domain units, `>= 0`.
    pub size: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Opacity in `[0,1]`.
    pub alpha: f64,
    /// Rotation about `center` in degrees, `[0,360)`.
    pub rotation: f64,
}

/// Filled axis-aligned rectangle before rotation.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Rectangle {
    /// Center in domain units.
    pub center: Point,
    /// Width in domain units, `>= 0`.
    pub width: f64,
    /// Height in domain units, `>= 0`.
    pub height: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Opacity in `[0,1]`.
    pub alpha: f64,
    /// Rotation about `center` in degrees, `[0,360)`.
    pub rotation: f64,
}

/// Straight stroke between two points.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineSegment {
    /// Start point in domain units.
    pub start: Point,
    /// End point in domain units.
    pub end: Point,
    /// Stroke color.
    pub color: Rgb8,
    /// Stroke width in output pixels, `>= 0`.
    pub width: f64,
    /// Opacity in `[0,1]`.
    pub alpha: f64,
}

/// Filled regular polygon. `vertices` are stored unrotated; all lie on one circle around `center`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Polygon {
    /// Generation center.
    pub center: Point,
    /// Unrotated vertices.
    pub vertices: Vertices,
    /// Fill color.
    pub color: Rgb8,
    /// Opacity in `[0,1]`.
    pub alpha: f64,
    /// Rotation about the vertex centroid in degrees, `[0,360)`.
    pub rotation: f64,
}

/// Closed set of shapes a composition is made of.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// See [`Circle`].
    Circle(Circle),
    /// See [`Triangle`].
    Triangle(Triangle),
    /// See [`Rectangle`].
    Rectangle(Rectangle),
    /// See [`LineSegment`].
    Line(LineSegment),
    /// See [`Polygon`].
    Polygon(Polygon),
}

/// Discriminant of [`Primitive`], handy for counting and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    /// Circle.
    Circle,
    /// Triangle.
    Triangle,
    /// Rectangle.
    Rectangle,
    /// Line segment.
    Line,
    /// Polygon.
    Polygon,
}

impl Primitive {
    /// Shape discriminant.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Circle(_) => PrimitiveKind::Circle,
            Self::Triangle(_) => PrimitiveKind::Triangle,
            Self::Rectangle(_) => PrimitiveKind::Rectangle,
            Self::Line(_) => PrimitiveKind::Line,
            Self::Polygon(_) => PrimitiveKind::Polygon,
        }
    }

    /// Fill or stroke color.
    pub fn color(&self) -> Rgb8 {
        match self {
            Self::Circle(p) => p.color,
            Self::Triangle(p) => p.color,
            Self::Rectangle(p) => p.color,
            Self::Line(p) => p.color,
            Self::Polygon(p) => p.color,
        }
    }

    /// Opacity.
    pub fn alpha(&self) -> f64 {
        match self {
            Self::Circle(p) => p.alpha,
            Self::Triangle(p) => p.alpha,
            Self::Rectangle(p) => p.alpha,
            Self::Line(p) => p.alpha,
            Self::Polygon(p) => p.alpha,
        }
    }

    /// Stored rotation in degrees; `0` for shapes without one.
    pub fn rotation(&self) -> f64 {
        match self {
            Self::Triangle(p) => p.rotation,
            Self::Rectangle(p) => p.rotation,
            Self::Polygon(p) => p.rotation,
            Self::Circle(_) | Self::Line(_) => 0.0,
        }
    }
}
