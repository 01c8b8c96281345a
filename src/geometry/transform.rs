//! Rotation applied at render time. Stored primitives keep their unrotated geometry.

use smallvec::SmallVec;

use crate::foundation::core::{Affine, Point};
use crate::geometry::primitive::{Polygon, Rectangle, Triangle, Vertices};

const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Rotate `points` by `degrees` counter-clockwise about `center`.
///
/// Pure isometry: distances to `center` are preserved and four quarter turns return each point
/// to its original position up to floating tolerance.
pub fn rotate_about(points: &[Point], center: Point, degrees: f64) -> Vertices {
    let affine = Affine::rotate_about(degrees.to_radians(), center);
    points.iter().map(|&p| affine * p).collect()
}

/// Arithmetic mean of `points`; `None` when empty.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Rotate `points` about their own centroid.
pub fn rotate_about_centroid(points: &[Point], degrees: f64) -> Vertices {
    match centroid(points) {
        Some(c) => rotate_about(points, c, degrees),
        None => SmallVec::new(),
    }
}

impl Triangle {
    /// Unrotated vertices: apex above the center, base below.
    pub fn vertices(&self) -> [Point; 3] {
        let Point { x, y } = self.center;
        let s = self.size;
        [
            Point::new(x, y + s),
            Point::new(x - s * SIN_60, y - s * 0.5),
            Point::new(x + s * SIN_60, y - s * 0.5),
        ]
    }

    /// Vertices after applying `rotation` about the center.
    pub fn outline(&self) -> Vertices {
        rotate_about(&self.vertices(), self.center, self.rotation)
    }
}

impl Rectangle {
    /// Unrotated corners, counter-clockwise from bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        let Point { x, y } = self.center;
        let (hw, hh) = (self.width * 0.5, self.height * 0.5);
        [
            Point::new(x - hw, y - hh),
            Point::new(x + hw, y - hh),
            Point::new(x + hw, y + hh),
            Point::new(x - hw, y + hh),
        ]
    }

    /// Corners after applying `rotation` about the center.
    pub fn outline(&self) -> Vertices {
        rotate_about(&self.corners(), self.center, self.rotation)
    }
}

impl Polygon {
    /// Vertices after applying `rotation` about their centroid.
    pub fn outline(&self) -> Vertices {
        rotate_about_centroid(&self.vertices, self.rotation)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/transform.rs"]
mod tests;
