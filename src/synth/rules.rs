//! The five generation rules. Each takes one record and returns `None` when the rule does not
//! fire or a field it needs is missing.

use std::f64::consts::TAU;

use rand::Rng;

use crate::classify::classify;
use crate::classify::palette::PaletteFamily;
use crate::data::record::{Field, Record};
use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::{unit_from_degrees, wrap_degrees};
use crate::geometry::primitive::{Circle, LineSegment, Polygon, Rectangle, Triangle, Vertices};
use crate::synth::params::{
    CircleParams, LineParams, PolygonParams, RectangleParams, Span, SynthParams, TriangleParams,
};

fn require(record: &Record, field: Field, rule: &'static str) -> Option<f64> {
    let v = record.get(field);
    if v.is_none() {
        tracing::debug!(
            station = %record.station,
            field = field.column(),
            rule,
            "record skipped by rule: missing field"
        );
    }
    v
}

fn random_point<R: Rng>(span: Span, rng: &mut R) -> Point {
    let x = span.sample(rng);
    let y = span.sample(rng);
    Point::new(x, y)
}

fn random_rotation<R: Rng>(rng: &mut R) -> f64 {
    wrap_degrees(SynthParams::ROTATION.sample(rng))
}

/// Always fires when PM2.5 is present. Wind direction, when known, nudges the position.
pub fn circle<R: Rng>(record: &Record, p: &CircleParams, rng: &mut R) -> Option<Circle> {
    let pm25 = require(record, Field::Pm25, "circle")?;
    let radius = p.radius.clamp(pm25 / p.scale);
    let color = classify(pm25, Some(PaletteFamily::Primary)).color();

    let mut center = random_point(p.position, rng);
    if let Some(wd) = record.get(Field::WindDirection) {
        center += unit_from_degrees(wd) * p.wind_offset;
    }
    let alpha = p.alpha.sample(rng);

    Some(Circle {
        center,
        radius,
        color,
        alpha,
    })
}

/// Always fires when SO2 and temperature are present.
pub fn triangle<R: Rng>(record: &Record, p: &TriangleParams, rng: &mut R) -> Option<Triangle> {
    let so2 = require(record, Field::So2, "triangle")?;
    let temp = require(record, Field::Temperature, "triangle")?;

    let size = p.size.clamp(so2 / p.scale) * p.temperature.normalize(temp);
    let color = classify(so2, Some(PaletteFamily::Secondary)).color();
    let center = random_point(p.position, rng);
    let alpha = p.alpha.sample(rng);
    let rotation = random_rotation(rng);

    Some(Triangle {
        center,
        size,
        color,
        alpha,
        rotation,
    })
}

/// Always fires when NO2 and dew point are present. Produces a square.
pub fn rectangle<R: Rng>(record: &Record, p: &RectangleParams, rng: &mut R) -> Option<Rectangle> {
    let no2 = require(record, Field::No2, "rectangle")?;
    let dewp = require(record, Field::DewPoint, "rectangle")?;

    let side = p.side.clamp(no2 / p.scale);
    let color = classify(no2, Some(PaletteFamily::Accent)).color();
    let center = random_point(p.position, rng);
    let alpha = p.alpha.clamp(dewp / p.humidity_scale);
    let rotation = random_rotation(rng);

    Some(Rectangle {
        center,
        width: side,
        height: side,
        color,
        alpha,
        rotation,
    })
}

/// Fires only when wind speed is strictly above the threshold.
pub fn line<R: Rng>(record: &Record, p: &LineParams, rng: &mut R) -> Option<LineSegment> {
    let speed = require(record, Field::WindSpeed, "line")?;
    if speed <= p.threshold {
        return None;
    }
    let direction = require(record, Field::WindDirection, "line")?;
    let co = require(record, Field::Co, "line")?;

    let length = p.length.clamp(speed / p.scale);
    let start = random_point(p.position, rng);
    let end = start + unit_from_degrees(direction) * length;
    let color = classify(co, Some(PaletteFamily::Neutral)).color();
    let width = p.width.clamp(speed);
    let alpha = p.alpha.sample(rng);

    Some(LineSegment {
        start,
        end,
        color,
        width,
        alpha,
    })
}

/// Fires only when O3 is strictly above the threshold. Vertices are stored unrotated.
pub fn polygon<R: Rng>(record: &Record, p: &PolygonParams, rng: &mut R) -> Option<Polygon> {
    let o3 = require(record, Field::O3, "polygon")?;
    if o3 <= p.threshold {
        return None;
    }

    let sides = rng.random_range(p.min_sides..=p.max_sides);
    let radius = p.radius.clamp(o3 / p.scale);
    let color = classify(o3, Some(PaletteFamily::Primary)).color();
    let center = random_point(p.position, rng);
    let vertices = regular_vertices(center, radius, sides);
    let alpha = p.alpha.sample(rng);
    let rotation = random_rotation(rng);

    Some(Polygon {
        center,
        vertices,
        color,
        alpha,
        rotation,
    })
}

/// Regular polygon by even angular subdivision, first vertex on the +x axis.
pub fn regular_vertices(center: Point, radius: f64, sides: usize) -> Vertices {
    (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/synth/rules.rs"]
mod tests;
