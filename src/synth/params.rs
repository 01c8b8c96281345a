use rand::Rng;

use crate::foundation::error::{AirglyphError, AirglyphResult};

/// Closed numeric range used both for clamping and for uniform sampling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Span {
    /// Build a span. Call [`Span::validate`] before use when the bounds come from input.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `v` into the span. NaN maps to `min`.
    pub fn clamp(self, v: f64) -> f64 {
        if v.is_nan() {
            return self.min;
        }
        v.clamp(self.min, self.max)
    }

    /// Uniform sample from `[min, max)`; a degenerate span always yields `min`.
    pub fn sample<R: Rng>(self, rng: &mut R) -> f64 {
        if self.max > self.min {
            rng.random_range(self.min..self.max)
        } else {
            self.min
        }
    }

    /// Position of `v` inside the span rescaled to `[0,1]` (clamped).
    pub fn normalize(self, v: f64) -> f64 {
        let width = self.max - self.min;
        if width <= 0.0 || v.is_nan() {
            return 0.0;
        }
        ((v - self.min) / width).clamp(0.0, 1.0)
    }

    pub(crate) fn validate(self, name: &str) -> AirglyphResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AirglyphError::validation(format!(
                "{name}: bounds must be finite"
            )));
        }
        if self.min > self.max {
            return Err(AirglyphError::validation(format!(
                "{name}: min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn validate_within(self, name: &str, outer: Span) -> AirglyphResult<()> {
        self.validate(name)?;
        if self.min < outer.min || self.max > outer.max {
            return Err(AirglyphError::validation(format!(
                "{name}: must lie within [{}, {}]",
                outer.min, outer.max
            )));
        }
        Ok(())
    }
}

const UNIT: Span = Span::new(0.0, 1.0);
const NON_NEGATIVE: Span = Span::new(0.0, f64::MAX);

fn validate_scale(name: &str, v: f64) -> AirglyphResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(AirglyphError::validation(format!("{name} must be > 0")));
    }
    Ok(())
}

/// Circle rule: PM2.5 drives the radius.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CircleParams {
    /// Divisor applied to PM2.5 before clamping.
    pub scale: f64,
    /// Radius bounds.
    pub radius: Span,
    /// Range for both coordinates of the random position.
    pub position: Span,
    /// Length of the wind-direction displacement.
    pub wind_offset: f64,
    /// Random opacity range.
    pub alpha: Span,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            scale: 50.0,
            radius: Span::new(0.5, 3.0),
            position: Span::new(-8.0, 8.0),
            wind_offset: 0.5,
            alpha: Span::new(0.4, 0.8),
        }
    }
}

/// Triangle rule: SO2 drives the size, temperature scales it down.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TriangleParams {
    /// Divisor applied to SO2 before clamping.
    pub scale: f64,
    /// Size bounds before the temperature factor.
    pub size: Span,
    /// Temperature range mapped onto the `[0,1]` size factor.
    pub temperature: Span,
    /// Range for both coordinates of the random position.
    pub position: Span,
    /// Random opacity range.
    pub alpha: Span,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            scale: 30.0,
            size: Span::new(0.3, 2.0),
            temperature: Span::new(-20.0, 20.0),
            position: Span::new(-7.0, 7.0),
            alpha: Span::new(0.3, 0.7),
        }
    }
}

/// Rectangle rule: NO2 drives the (square) side, dew point the opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RectangleParams {
    /// Divisor applied to NO2 before clamping.
    pub scale: f64,
    /// Side bounds.
    pub side: Span,
    /// Divisor applied to the dew point before clamping into `alpha`.
    pub humidity_scale: f64,
    /// Opacity bounds.
    pub alpha: Span,
    /// Range for both coordinates of the random position.
    pub position: Span,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            scale: 40.0,
            side: Span::new(0.2, 1.5),
            humidity_scale: 100.0,
            alpha: Span::new(0.2, 0.8),
            position: Span::new(-6.0, 6.0),
        }
    }
}

/// Line rule: fires only above a wind-speed threshold.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LineParams {
    /// Wind speed must be strictly greater than this.
    pub threshold: f64,
    /// Divisor applied to wind speed for the length.
    pub scale: f64,
    /// Length bounds.
    pub length: Span,
    /// Stroke width bounds in pixels; wind speed is clamped into it directly.
    pub width: Span,
    /// Range for both coordinates of the random start point.
    pub position: Span,
    /// Random opacity range.
    pub alpha: Span,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            threshold: 2.0,
            scale: 2.0,
            length: Span::new(1.0, 4.0),
            width: Span::new(1.0, 5.0),
            position: Span::new(-8.0, 8.0),
            alpha: Span::new(0.4, 0.8),
        }
    }
}

/// Polygon rule: fires only above an O3 threshold.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolygonParams {
    /// O3 must be strictly greater than this.
    pub threshold: f64,
    /// Divisor applied to O3 before clamping.
    pub scale: f64,
    /// Circumradius bounds.
    pub radius: Span,
    /// Fewest sides (inclusive).
    pub min_sides: usize,
    /// Most sides (inclusive).
    pub max_sides: usize,
    /// Range for both coordinates of the random center.
    pub position: Span,
    /// Random opacity range.
    pub alpha: Span,
}

impl PolygonParams {
    /// Smallest side count a polygon may have.
    pub const MIN_SIDES: usize = 5;
    /// Largest side count a polygon may have.
    pub const MAX_SIDES: usize = 8;
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            scale: 100.0,
            radius: Span::new(0.5, 2.0),
            min_sides: Self::MIN_SIDES,
            max_sides: Self::MAX_SIDES,
            position: Span::new(-7.0, 7.0),
            alpha: Span::new(0.3, 0.6),
        }
    }
}

/// All synthesis tunables.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SynthParams {
    /// Circle rule.
    pub circle: CircleParams,
    /// Triangle rule.
    pub triangle: TriangleParams,
    /// Rectangle rule.
    pub rectangle: RectangleParams,
    /// Line rule.
    pub line: LineParams,
    /// Polygon rule.
    pub polygon: PolygonParams,
}

impl SynthParams {
    /// Random rotation range in degrees, half-open.
    pub const ROTATION: Span = Span::new(0.0, 360.0);

    /// Check every span and scale.
    pub fn validate(&self) -> AirglyphResult<()> {
        let c = &self.circle;
        validate_scale("circle.scale", c.scale)?;
        c.radius.validate_within("circle.radius", NON_NEGATIVE)?;
        c.position.validate("circle.position")?;
        c.alpha.validate_within("circle.alpha", UNIT)?;
        if !c.wind_offset.is_finite() {
            return Err(AirglyphError::validation("circle.wind_offset must be finite"));
        }

        let t = &self.triangle;
        validate_scale("triangle.scale", t.scale)?;
        t.size.validate_within("triangle.size", NON_NEGATIVE)?;
        t.temperature.validate("triangle.temperature")?;
        t.position.validate("triangle.position")?;
        t.alpha.validate_within("triangle.alpha", UNIT)?;

        let r = &self.rectangle;
        validate_scale("rectangle.scale", r.scale)?;
        validate_scale("rectangle.humidity_scale", r.humidity_scale)?;
        r.side.validate_within("rectangle.side", NON_NEGATIVE)?;
        r.alpha.validate_within("rectangle.alpha", UNIT)?;
        r.position.validate("rectangle.position")?;

        let l = &self.line;
        validate_scale("line.scale", l.scale)?;
        if !l.threshold.is_finite() {
            return Err(AirglyphError::validation("line.threshold must be finite"));
        }
        l.length.validate_within("line.length", NON_NEGATIVE)?;
        l.width.validate_within("line.width", NON_NEGATIVE)?;
        l.position.validate("line.position")?;
        l.alpha.validate_within("line.alpha", UNIT)?;

        let p = &self.polygon;
        validate_scale("polygon.scale", p.scale)?;
        if !p.threshold.is_finite() {
            return Err(AirglyphError::validation("polygon.threshold must be finite"));
        }
        p.radius.validate_within("polygon.radius", NON_NEGATIVE)?;
        let sides = PolygonParams::MIN_SIDES..=PolygonParams::MAX_SIDES;
        if !sides.contains(&p.min_sides)
            || !sides.contains(&p.max_sides)
            || p.min_sides > p.max_sides
        {
            return Err(AirglyphError::validation(format!(
                "polygon sides must satisfy {} <= min_sides <= max_sides <= {}",
                PolygonParams::MIN_SIDES,
                PolygonParams::MAX_SIDES
            )));
        }
        p.position.validate("polygon.position")?;
        p.alpha.validate_within("polygon.alpha", UNIT)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/params.rs"]
mod tests;
