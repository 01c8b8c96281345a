use std::time::Duration;

use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::{AirglyphError, AirglyphResult};
use crate::synth::params::Span;

/// Visualization flavor. Selects the default domain, cadence and whether station markers are
/// drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Pure abstract art over `[-10,10]²`, one frame per second.
    #[default]
    Abstract,
    /// Station map with markers, labels and an AQI legend, five frames per second.
    Stations,
}

impl Variant {
    /// Default tick interval.
    pub fn interval(self) -> Duration {
        match self {
            Self::Abstract => Duration::from_millis(1000),
            Self::Stations => Duration::from_millis(200),
        }
    }

    /// Whether per-station markers, labels, legend and title are added.
    pub fn station_markers(self) -> bool {
        matches!(self, Self::Stations)
    }
}

/// Station marker sizing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarkerParams {
    /// Divisor applied to PM2.5 before clamping into `radius`.
    pub scale: f64,
    /// Marker radius bounds.
    pub radius: Span,
    /// Marker opacity.
    pub alpha: f64,
    /// Vertical distance of the name (below) and value (above) labels.
    pub label_offset: f64,
    /// Characters of the station id shown in the name label.
    pub name_chars: usize,
}

impl Default for MarkerParams {
    fn default() -> Self {
        Self {
            scale: 100.0,
            radius: Span::new(0.3, 2.0),
            alpha: 0.8,
            label_offset: 0.3,
            name_chars: 4,
        }
    }
}

/// Two extra discs painted around every generated circle: a white highlight inside and a faint
/// ring of the circle's own color outside.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HaloParams {
    /// Highlight radius as a fraction of the circle radius.
    pub inner_ratio: f64,
    /// Highlight opacity.
    pub inner_alpha: f64,
    /// Outer ring radius as a multiple of the circle radius.
    pub outer_ratio: f64,
    /// Outer ring opacity.
    pub outer_alpha: f64,
}

impl Default for HaloParams {
    fn default() -> Self {
        Self {
            inner_ratio: 0.6,
            inner_alpha: 0.3,
            outer_ratio: 1.3,
            outer_alpha: 0.2,
        }
    }
}

impl HaloParams {
    fn validate(&self) -> AirglyphResult<()> {
        let ratios = [
            ("inner_ratio", self.inner_ratio),
            ("outer_ratio", self.outer_ratio),
        ];
        for (name, ratio) in ratios {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(AirglyphError::validation(format!(
                    "composer.halo.{name} must be > 0"
                )));
            }
        }
        let alphas = [
            ("inner_alpha", self.inner_alpha),
            ("outer_alpha", self.outer_alpha),
        ];
        for (name, alpha) in alphas {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(AirglyphError::validation(format!(
                    "composer.halo.{name} must be in [0,1]"
                )));
            }
        }
        Ok(())
    }
}

/// Composer tunables. All positions and lengths are in domain units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposerParams {
    /// Visible world rectangle (y up).
    pub domain: Rect,
    /// Mean wind speed must be strictly greater than this for the arrow to appear.
    pub wind_threshold: f64,
    /// Arrow tail.
    pub wind_anchor: Point,
    /// Arrow length per unit of mean wind speed.
    pub wind_scale: f64,
    /// Offset of the wind label from the arrow tip.
    pub wind_label_offset: Vec2,
    /// Top-left corner of the statistics text.
    pub stats_anchor: Point,
    /// Legend header position.
    pub legend_anchor: Point,
    /// Station marker sizing.
    pub marker: MarkerParams,
    /// Halo around generated circles; `None` paints plain discs.
    pub halo: Option<HaloParams>,
}

impl Default for ComposerParams {
    fn default() -> Self {
        Self::for_variant(Variant::Abstract)
    }
}

impl ComposerParams {
    /// Defaults tuned for `variant`.
    pub fn for_variant(variant: Variant) -> Self {
        let (domain, wind_anchor, stats_anchor, halo) = match variant {
            Variant::Abstract => (
                Rect::new(-10.0, -10.0, 10.0, 10.0),
                Point::new(0.0, 0.0),
                Point::new(5.0, 9.5),
                Some(HaloParams::default()),
            ),
            Variant::Stations => (
                Rect::new(-2.0, -2.0, 10.0, 8.0),
                Point::new(5.0, 4.0),
                Point::new(8.0, 6.0),
                None,
            ),
        };
        Self {
            domain,
            wind_threshold: 1.0,
            wind_anchor,
            wind_scale: 0.3,
            wind_label_offset: Vec2::new(0.5, 0.5),
            stats_anchor,
            legend_anchor: Point::new(0.5, 7.5),
            marker: MarkerParams::default(),
            halo,
        }
    }

    /// Reject degenerate domains and non-finite tunables.
    pub fn validate(&self) -> AirglyphResult<()> {
        let d = self.domain;
        let finite = [d.x0, d.y0, d.x1, d.y1].iter().all(|v| v.is_finite());
        if !finite || d.width() <= 0.0 || d.height() <= 0.0 {
            return Err(AirglyphError::validation(
                "composer.domain must be finite with x1 > x0 and y1 > y0",
            ));
        }
        if !self.wind_threshold.is_finite() {
            return Err(AirglyphError::validation(
                "composer.wind_threshold must be finite",
            ));
        }
        if !self.wind_scale.is_finite() || self.wind_scale <= 0.0 {
            return Err(AirglyphError::validation("composer.wind_scale must be > 0"));
        }
        let m = &self.marker;
        if !m.scale.is_finite() || m.scale <= 0.0 {
            return Err(AirglyphError::validation("composer.marker.scale must be > 0"));
        }
        m.radius.validate("composer.marker.radius")?;
        if m.radius.min < 0.0 {
            return Err(AirglyphError::validation(
                "composer.marker.radius must be >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&m.alpha) {
            return Err(AirglyphError::validation(
                "composer.marker.alpha must be in [0,1]",
            ));
        }
        if let Some(halo) = &self.halo {
            halo.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/params.rs"]
mod tests;
