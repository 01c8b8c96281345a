use rand::Rng;

use crate::classify::aqi::AqiCategory;
use crate::classify::palette::PaletteFamily;
use crate::compose::params::{ComposerParams, HaloParams, Variant};
use crate::compose::stats::{DEFAULT_BACKGROUND, FrameStats};
use crate::data::layout::StationLayout;
use crate::data::record::Record;
use crate::data::store::RecordStore;
use crate::foundation::core::{Point, Rect, Rgb8, Timestamp, Vec2};
use crate::foundation::error::AirglyphResult;
use crate::foundation::math::unit_from_degrees;
use crate::geometry::overlay::{Arrow, Overlay, TextAnchor, TextLabel};
use crate::geometry::primitive::{Circle, Primitive};
use crate::synth::params::SynthParams;
use crate::synth::synthesize;

const TITLE_PX: f32 = 22.0;
const LEGEND_HEADER_PX: f32 = 17.0;
const BODY_PX: f32 = 14.0;
const STATION_NAME_PX: f32 = 11.0;
const STATION_VALUE_PX: f32 = 10.0;

const WIND_WIDTH_PX: f64 = 2.0;
const WIND_ALPHA: f64 = 0.7;
const WIND_HEAD_WIDTH: f64 = 0.2;
const WIND_HEAD_LENGTH: f64 = 0.3;

const LEGEND_SWATCH_DX: f64 = 0.5;
const LEGEND_LABEL_DX: f64 = 0.8;
const LEGEND_FIRST_DY: f64 = 0.3;
const LEGEND_STEP_DY: f64 = 0.25;
const LEGEND_SWATCH_RADIUS: f64 = 0.1;

/// Everything needed to paint one frame. Rebuilt every tick and dropped after rendering.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Composition {
    /// Reference timestamp, if the frame was composed for one.
    pub timestamp: Option<Timestamp>,
    /// Frame background.
    pub background: Rgb8,
    /// Visible world rectangle.
    pub domain: Rect,
    /// Generated shapes, in paint order.
    pub primitives: Vec<Primitive>,
    /// Text, arrow and legend annotations, painted after `primitives`.
    pub overlays: Vec<Overlay>,
    /// Aggregates of the slice, absent for empty frames.
    pub stats: Option<FrameStats>,
    /// Halo painted around every circle in `primitives`.
    pub halo: Option<HaloParams>,
}

impl Composition {
    /// A no-op frame: default background, nothing to draw.
    pub fn empty(domain: Rect) -> Self {
        Self {
            timestamp: None,
            background: DEFAULT_BACKGROUND,
            domain,
            primitives: Vec::new(),
            overlays: Vec::new(),
            stats: None,
            halo: None,
        }
    }

    /// Return `true` when there is nothing to draw besides the background.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.overlays.is_empty()
    }
}

/// Turns one timestamp's slice into a [`Composition`].
#[derive(Clone, Debug)]
pub struct FrameComposer {
    variant: Variant,
    params: ComposerParams,
    synth: SynthParams,
}

impl FrameComposer {
    /// Composer with explicit tunables. Both parameter sets are validated, since composing with
    /// inverted spans or bad side counts would panic mid-frame.
    pub fn new(
        variant: Variant,
        params: ComposerParams,
        synth: SynthParams,
    ) -> AirglyphResult<Self> {
        params.validate()?;
        synth.validate()?;
        Ok(Self {
            variant,
            params,
            synth,
        })
    }

    /// Composer with the variant's default tunables.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            params: ComposerParams::for_variant(variant),
            synth: SynthParams::default(),
        }
    }

    /// Active variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Composer tunables.
    pub fn params(&self) -> &ComposerParams {
        &self.params
    }

    /// Compose the frame for `ts`. Never fails: a timestamp without records gives an empty
    /// composition.
    #[tracing::instrument(level = "debug", skip_all, fields(ts = %ts))]
    pub fn compose<R: Rng>(
        &self,
        ts: Timestamp,
        store: &RecordStore,
        layout: &StationLayout,
        rng: &mut R,
    ) -> Composition {
        let slice = store.slice(ts);
        if slice.is_empty() {
            tracing::debug!("no records at timestamp, empty frame");
            return Composition {
                timestamp: Some(ts),
                ..Composition::empty(self.params.domain)
            };
        }

        let mut primitives = synthesize(slice, &self.synth, rng);
        let mut overlays = Vec::new();

        let stats = FrameStats::from_slice(slice);
        overlays.push(Overlay::Text(TextLabel {
            position: self.params.stats_anchor,
            text: stats.summary_text(),
            color: text_color(),
            size_px: BODY_PX,
            anchor: TextAnchor::Start,
        }));

        self.push_wind(&stats, &mut overlays);

        if self.variant.station_markers() {
            self.push_stations(slice, layout, &mut primitives, &mut overlays);
            self.push_legend(&mut overlays);
            overlays.push(Overlay::Text(self.title(ts)));
        }

        tracing::debug!(
            records = slice.len(),
            primitives = primitives.len(),
            overlays = overlays.len(),
            "composed"
        );

        Composition {
            timestamp: Some(ts),
            background: stats.background(),
            domain: self.params.domain,
            primitives,
            overlays,
            stats: Some(stats),
            halo: self.params.halo,
        }
    }

    fn push_wind(&self, stats: &FrameStats, overlays: &mut Vec<Overlay>) {
        let Some(wind) = stats.wind else {
            return;
        };
        if wind.speed <= self.params.wind_threshold {
            return;
        }
        let Some(direction) = wind.direction else {
            tracing::debug!("wind directions cancel out, arrow skipped");
            return;
        };

        let start = self.params.wind_anchor;
        let end = start + unit_from_degrees(direction) * (wind.speed * self.params.wind_scale);
        overlays.push(Overlay::Arrow(Arrow {
            start,
            end,
            color: Rgb8::CYAN,
            width: WIND_WIDTH_PX,
            alpha: WIND_ALPHA,
            head_width: WIND_HEAD_WIDTH,
            head_length: WIND_HEAD_LENGTH,
        }));
        overlays.push(Overlay::Text(TextLabel {
            position: end + self.params.wind_label_offset,
            text: format!(
                "Wind direction: {direction:.0}°\nWind speed: {:.1} m/s",
                wind.speed
            ),
            color: Rgb8::CYAN,
            size_px: BODY_PX,
            anchor: TextAnchor::Start,
        }));
    }

    fn push_stations(
        &self,
        slice: &[Record],
        layout: &StationLayout,
        primitives: &mut Vec<Primitive>,
        overlays: &mut Vec<Overlay>,
    ) {
        let m = &self.params.marker;
        for record in slice {
            let Some(pos) = layout.position(&record.station) else {
                tracing::debug!(station = %record.station, "no layout entry, marker skipped");
                continue;
            };
            let Some(pm25) = record.pm25 else {
                tracing::debug!(station = %record.station, "no PM2.5, marker skipped");
                continue;
            };

            primitives.push(Primitive::Circle(Circle {
                center: pos,
                radius: m.radius.clamp(pm25 / m.scale),
                color: AqiCategory::classify(pm25).color(),
                alpha: m.alpha,
            }));
            overlays.push(Overlay::Text(TextLabel {
                position: pos - Vec2::new(0.0, m.label_offset),
                text: record.station.chars().take(m.name_chars).collect(),
                color: text_color(),
                size_px: STATION_NAME_PX,
                anchor: TextAnchor::Center,
            }));
            overlays.push(Overlay::Text(TextLabel {
                position: pos + Vec2::new(0.0, m.label_offset),
                text: format!("{pm25:.0}"),
                color: text_color(),
                size_px: STATION_VALUE_PX,
                anchor: TextAnchor::Center,
            }));
        }
    }

    fn push_legend(&self, overlays: &mut Vec<Overlay>) {
        let Point { x, y } = self.params.legend_anchor;
        overlays.push(Overlay::Text(TextLabel {
            position: Point::new(x, y),
            text: "AQI level:".to_owned(),
            color: text_color(),
            size_px: LEGEND_HEADER_PX,
            anchor: TextAnchor::Start,
        }));
        for (i, category) in AqiCategory::ALL.iter().enumerate() {
            let row_y = y - LEGEND_FIRST_DY - LEGEND_STEP_DY * i as f64;
            overlays.push(Overlay::Swatch(Circle {
                center: Point::new(x + LEGEND_SWATCH_DX, row_y),
                radius: LEGEND_SWATCH_RADIUS,
                color: category.color(),
                alpha: 0.8,
            }));
            overlays.push(Overlay::Text(TextLabel {
                position: Point::new(x + LEGEND_LABEL_DX, row_y),
                text: category.label().to_owned(),
                color: text_color(),
                size_px: BODY_PX,
                anchor: TextAnchor::Start,
            }));
        }
    }

    fn title(&self, ts: Timestamp) -> TextLabel {
        let d = self.params.domain;
        TextLabel {
            position: Point::new(d.center().x, d.y1 - 0.2),
            text: format!(
                "Air quality monitor - {}\nPM2.5 concentration (μg/m³)",
                ts.format("%Y-%m-%d %H:%M")
            ),
            color: text_color(),
            size_px: TITLE_PX,
            anchor: TextAnchor::Center,
        }
    }
}

// darkest neutral slot, readable on every background band
fn text_color() -> Rgb8 {
    PaletteFamily::Neutral.colors()[0]
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
