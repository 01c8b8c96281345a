use crate::data::record::{Field, Record};
use crate::foundation::core::Rgb8;
use crate::foundation::math::circular_mean_degrees;

/// Background shades by mean PM2.5, lightest first. A band applies while the mean is strictly
/// below its bound.
pub const BACKGROUND_BANDS: [(f64, Rgb8); 3] = [
    (50.0, Rgb8::from_hex(0xE5DBC3)),
    (100.0, Rgb8::from_hex(0xD4C5A0)),
    (150.0, Rgb8::from_hex(0xC3B07D)),
];
/// Background once the mean reaches the last band bound.
pub const BACKGROUND_SEVERE: Rgb8 = Rgb8::from_hex(0xB29B5A);
/// Background of frames without PM2.5 data.
pub const DEFAULT_BACKGROUND: Rgb8 = BACKGROUND_BANDS[0].1;

/// Step function from mean PM2.5 to background shade.
pub fn background_for(mean_pm25: Option<f64>) -> Rgb8 {
    let Some(v) = mean_pm25.filter(|v| !v.is_nan()) else {
        return DEFAULT_BACKGROUND;
    };
    BACKGROUND_BANDS
        .iter()
        .find(|(bound, _)| v < *bound)
        .map_or(BACKGROUND_SEVERE, |(_, color)| *color)
}

/// Mean/min/max of one field over a slice.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Spread {
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

/// Mean wind over a slice.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WindSummary {
    /// Arithmetic mean speed.
    pub speed: f64,
    /// Circular mean direction in degrees; `None` when directions cancel out or are missing.
    pub direction: Option<f64>,
}

/// Aggregates shown in the statistics overlay. Missing values are ignored per field.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameStats {
    /// Records in the slice.
    pub records: usize,
    /// PM2.5 spread.
    pub pm25: Option<Spread>,
    /// Mean temperature.
    pub temperature: Option<f64>,
    /// Mean dew point, used as the humidity proxy.
    pub humidity: Option<f64>,
    /// Mean wind.
    pub wind: Option<WindSummary>,
}

fn values(slice: &[Record], field: Field) -> impl Iterator<Item = f64> + '_ {
    slice.iter().filter_map(move |r| r.get(field))
}

fn mean(it: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = it.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

impl FrameStats {
    /// Aggregate one slice.
    pub fn from_slice(slice: &[Record]) -> Self {
        let pm25 = values(slice, Field::Pm25).fold(None, |acc: Option<(f64, f64, f64, usize)>, v| {
            Some(match acc {
                None => (v, v, v, 1),
                Some((s, lo, hi, n)) => (s + v, lo.min(v), hi.max(v), n + 1),
            })
        });
        let pm25 = pm25.map(|(sum, min, max, n)| Spread {
            mean: sum / n as f64,
            min,
            max,
        });

        let wind = mean(values(slice, Field::WindSpeed)).map(|speed| WindSummary {
            speed,
            direction: circular_mean_degrees(values(slice, Field::WindDirection)),
        });

        Self {
            records: slice.len(),
            pm25,
            temperature: mean(values(slice, Field::Temperature)),
            humidity: mean(values(slice, Field::DewPoint)),
            wind,
        }
    }

    /// Background shade for this slice.
    pub fn background(&self) -> Rgb8 {
        background_for(self.pm25.map(|s| s.mean))
    }

    /// Multi-line text for the statistics overlay.
    pub fn summary_text(&self) -> String {
        fn fmt(v: Option<f64>, unit: &str) -> String {
            v.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.1} {unit}"))
        }
        let pm = self.pm25;
        [
            "Live statistics".to_owned(),
            format!("Mean PM2.5: {}", fmt(pm.map(|s| s.mean), "μg/m³")),
            format!("Max PM2.5: {}", fmt(pm.map(|s| s.max), "μg/m³")),
            format!("Min PM2.5: {}", fmt(pm.map(|s| s.min), "μg/m³")),
            format!("Mean temperature: {}", fmt(self.temperature, "°C")),
            format!("Mean dew point: {}", fmt(self.humidity, "°C")),
        ]
        .join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/stats.rs"]
mod tests;
