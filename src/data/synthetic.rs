use std::f64::consts::TAU;

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

use crate::data::layout::BEIJING_STATIONS;
use crate::data::record::Record;
use crate::foundation::core::Timestamp;
use crate::foundation::error::{AirglyphError, AirglyphResult};

const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

/// Parameters of the stochastic record generator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of simulated days; one record per station per hour.
    pub days: u32,
    /// First timestamp.
    pub start: Timestamp,
    /// Station ids to simulate.
    pub stations: Vec<String>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            days: 30,
            start: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap_or_default()
                .and_time(NaiveTime::MIN),
            stations: BEIJING_STATIONS
                .iter()
                .map(|(name, _, _)| (*name).to_owned())
                .collect(),
        }
    }
}

impl SyntheticConfig {
    /// Reject configurations that cannot produce any record.
    pub fn validate(&self) -> AirglyphResult<()> {
        if self.days == 0 {
            return Err(AirglyphError::validation("synthetic days must be > 0"));
        }
        if self.stations.is_empty() {
            return Err(AirglyphError::validation(
                "synthetic station list must be non-empty",
            ));
        }
        Ok(())
    }
}

/// Noise sources of the generator, built once per run.
struct Noise {
    hourly: Normal<f64>,
    temperature: Normal<f64>,
    pressure: Normal<f64>,
    rainfall: Exp<f64>,
    gusts: Exp<f64>,
}

impl Noise {
    fn new() -> AirglyphResult<Self> {
        let normal = |mean: f64, std_dev: f64| {
            Normal::new(mean, std_dev).map_err(|e| {
                AirglyphError::validation(format!("normal({mean}, {std_dev}): {e}"))
            })
        };
        // parameterized by mean, sampled with rate 1/mean
        let exp = |mean: f64| {
            Exp::new(1.0 / mean)
                .map_err(|e| AirglyphError::validation(format!("exp(mean {mean}): {e}")))
        };
        Ok(Self {
            hourly: normal(1.0, 0.2)?,
            temperature: normal(0.0, 5.0)?,
            pressure: normal(0.0, 10.0)?,
            rainfall: exp(0.5)?,
            gusts: exp(2.0)?,
        })
    }
}

/// Generate hourly records for every configured station.
///
/// Pollutants follow a yearly and a daily sine cycle scaled by an hourly N(1, 0.2) factor shared
/// by all stations and a per-station U(0.8, 1.2) factor. Weather is independent noise around
/// fixed means; dew point trails temperature by 5°C.
pub fn generate_records<R: Rng>(
    cfg: &SyntheticConfig,
    rng: &mut R,
) -> AirglyphResult<Vec<Record>> {
    let noise = Noise::new()?;
    let hours = u64::from(cfg.days) * 24;
    let mut out = Vec::with_capacity((hours as usize).saturating_mul(cfg.stations.len()));

    for i in 0..hours {
        let timestamp = cfg.start + TimeDelta::hours(i as i64);
        let yearly = (TAU * i as f64 / HOURS_PER_YEAR).sin();
        let seasonal = 1.0 + 0.3 * yearly;
        let daily = 1.0 + 0.5 * (TAU * (i % 24) as f64 / 24.0).sin();
        let hourly = noise.hourly.sample(rng);

        for station in &cfg.stations {
            let k = seasonal * hourly * rng.random_range(0.8..=1.2);
            let pm25 = (50.0 * k * daily).max(0.0);
            let temperature = 15.0 + 20.0 * yearly + noise.temperature.sample(rng);

            let mut r = Record::new(timestamp, station.as_str());
            r.pm25 = Some(pm25);
            r.pm10 = Some(pm25 * rng.random_range(1.2..=1.8));
            r.so2 = Some((20.0 * k).max(0.0));
            r.no2 = Some((40.0 * k * daily).max(0.0));
            r.co = Some((2.0 * k * daily).max(0.0));
            r.o3 = Some((80.0 * k * daily).max(0.0));
            r.temperature = Some(temperature);
            r.pressure = Some(1013.0 + noise.pressure.sample(rng));
            r.dew_point = Some(temperature - 5.0);
            r.rainfall = Some(noise.rainfall.sample(rng));
            r.wind_speed = Some(3.0 + noise.gusts.sample(rng));
            r.wind_direction = Some(rng.random_range(0.0..360.0));
            out.push(r);
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/data/synthetic.rs"]
mod tests;
