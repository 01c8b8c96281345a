use crate::foundation::core::Timestamp;

/// Numeric measurement columns carried by a [`Record`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Field {
    /// Fine particulate matter, μg/m³.
    Pm25,
    /// Coarse particulate matter, μg/m³.
    Pm10,
    /// Sulfur dioxide, μg/m³.
    So2,
    /// Nitrogen dioxide, μg/m³.
    No2,
    /// Carbon monoxide.
    Co,
    /// Ozone, μg/m³.
    O3,
    /// Air temperature, °C.
    Temperature,
    /// Air pressure, hPa.
    Pressure,
    /// Dew point, °C. Doubles as the humidity proxy.
    DewPoint,
    /// Rainfall, mm.
    Rainfall,
    /// Wind speed, m/s.
    WindSpeed,
    /// Wind direction in degrees (0° = +x, counter-clockwise).
    WindDirection,
}

impl Field {
    /// Every field, in tabular column order.
    pub const ALL: [Self; 12] = [
        Self::Pm25,
        Self::Pm10,
        Self::So2,
        Self::No2,
        Self::Co,
        Self::O3,
        Self::Temperature,
        Self::Pressure,
        Self::DewPoint,
        Self::Rainfall,
        Self::WindSpeed,
        Self::WindDirection,
    ];

    /// Column header used by the tabular source.
    pub fn column(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::So2 => "SO2",
            Self::No2 => "NO2",
            Self::Co => "CO",
            Self::O3 => "O3",
            Self::Temperature => "TEMP",
            Self::Pressure => "PRES",
            Self::DewPoint => "DEWP",
            Self::Rainfall => "RAIN",
            Self::WindSpeed => "WSPM",
            Self::WindDirection => "wd",
        }
    }
}

/// One station's measurements at one timestamp.
///
/// Any measurement may be missing (`None`); rules that need a missing value skip the record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Measurement time.
    pub timestamp: Timestamp,
    /// Station identifier.
    pub station: String,
    /// PM2.5 concentration.
    pub pm25: Option<f64>,
    /// PM10 concentration.
    pub pm10: Option<f64>,
    /// SO2 concentration.
    pub so2: Option<f64>,
    /// NO2 concentration.
    pub no2: Option<f64>,
    /// CO concentration.
    pub co: Option<f64>,
    /// O3 concentration.
    pub o3: Option<f64>,
    /// Temperature.
    pub temperature: Option<f64>,
    /// Pressure.
    pub pressure: Option<f64>,
    /// Dew point.
    pub dew_point: Option<f64>,
    /// Rainfall.
    pub rainfall: Option<f64>,
    /// Wind speed.
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees.
    pub wind_direction: Option<f64>,
}

impl Record {
    /// A record with every measurement missing.
    pub fn new(timestamp: Timestamp, station: impl Into<String>) -> Self {
        Self {
            timestamp,
            station: station.into(),
            pm25: None,
            pm10: None,
            so2: None,
            no2: None,
            co: None,
            o3: None,
            temperature: None,
            pressure: None,
            dew_point: None,
            rainfall: None,
            wind_speed: None,
            wind_direction: None,
        }
    }

    /// Builder-style setter; non-finite values are stored as missing.
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, value.is_finite().then_some(value));
        self
    }

    /// Read one measurement.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Pm25 => self.pm25,
            Field::Pm10 => self.pm10,
            Field::So2 => self.so2,
            Field::No2 => self.no2,
            Field::Co => self.co,
            Field::O3 => self.o3,
            Field::Temperature => self.temperature,
            Field::Pressure => self.pressure,
            Field::DewPoint => self.dew_point,
            Field::Rainfall => self.rainfall,
            Field::WindSpeed => self.wind_speed,
            Field::WindDirection => self.wind_direction,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Pm25 => &mut self.pm25,
            Field::Pm10 => &mut self.pm10,
            Field::So2 => &mut self.so2,
            Field::No2 => &mut self.no2,
            Field::Co => &mut self.co,
            Field::O3 => &mut self.o3,
            Field::Temperature => &mut self.temperature,
            Field::Pressure => &mut self.pressure,
            Field::DewPoint => &mut self.dew_point,
            Field::Rainfall => &mut self.rainfall,
            Field::WindSpeed => &mut self.wind_speed,
            Field::WindDirection => &mut self.wind_direction,
        };
        *slot = value;
    }
}
