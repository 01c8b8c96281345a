use crate::foundation::core::Rgb8;

/// Upper bounds (inclusive) of the first five AQI categories, in μg/m³ of PM2.5.
pub const AQI_BREAKPOINTS: [f64; 5] = [35.0, 75.0, 115.0, 150.0, 250.0];

/// Six ordered air-quality severity levels derived from PM2.5. `Ord` follows severity.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AqiCategory {
    /// 优
    Excellent,
    /// 良
    Good,
    /// 轻度污染
    LightlyPolluted,
    /// 中度污染
    ModeratelyPolluted,
    /// 重度污染
    HeavilyPolluted,
    /// 严重污染
    SeverelyPolluted,
}

impl AqiCategory {
    /// All categories in increasing severity.
    pub const ALL: [Self; 6] = [
        Self::Excellent,
        Self::Good,
        Self::LightlyPolluted,
        Self::ModeratelyPolluted,
        Self::HeavilyPolluted,
        Self::SeverelyPolluted,
    ];

    /// Category for a PM2.5 concentration. Values on a breakpoint belong to the lower category;
    /// NaN is treated as clean air.
    pub fn classify(pm25: f64) -> Self {
        if pm25.is_nan() {
            return Self::Excellent;
        }
        let idx = AQI_BREAKPOINTS
            .iter()
            .position(|&bp| pm25 <= bp)
            .unwrap_or(AQI_BREAKPOINTS.len());
        Self::ALL[idx]
    }

    /// Severity rank, `0` (excellent) to `5` (severe).
    pub fn severity(self) -> u8 {
        self as u8
    }

    /// Chinese label as used by the national standard.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "优",
            Self::Good => "良",
            Self::LightlyPolluted => "轻度污染",
            Self::ModeratelyPolluted => "中度污染",
            Self::HeavilyPolluted => "重度污染",
            Self::SeverelyPolluted => "严重污染",
        }
    }

    /// Fixed display color.
    pub fn color(self) -> Rgb8 {
        match self {
            Self::Excellent => Rgb8::from_hex(0x00E400),
            Self::Good => Rgb8::from_hex(0xFFFF00),
            Self::LightlyPolluted => Rgb8::from_hex(0xFF7E00),
            Self::ModeratelyPolluted => Rgb8::from_hex(0xFF0000),
            Self::HeavilyPolluted => Rgb8::from_hex(0x8F3F97),
            Self::SeverelyPolluted => Rgb8::from_hex(0x7E0023),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/aqi.rs"]
mod tests;
