use crate::foundation::core::Rgb8;

/// Upper bounds (exclusive) of the first five generic buckets.
pub const BUCKET_BREAKPOINTS: [f64; 5] = [50.0, 100.0, 150.0, 200.0, 250.0];

/// Slots per palette family.
pub const PALETTE_SLOTS: usize = 6;

const PRIMARY: [Rgb8; PALETTE_SLOTS] = [
    Rgb8::from_hex(0xFF6B6B),
    Rgb8::from_hex(0x4ECDC4),
    Rgb8::from_hex(0x45B7D1),
    Rgb8::from_hex(0x96CEB4),
    Rgb8::from_hex(0xFFEAA7),
    Rgb8::from_hex(0xDDA0DD),
];

const SECONDARY: [Rgb8; PALETTE_SLOTS] = [
    Rgb8::from_hex(0xFF8E53),
    Rgb8::from_hex(0x6C5CE7),
    Rgb8::from_hex(0xA29BFE),
    Rgb8::from_hex(0xFD79A8),
    Rgb8::from_hex(0xFDCB6E),
    Rgb8::from_hex(0x6C5CE7),
];

const ACCENT: [Rgb8; PALETTE_SLOTS] = [
    Rgb8::from_hex(0xE17055),
    Rgb8::from_hex(0x00B894),
    Rgb8::from_hex(0x0984E3),
    Rgb8::from_hex(0x00CEC9),
    Rgb8::from_hex(0xFDCB6E),
    Rgb8::from_hex(0xE84393),
];

const NEUTRAL: [Rgb8; PALETTE_SLOTS] = [
    Rgb8::from_hex(0x2D3436),
    Rgb8::from_hex(0x636E72),
    Rgb8::from_hex(0x74B9FF),
    Rgb8::from_hex(0x81ECEC),
    Rgb8::from_hex(0xFAB1A0),
    Rgb8::from_hex(0xFF7675),
];

/// Named color groups used to tell pollutants apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteFamily {
    /// Warm reds to violets (PM2.5, O3).
    Primary,
    /// Oranges and purples (SO2).
    Secondary,
    /// Terracotta, greens and blues (NO2).
    Accent,
    /// Greys into pastels (CO).
    Neutral,
}

impl PaletteFamily {
    /// Every family.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Accent, Self::Neutral];

    /// The family's fixed slots.
    pub fn colors(self) -> &'static [Rgb8; PALETTE_SLOTS] {
        match self {
            Self::Primary => &PRIMARY,
            Self::Secondary => &SECONDARY,
            Self::Accent => &ACCENT,
            Self::Neutral => &NEUTRAL,
        }
    }

    /// Color of the bucket `value` falls into.
    pub fn color_for(self, value: f64) -> Rgb8 {
        self.colors()[bucket_index(value)]
    }
}

/// Bucket index in `0..PALETTE_SLOTS`; NaN lands in the first bucket.
pub fn bucket_index(value: f64) -> usize {
    if value.is_nan() {
        return 0;
    }
    BUCKET_BREAKPOINTS
        .iter()
        .position(|&bp| value < bp)
        .unwrap_or(BUCKET_BREAKPOINTS.len())
}

#[cfg(test)]
#[path = "../../tests/unit/classify/palette.rs"]
mod tests;
