//! Concentration classification: value to AQI category or palette slot, each bound to a fixed
//! color. Pure and total; out-of-range values clamp to the first or last bucket.

pub(crate) mod aqi;
pub(crate) mod palette;

use crate::classify::aqi::AqiCategory;
use crate::classify::palette::PaletteFamily;
use crate::foundation::core::Rgb8;

/// Outcome of [`classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Air-quality level, when no palette family was requested.
    Aqi(AqiCategory),
    /// Palette slot within a family.
    Slot {
        /// Requested family.
        family: PaletteFamily,
        /// Bucket index in `0..PALETTE_SLOTS`.
        index: usize,
    },
}

impl Classification {
    /// Fixed color bound to the category or slot.
    pub fn color(self) -> Rgb8 {
        match self {
            Self::Aqi(c) => c.color(),
            Self::Slot { family, index } => family.colors()[index],
        }
    }
}

/// Classify a concentration: AQI category without a family, palette slot with one.
pub fn classify(value: f64, family: Option<PaletteFamily>) -> Classification {
    match family {
        None => Classification::Aqi(AqiCategory::classify(value)),
        Some(family) => Classification::Slot {
            family,
            index: palette::bucket_index(value),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/mod.rs"]
mod tests;
