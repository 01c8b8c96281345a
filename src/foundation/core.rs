use std::fmt;

use crate::foundation::error::{AirglyphError, AirglyphResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Wall-clock timestamp of a record, without a timezone (stations share one local clock).
pub type Timestamp = chrono::NaiveDateTime;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas; both sides must fit the rasterizer's `u16` surface limits.
    pub fn new(width: u32, height: u32) -> AirglyphResult<Self> {
        let c = Self { width, height };
        c.validate()?;
        Ok(c)
    }

    /// Reject zero-sized or oversized canvases.
    pub fn validate(self) -> AirglyphResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AirglyphError::validation("canvas width/height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(AirglyphError::validation(
                "canvas width/height must be <= 65535",
            ));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
        }
    }
}

/// Opaque sRGB color. Every color the crate produces comes from a fixed table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white, used for the highlight inside circle halos.
    pub const WHITE: Self = Self::from_hex(0xFFFFFF);
    /// Cyan, used for the wind arrow.
    pub const CYAN: Self = Self::from_hex(0x00FFFF);

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Straight-alpha RGBA8 with `alpha` in `[0,1]` (clamped).
    pub fn with_alpha(self, alpha: f64) -> [u8; 4] {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, a]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
