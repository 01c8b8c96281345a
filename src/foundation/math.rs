use crate::foundation::core::Vec2;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Wrap an angle in degrees into `[0, 360)`. Non-finite input maps to `0`.
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Unit vector for a math-convention angle (0° = +x, counter-clockwise).
pub(crate) fn unit_from_degrees(deg: f64) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Circular mean of angles in degrees, or `None` when empty or the vectors cancel out.
pub(crate) fn circular_mean_degrees(angles: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = Vec2::ZERO;
    let mut n = 0usize;
    for a in angles {
        sum += unit_from_degrees(a);
        n += 1;
    }
    if n == 0 || sum.hypot() < 1e-9 {
        return None;
    }
    Some(wrap_degrees(sum.y.atan2(sum.x).to_degrees()))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
