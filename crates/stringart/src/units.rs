//! Length units and template defaults (millimetres).
//!
//! Policy
//! - Generators work in millimetres only. The single conversion to drawing
//!   units is `MM`, applied by the renderer.

/// Drawing user units per millimetre (300 px per 79.375 mm).
pub const MM: f64 = 300.0 / 79.375;

/// Default hole radius for slit-and-hole motifs.
pub const HOLE_RADIUS: f64 = 1.0;
/// Default slit length between the board edge and a hole.
pub const SLIT_LENGTH: f64 = 4.0;
/// Default radius of the plain holes used by stars, flowers and square-plus.
pub const PIN_HOLE_RADIUS: f64 = 0.6;
/// Default inset, in steps, of the first and last hole on a polygon side.
pub const GAP_IN_STEPS: f64 = 1.5;

/// Millimetres to drawing units.
#[inline]
pub fn mm(v: f64) -> f64 {
    v * MM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inch_is_96_units() {
        // 25.4 mm = 1 in = 96 CSS px
        assert!((mm(25.4) - 96.0).abs() < 1e-9);
    }
}
