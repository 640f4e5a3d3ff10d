//! Square boards with holes along the four sides and a "+" through the centre.
//!
//! Geometry (pitch `p = side / (2n + 2)` for `n = num_holes`)
//! - sides: `2n + 1` holes at `x = k·p`, `k = -n..=n`, on the line `p/2`
//!   inside the bottom edge, rotated to all four sides;
//! - cross: `n - 1` holes per arm at `p, 2p, …`, four arms, plus the centre hole.

use serde::{Deserialize, Serialize};

use super::{default_pin_hole_radius, pin_hole};
use crate::error::{derived_count, ensure_count, ensure_positive, PatternError, Result};
use crate::geom::{Shape, Style};
use crate::layout::{centered_row, cycle, row, union};

/// Parameters for `square_plus_pattern`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SquarePlusParams {
    pub side_length: f64,
    pub num_holes: usize,
    #[serde(default = "default_pin_hole_radius")]
    pub hole_radius: f64,
}

impl SquarePlusParams {
    pub fn new(side_length: f64, num_holes: usize) -> Self {
        Self {
            side_length,
            num_holes,
            hole_radius: default_pin_hole_radius(),
        }
    }

    /// Grid pitch shared by the side rows and the cross.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.side_length / (2.0 * self.num_holes as f64 + 2.0)
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("side_length", self.side_length)?;
        ensure_positive("hole_radius", self.hole_radius)?;
        ensure_count("num_holes", self.num_holes, 0)?;
        if self.num_holes >= 1 {
            derived_count(
                "side holes",
                self.num_holes
                    .checked_mul(2)
                    .and_then(|k| k.checked_add(1)),
                1,
            )?;
        }
        // Corner holes of neighbouring side rows are p·√2/2 apart; the edge inset p/2 is looser.
        let limit = self.pitch() * std::f64::consts::SQRT_2 / 4.0;
        if self.hole_radius >= limit {
            return Err(PatternError::overflow(format!(
                "hole radius {} overlaps the corner holes (limit {limit})",
                self.hole_radius
            )));
        }
        Ok(())
    }
}

/// Square boundary, side rows, centre cross and centre hole.
///
/// `num_holes = 0` leaves the boundary and the centre hole; `num_holes = 1`
/// adds the side rows but the cross arms stay empty.
pub fn square_plus_pattern(p: &SquarePlusParams) -> Result<Shape> {
    p.validate()?;
    let n = p.num_holes;
    let s = p.side_length;
    let pitch = p.pitch();
    let hole = pin_hole(p.hole_radius);

    let mut parts = vec![Shape::rectangle(s, s, 0.0, 0.0, Style::Guide)];
    if n >= 1 {
        let side = centered_row(&hole, 2 * n + 1, s, 1.0)?.translate(0.0, -s / 2.0 + pitch / 2.0);
        parts.push(cycle(&side, 4)?);
    }
    if n >= 2 {
        let arm = row(&hole, n - 1, pitch, 0.0).translate(pitch, 0.0);
        parts.push(cycle(&arm, 4)?);
    }
    parts.push(hole);
    Ok(union(parts))
}
