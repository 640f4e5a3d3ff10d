//! Regular polygon boards with a row of motifs along every side.

use serde::{Deserialize, Serialize};

use super::{default_gap_in_steps, default_hole_radius, default_slit_length, hole_motif};
use crate::error::{ensure_count, ensure_non_negative, ensure_positive, PatternError, Result};
use crate::geom::{Shape, Style};
use crate::layout::{centered_row, centered_row_step, cycle, union};

/// Parameters for `polygon_pattern`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonParams {
    pub sides: usize,
    pub side_length: f64,
    pub num_holes: usize,
    #[serde(default = "default_hole_radius")]
    pub hole_radius: f64,
    #[serde(default = "default_slit_length")]
    pub slit_length: f64,
    /// Inset of the first/last hole from the side's ends, in hole steps.
    #[serde(default = "default_gap_in_steps")]
    pub gap_in_steps: f64,
}

impl PolygonParams {
    pub fn new(sides: usize, side_length: f64, num_holes: usize) -> Self {
        Self {
            sides,
            side_length,
            num_holes,
            hole_radius: default_hole_radius(),
            slit_length: default_slit_length(),
            gap_in_steps: default_gap_in_steps(),
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_count("sides", self.sides, 3)?;
        ensure_positive("side_length", self.side_length)?;
        ensure_positive("hole_radius", self.hole_radius)?;
        ensure_non_negative("slit_length", self.slit_length)?;
        centered_row_step(self.num_holes, self.side_length, self.gap_in_steps)?;
        let d = polygon_apothem(self.sides, self.side_length);
        let depth = self.slit_length + 2.0 * self.hole_radius;
        if depth >= d {
            return Err(PatternError::overflow(format!(
                "motif depth {depth} reaches the centre (apothem {d})"
            )));
        }
        Ok(())
    }
}

/// Distance from the centre of a regular `n`-gon to the midpoint of each side.
#[inline]
pub fn polygon_apothem(n: usize, side_length: f64) -> f64 {
    (side_length / 2.0) / (std::f64::consts::PI / n as f64).tan()
}

/// Regular `sides`-gon: each side a guide line plus a centred row of motifs
/// whose slits point toward the interior; sides are rotated copies of the bottom one.
pub fn polygon_pattern(p: &PolygonParams) -> Result<Shape> {
    p.validate()?;
    let half = p.side_length / 2.0;
    let d = polygon_apothem(p.sides, p.side_length);

    let guide = Shape::segment(-half, 0.0, half, 0.0, Style::Guide);
    let motif = hole_motif(p.hole_radius, p.slit_length);
    let holes = centered_row(&motif, p.num_holes, p.side_length, p.gap_in_steps)?;

    let side = union([guide, holes]).translate(0.0, -d);
    cycle(&side, p.sides)
}
