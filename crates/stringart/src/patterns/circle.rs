//! Circular boards: one ring of slit-and-hole motifs, or two concentric rings.

use serde::{Deserialize, Serialize};

use super::{default_hole_radius, default_slit_length, hole_motif};
use crate::error::{ensure_count, ensure_non_negative, ensure_positive, PatternError, Result};
use crate::geom::{Shape, Style};
use crate::layout::{cycle, union};

/// Parameters for `circle_pattern`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleParams {
    pub radius: f64,
    pub num_holes: usize,
    #[serde(default = "default_hole_radius")]
    pub hole_radius: f64,
    #[serde(default = "default_slit_length")]
    pub slit_length: f64,
}

impl CircleParams {
    /// Default hole radius and slit length.
    pub fn new(radius: f64, num_holes: usize) -> Self {
        Self {
            radius,
            num_holes,
            hole_radius: default_hole_radius(),
            slit_length: default_slit_length(),
        }
    }

    /// Distance from the centre to every hole centre.
    #[inline]
    pub fn hole_distance(&self) -> f64 {
        self.radius - self.slit_length - self.hole_radius
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("radius", self.radius)?;
        ensure_count("num_holes", self.num_holes, 1)?;
        check_ring(self.radius, self.hole_radius, self.slit_length)
    }
}

/// Parameters for `concentric_circle_pattern`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcentricParams {
    pub radius: f64,
    /// Holes on the outer ring.
    pub n1: usize,
    /// Holes on the inner ring (at `radius / 2`).
    pub n2: usize,
    #[serde(default = "default_hole_radius")]
    pub hole_radius: f64,
    /// Outer slit clearance; the inner ring uses half of it.
    #[serde(default = "default_slit_length")]
    pub slit_length: f64,
}

impl ConcentricParams {
    pub fn new(radius: f64, n1: usize, n2: usize) -> Self {
        Self {
            radius,
            n1,
            n2,
            hole_radius: default_hole_radius(),
            slit_length: default_slit_length(),
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("radius", self.radius)?;
        ensure_count("n1", self.n1, 1)?;
        ensure_count("n2", self.n2, 1)?;
        check_ring(self.radius, self.hole_radius, self.slit_length)?;
        check_ring(self.radius / 2.0, self.hole_radius, self.slit_length / 2.0)
    }
}

/// Hole radius plus slit length must stay strictly inside `radius`.
fn check_ring(radius: f64, hole_radius: f64, slit_length: f64) -> Result<()> {
    ensure_positive("hole_radius", hole_radius)?;
    ensure_non_negative("slit_length", slit_length)?;
    if hole_radius + slit_length >= radius {
        return Err(PatternError::overflow(format!(
            "hole radius {hole_radius} + slit {slit_length} does not fit inside radius {radius}"
        )));
    }
    Ok(())
}

/// `n` motifs with their slit ends on the circle of `radius`, pointing inward.
fn motif_ring(radius: f64, n: usize, hole_radius: f64, slit_length: f64) -> Result<Shape> {
    let motif = hole_motif(hole_radius, slit_length).translate(0.0, -radius);
    cycle(&motif, n)
}

/// Boundary circle plus `num_holes` inward slit-and-hole motifs.
///
/// Hole centres sit at `radius - slit_length - hole_radius`; slits run from
/// `radius` inward by `slit_length`; copies are `360/num_holes` degrees apart.
pub fn circle_pattern(p: &CircleParams) -> Result<Shape> {
    p.validate()?;
    let boundary = Shape::circle(0.0, 0.0, p.radius, Style::Guide);
    let holes = motif_ring(p.radius, p.num_holes, p.hole_radius, p.slit_length)?;
    Ok(union([boundary, holes]))
}

/// Boundary circle, `n1` motifs at `radius`, `n2` motifs at `radius / 2`.
///
/// The rings are cycled independently; the inner ring uses half the slit clearance.
pub fn concentric_circle_pattern(p: &ConcentricParams) -> Result<Shape> {
    p.validate()?;
    let boundary = Shape::circle(0.0, 0.0, p.radius, Style::Guide);
    let outer = motif_ring(p.radius, p.n1, p.hole_radius, p.slit_length)?;
    let inner = motif_ring(p.radius / 2.0, p.n2, p.hole_radius, p.slit_length / 2.0)?;
    Ok(union([boundary, outer, inner]))
}
