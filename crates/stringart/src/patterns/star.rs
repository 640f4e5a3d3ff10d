//! Star boards (holes along radial spokes) and flowers (spokes plus an outer ring).

use serde::{Deserialize, Serialize};

use super::{default_pin_hole_radius, pin_hole};
use crate::error::{derived_count, ensure_count, ensure_positive, PatternError, Result};
use crate::geom::{Shape, Style};
use crate::layout::{cycle, row, union};

/// Parameters for `star_pattern`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarParams {
    pub radius: f64,
    pub spokes: usize,
    pub num_holes: usize,
    #[serde(default = "default_pin_hole_radius")]
    pub hole_radius: f64,
    /// Leave the outermost position of every spoke empty.
    #[serde(default)]
    pub skip_last_hole: bool,
}

impl StarParams {
    pub fn new(radius: f64, spokes: usize, num_holes: usize) -> Self {
        Self {
            radius,
            spokes,
            num_holes,
            hole_radius: default_pin_hole_radius(),
            skip_last_hole: false,
        }
    }

    /// Radial distance between consecutive holes on a spoke.
    #[inline]
    pub fn step(&self) -> f64 {
        self.radius / (self.num_holes as f64 + 1.0)
    }
}

/// Parameters for `flower_pattern`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerParams {
    pub radius: f64,
    pub petals: usize,
    pub num_holes: usize,
    #[serde(default = "default_pin_hole_radius")]
    pub hole_radius: f64,
}

impl FlowerParams {
    pub fn new(radius: f64, petals: usize, num_holes: usize) -> Self {
        Self {
            radius,
            petals,
            num_holes,
            hole_radius: default_pin_hole_radius(),
        }
    }

    fn as_star(&self) -> StarParams {
        StarParams {
            radius: self.radius,
            spokes: self.petals,
            num_holes: self.num_holes,
            hole_radius: self.hole_radius,
            skip_last_hole: true,
        }
    }
}

fn validate_spokes(p: &StarParams) -> Result<()> {
    ensure_positive("radius", p.radius)?;
    ensure_count("spokes", p.spokes, 1)?;
    ensure_count("num_holes", p.num_holes, 1)?;
    ensure_positive("hole_radius", p.hole_radius)?;
    let step = p.step();
    if p.hole_radius >= step {
        return Err(PatternError::overflow(format!(
            "hole radius {} does not fit the spoke step {step}",
            p.hole_radius
        )));
    }
    Ok(())
}

/// Boundary circle and `spokes` rows of holes; assumes `p` is validated.
fn build_star(p: &StarParams) -> Result<Shape> {
    let step = p.step();
    let count = if p.skip_last_hole {
        p.num_holes - 1
    } else {
        p.num_holes
    };
    let boundary = Shape::circle(0.0, 0.0, p.radius, Style::Guide);
    let spoke = row(&pin_hole(p.hole_radius), count, step, 0.0).translate(step, 0.0);
    Ok(union([boundary, cycle(&spoke, p.spokes)?]))
}

/// Boundary circle plus `spokes` radial rows of holes, `radius/(num_holes+1)` apart,
/// starting one step from the centre.
pub fn star_pattern(p: &StarParams) -> Result<Shape> {
    validate_spokes(p)?;
    if p.skip_last_hole && p.num_holes < 2 {
        return Err(PatternError::invalid(
            "skip_last_hole needs num_holes >= 2",
        ));
    }
    build_star(p)
}

/// Star with the last spoke hole vacated, plus a ring of `petals·(num_holes+1)`
/// holes at `radius - step` passing through the vacated spoke tips.
pub fn flower_pattern(p: &FlowerParams) -> Result<Shape> {
    let star = p.as_star();
    validate_spokes(&star)?;
    let ring_count = derived_count(
        "ring holes",
        p.num_holes
            .checked_add(1)
            .and_then(|k| k.checked_mul(p.petals)),
        1,
    )?;
    let step = star.step();
    let ring_hole = pin_hole(p.hole_radius).translate(p.radius - step, 0.0);
    Ok(union([build_star(&star)?, cycle(&ring_hole, ring_count)?]))
}
