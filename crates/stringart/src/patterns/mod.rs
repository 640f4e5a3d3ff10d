//! Template generators, one per board family.
//!
//! Purpose
//! - Map a small parameter struct (millimetres) to a finished `Shape`.
//! - Validate everything up front: a generator returns either a complete
//!   template or a `PatternError`, never a partial drawing.
//!
//! Conventions
//! - Boundaries and side guides use `Style::Guide`, holes and slits `Style::Hole`.
//! - Motifs are built with their anchor at the origin and then rotated in
//!   place by `cycle`.
//! - Angle 0 of circle-like boards is the negative y axis (bottom of the board);
//!   stars and flowers start their first spoke on the positive x axis.
//!
//! Code cross-refs: `crate::layout::{cycle,row,centered_row}`

mod circle;
mod polygon;
mod square_plus;
mod star;

pub use circle::{circle_pattern, concentric_circle_pattern, CircleParams, ConcentricParams};
pub use polygon::{polygon_apothem, polygon_pattern, PolygonParams};
pub use square_plus::{square_plus_pattern, SquarePlusParams};
pub use star::{flower_pattern, star_pattern, FlowerParams, StarParams};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geom::{Shape, Style};
use crate::layout::union;

/// Slit-and-hole motif anchored at the origin.
///
/// A slit from `(0, 0)` to `(0, slit_length)` and a hole of `hole_radius`
/// centred at `(0, slit_length + hole_radius)`, so the hole lies along `+y`.
pub fn hole_motif(hole_radius: f64, slit_length: f64) -> Shape {
    union([
        Shape::segment(0.0, 0.0, 0.0, slit_length, Style::Hole),
        Shape::circle(0.0, slit_length + hole_radius, hole_radius, Style::Hole),
    ])
}

/// Plain hole centred on the origin.
pub(crate) fn pin_hole(hole_radius: f64) -> Shape {
    Shape::circle(0.0, 0.0, hole_radius, Style::Hole)
}

/// Any template, tagged by family (`"pattern": "circle"`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
pub enum PatternSpec {
    Circle(CircleParams),
    Concentric(ConcentricParams),
    Polygon(PolygonParams),
    Star(StarParams),
    Flower(FlowerParams),
    SquarePlus(SquarePlusParams),
}

impl PatternSpec {
    pub fn build(&self) -> Result<Shape> {
        match self {
            PatternSpec::Circle(p) => circle_pattern(p),
            PatternSpec::Concentric(p) => concentric_circle_pattern(p),
            PatternSpec::Polygon(p) => polygon_pattern(p),
            PatternSpec::Star(p) => star_pattern(p),
            PatternSpec::Flower(p) => flower_pattern(p),
            PatternSpec::SquarePlus(p) => square_plus_pattern(p),
        }
    }

    /// Family name as used in catalogue files.
    pub fn kind(&self) -> &'static str {
        match self {
            PatternSpec::Circle(_) => "circle",
            PatternSpec::Concentric(_) => "concentric",
            PatternSpec::Polygon(_) => "polygon",
            PatternSpec::Star(_) => "star",
            PatternSpec::Flower(_) => "flower",
            PatternSpec::SquarePlus(_) => "square_plus",
        }
    }
}

// serde default helpers
fn default_hole_radius() -> f64 {
    crate::units::HOLE_RADIUS
}
fn default_slit_length() -> f64 {
    crate::units::SLIT_LENGTH
}
fn default_pin_hole_radius() -> f64 {
    crate::units::PIN_HOLE_RADIUS
}
fn default_gap_in_steps() -> f64 {
    crate::units::GAP_IN_STEPS
}
