//! Combinators: ordered union plus radial and linear replication.
//!
//! - `union`: ordered group of shapes, no dedup.
//! - `cycle`: `n` copies rotated by `i·360/n` degrees about the origin.
//! - `row`: `n` copies translated by `i·(xshift, yshift)`; `n = 0` is an empty group.
//! - `centered_row`: a row of `n` holes on a segment of `length` centred on the
//!   origin, first and last hole inset `gap` steps from the segment ends.
//!
//! Code cross-refs: `crate::patterns` (every generator is built from these).

use crate::error::{ensure_count, ensure_non_negative, ensure_positive, PatternError, Result};
use crate::geom::{Affine2, Shape};

/// Ordered group of `shapes`.
pub fn union<I: IntoIterator<Item = Shape>>(shapes: I) -> Shape {
    Shape::Group {
        children: shapes.into_iter().collect(),
        transform: Affine2::identity(),
    }
}

/// `n` copies of `shape` evenly rotated about the origin; copy 0 is unrotated.
pub fn cycle(shape: &Shape, n: usize) -> Result<Shape> {
    ensure_count("cycle copies", n, 1)?;
    let nf = n as f64;
    Ok(union(
        (0..n).map(|i| shape.clone().rotate(i as f64 * 360.0 / nf)),
    ))
}

/// `n` copies of `shape`, copy `i` translated by `(i·xshift, i·yshift)`.
pub fn row(shape: &Shape, n: usize, xshift: f64, yshift: f64) -> Shape {
    union((0..n).map(|i| {
        let k = i as f64;
        shape.clone().translate(k * xshift, k * yshift)
    }))
}

/// Hole spacing of a centred row: `length / (n - 1 + 2·gap)`.
pub fn centered_row_step(n: usize, length: f64, gap: f64) -> Result<f64> {
    ensure_count("row holes", n, 1)?;
    ensure_positive("row length", length)?;
    ensure_non_negative("row gap", gap)?;
    let denom = (n - 1) as f64 + 2.0 * gap;
    if denom <= 0.0 {
        return Err(PatternError::invalid(format!(
            "row of {n} hole(s) with gap {gap} has no spacing"
        )));
    }
    Ok(length / denom)
}

/// Row of `n` holes along x, centred on the origin.
///
/// Hole `i` sits at `x = -length/2 + (gap + i)·step`. With `gap = 0` the end
/// holes land exactly on `±length/2`.
pub fn centered_row(hole: &Shape, n: usize, length: f64, gap: f64) -> Result<Shape> {
    let step = centered_row_step(n, length, gap)?;
    Ok(row(hole, n, step, 0.0).translate(-length / 2.0 + gap * step, 0.0))
}
