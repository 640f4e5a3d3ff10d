//! 2D primitives, affine maps and the immutable shape tree.
//!
//! Purpose
//! - `Shape` is a tree of `Primitive` leaves and `Group` nodes; every group
//!   carries one pending `Affine2` that applies to all its descendants.
//! - `flatten` evaluates the tree into world-space primitives (innermost
//!   transform first), the form a renderer consumes.
//!
//! Conventions
//! - y axis up, rotation in degrees, counter-clockwise, always about the origin.
//! - Shapes are values: transforming or combining moves/clones, never mutates.
//!
//! Code cross-refs: `crate::layout`, `crate::patterns`

mod affine;
mod flatten;
mod shape;

pub use affine::Affine2;
pub use flatten::{flatten, Bounds2, Flat, Placed};
pub use shape::{Primitive, Shape, Style};
