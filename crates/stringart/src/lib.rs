//! Parametric shape composition for string-art drilling templates.
//!
//! Layers, leaves first:
//! - `geom`: primitives (segment, circle, rectangle), affine transforms, the
//!   immutable `Shape` tree and its flattening into world-space primitives.
//! - `layout`: `union`, `cycle` (radial copies), `row` and `centered_row`
//!   (linear copies).
//! - `patterns`: one generator per template family (circle, concentric,
//!   polygon, star, flower, square-plus).
//!
//! All lengths are millimetres. Conversion to drawing units happens once, at
//! render time, through `units::MM`.

pub mod error;
pub mod geom;
pub mod layout;
pub mod patterns;
pub mod units;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{PatternError, Result};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{PatternError, Result};
    pub use crate::geom::{flatten, Affine2, Bounds2, Flat, Placed, Primitive, Shape, Style};
    pub use crate::layout::{centered_row, centered_row_step, cycle, row, union};
    pub use crate::patterns::{
        circle_pattern, concentric_circle_pattern, flower_pattern, hole_motif, polygon_pattern,
        square_plus_pattern, star_pattern, CircleParams, ConcentricParams, FlowerParams,
        PatternSpec, PolygonParams, SquarePlusParams, StarParams,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
