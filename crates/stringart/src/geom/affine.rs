//! 2D affine map `x ↦ M x + t` with the three constructors shapes need.
//!
//! - `translation`, `rotation_deg` (about the origin), `scaling`.
//! - `compose` is ordinary function composition and therefore associative.

use nalgebra::{Matrix2, Vector2, SVD};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }
    /// Counter-clockwise rotation by `degrees` about the origin.
    #[inline]
    pub fn rotation_deg(degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// `self ∘ inner`: apply `inner` first, then `self`.
    #[inline]
    pub fn compose(&self, inner: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * inner.m,
            t: self.m * inner.t + self.t,
        }
    }

    /// `outer ∘ self`: apply `self` first, then `outer`.
    #[inline]
    pub fn then(&self, outer: &Affine2) -> Affine2 {
        outer.compose(self)
    }

    /// Uniform scale factor `s` if `M = s Q` with `Q` orthogonal (reflections allowed).
    ///
    /// Relative tolerance `eps` on the entries of `MᵀM`.
    pub fn similarity_scale(&self, eps: f64) -> Option<f64> {
        let g = self.m.transpose() * self.m;
        let tol = eps * g[(0, 0)].abs().max(g[(1, 1)].abs()).max(1.0);
        if (g[(0, 0)] - g[(1, 1)]).abs() <= tol && g[(0, 1)].abs() <= tol {
            Some(g[(0, 0)].max(0.0).sqrt())
        } else {
            None
        }
    }

    /// Semi-axes and major-axis angle (degrees) of the image of the unit circle.
    ///
    /// From the SVD `M = U Σ Vᵀ`: the axes are `Σ`, their directions the columns of `U`.
    pub fn unit_circle_image(&self) -> Option<(Vector2<f64>, f64)> {
        let svd = SVD::new(self.m, true, false);
        let u = svd.u?;
        let s = svd.singular_values;
        let (major, minor, col) = if s[0] >= s[1] {
            (s[0], s[1], 0)
        } else {
            (s[1], s[0], 1)
        };
        let angle = u[(1, col)].atan2(u[(0, col)]).to_degrees();
        Some((Vector2::new(major, minor), angle))
    }
}
