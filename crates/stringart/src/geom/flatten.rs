//! Tree evaluation: apply all pending transforms and emit world-space primitives.
//!
//! - Segments map endpoint-wise.
//! - Circles stay circles under similarities (rotation, uniform scale, flips)
//!   and become ellipses otherwise.
//! - Rectangles become 4-point polygons (counter-clockwise in local coordinates).

use nalgebra::Vector2;

use super::affine::Affine2;
use super::shape::{Primitive, Shape, Style};

/// Tolerance used to decide whether a transform keeps circles round.
const SIMILARITY_EPS: f64 = 1e-12;

/// World-space geometry of one flattened primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Flat {
    Segment {
        a: Vector2<f64>,
        b: Vector2<f64>,
    },
    Circle {
        center: Vector2<f64>,
        r: f64,
    },
    /// `radii = (major, minor)`; `rotation_deg` is the major axis direction.
    Ellipse {
        center: Vector2<f64>,
        radii: Vector2<f64>,
        rotation_deg: f64,
    },
    Polygon {
        points: Vec<Vector2<f64>>,
    },
}

/// Flattened primitive plus its style.
#[derive(Clone, Debug, PartialEq)]
pub struct Placed {
    pub geom: Flat,
    pub style: Style,
}

impl Placed {
    /// Conservative bounding box.
    pub fn bounds(&self) -> Bounds2 {
        match &self.geom {
            Flat::Segment { a, b } => Bounds2::from_points([*a, *b]),
            Flat::Circle { center, r } => Bounds2::around(*center, *r),
            Flat::Ellipse { center, radii, .. } => Bounds2::around(*center, radii.x),
            Flat::Polygon { points } => Bounds2::from_points(points.iter().copied()),
        }
    }
}

/// Axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    fn around(c: Vector2<f64>, r: f64) -> Self {
        let d = Vector2::new(r.abs(), r.abs());
        Self {
            min: c - d,
            max: c + d,
        }
    }

    fn from_points<I: IntoIterator<Item = Vector2<f64>>>(points: I) -> Self {
        let mut b = Self {
            min: Vector2::repeat(f64::INFINITY),
            max: Vector2::repeat(f64::NEG_INFINITY),
        };
        for p in points {
            b.min = b.min.inf(&p);
            b.max = b.max.sup(&p);
        }
        b
    }

    pub fn union(&self, other: &Bounds2) -> Bounds2 {
        Bounds2 {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Grow by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Bounds2 {
        let d = Vector2::repeat(margin);
        Bounds2 {
            min: self.min - d,
            max: self.max + d,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Bounding box of a flattened list; `None` when empty.
    pub fn of(items: &[Placed]) -> Option<Bounds2> {
        items
            .iter()
            .map(Placed::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

/// Flatten `shape` into world-space primitives in draw order.
pub fn flatten(shape: &Shape) -> Vec<Placed> {
    let mut out = Vec::with_capacity(shape.primitive_count());
    walk(shape, &Affine2::identity(), &mut out);
    out
}

fn walk(shape: &Shape, acc: &Affine2, out: &mut Vec<Placed>) {
    match shape {
        Shape::Primitive(p) => out.push(place(p, acc)),
        Shape::Group {
            children,
            transform,
        } => {
            let inner = acc.compose(transform);
            for child in children {
                walk(child, &inner, out);
            }
        }
    }
}

fn place(p: &Primitive, f: &Affine2) -> Placed {
    let geom = match *p {
        Primitive::Segment { a, b, .. } => Flat::Segment {
            a: f.apply(a),
            b: f.apply(b),
        },
        Primitive::Circle { center, r, .. } => {
            let center = f.apply(center);
            match f.similarity_scale(SIMILARITY_EPS) {
                Some(s) => Flat::Circle { center, r: r * s },
                None => match f.unit_circle_image() {
                    Some((axes, rotation_deg)) => Flat::Ellipse {
                        center,
                        radii: axes * r,
                        rotation_deg,
                    },
                    // SVD only fails on non-finite input; keep the centre visible.
                    None => Flat::Circle { center, r: 0.0 },
                },
            }
        }
        Primitive::Rect { center, w, h, .. } => {
            let (hw, hh) = (w / 2.0, h / 2.0);
            let corners = [
                Vector2::new(-hw, -hh),
                Vector2::new(hw, -hh),
                Vector2::new(hw, hh),
                Vector2::new(-hw, hh),
            ];
            Flat::Polygon {
                points: corners.iter().map(|c| f.apply(center + c)).collect(),
            }
        }
    };
    Placed {
        geom,
        style: p.style(),
    }
}
