//! Leaf primitives, style tags and the `Shape` tree.

use nalgebra::Vector2;

use super::affine::Affine2;

/// Stroke role of a primitive. Nothing is ever filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Board outlines and side guides (red).
    Guide,
    /// Holes and slits to drill or cut (black).
    Hole,
}

impl Style {
    #[inline]
    pub fn stroke(self) -> &'static str {
        match self {
            Style::Guide => "red",
            Style::Hole => "black",
        }
    }
}

/// Drawable leaf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Segment {
        a: Vector2<f64>,
        b: Vector2<f64>,
        style: Style,
    },
    Circle {
        center: Vector2<f64>,
        r: f64,
        style: Style,
    },
    /// Axis-aligned rectangle of size `w × h` around `center`.
    Rect {
        center: Vector2<f64>,
        w: f64,
        h: f64,
        style: Style,
    },
}

impl Primitive {
    #[inline]
    pub fn style(&self) -> Style {
        match *self {
            Primitive::Segment { style, .. }
            | Primitive::Circle { style, .. }
            | Primitive::Rect { style, .. } => style,
        }
    }
}

/// Immutable shape tree.
///
/// Invariants:
/// - A `Group` draws its children in order; order only affects stacking.
/// - `transform` applies to every descendant, after the descendants' own transforms.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Primitive(Primitive),
    Group {
        children: Vec<Shape>,
        transform: Affine2,
    },
}

impl Shape {
    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64, style: Style) -> Self {
        Shape::Primitive(Primitive::Segment {
            a: Vector2::new(x1, y1),
            b: Vector2::new(x2, y2),
            style,
        })
    }

    pub fn circle(cx: f64, cy: f64, r: f64, style: Style) -> Self {
        Shape::Primitive(Primitive::Circle {
            center: Vector2::new(cx, cy),
            r,
            style,
        })
    }

    pub fn rectangle(w: f64, h: f64, cx: f64, cy: f64, style: Style) -> Self {
        Shape::Primitive(Primitive::Rect {
            center: Vector2::new(cx, cy),
            w,
            h,
            style,
        })
    }

    /// Group with no children.
    pub fn empty() -> Self {
        Shape::Group {
            children: Vec::new(),
            transform: Affine2::identity(),
        }
    }

    /// Wrap `self` in a group carrying `transform`.
    pub fn transformed(self, transform: Affine2) -> Self {
        Shape::Group {
            children: vec![self],
            transform,
        }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        self.transformed(Affine2::translation(dx, dy))
    }

    /// Rotate about the origin (not the shape's centroid).
    pub fn rotate(self, degrees: f64) -> Self {
        self.transformed(Affine2::rotation_deg(degrees))
    }

    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.transformed(Affine2::scaling(sx, sy))
    }

    /// Number of primitive leaves in the tree.
    pub fn primitive_count(&self) -> usize {
        match self {
            Shape::Primitive(_) => 1,
            Shape::Group { children, .. } => children.iter().map(Shape::primitive_count).sum(),
        }
    }

    /// Leaves with the given style.
    pub fn count_style(&self, style: Style) -> usize {
        match self {
            Shape::Primitive(p) => usize::from(p.style() == style),
            Shape::Group { children, .. } => children.iter().map(|c| c.count_style(style)).sum(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
