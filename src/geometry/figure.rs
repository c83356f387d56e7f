use std::fmt;

use crate::math::polygon_2d::{perimeter_2d, signed_area_2d};
use crate::math::Point2;

/// The closed catalog of figure variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Triangle,
    Rectangle,
    Quadrilateral,
    Polygon,
}

impl FigureKind {
    /// Every variant, in catalog order.
    pub const ALL: [FigureKind; 4] = [
        FigureKind::Triangle,
        FigureKind::Rectangle,
        FigureKind::Quadrilateral,
        FigureKind::Polygon,
    ];

    /// Returns the persisted tag of this variant.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Rectangle => "rectangle",
            Self::Quadrilateral => "quadrilateral",
            Self::Polygon => "polygon",
        }
    }

    /// Looks up a variant by its persisted tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Winding direction of a figure's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

/// Three non-collinear points.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    points: [Point2; 3],
}

/// Four points forming a simple quadrilateral with right angles at every corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    points: [Point2; 4],
}

/// Four points forming any other simple quadrilateral.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrilateral {
    points: [Point2; 4],
}

/// Five or more points forming a simple polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

/// A validated, immutable planar figure.
///
/// Values are only produced by [`FigureFactory`](crate::operations::creation::FigureFactory),
/// so every `Figure` satisfies its variant's invariants. Points keep the order
/// they were supplied in, which is the boundary traversal order.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Quadrilateral(Quadrilateral),
    Polygon(Polygon),
}

impl Figure {
    /// Wraps already-validated points into the variant named by `kind`.
    ///
    /// Returns `None` if the point count does not fit the variant.
    pub(crate) fn from_validated(kind: FigureKind, points: &[Point2]) -> Option<Self> {
        let figure = match kind {
            FigureKind::Triangle => Self::Triangle(Triangle {
                points: points.try_into().ok()?,
            }),
            FigureKind::Rectangle => Self::Rectangle(Rectangle {
                points: points.try_into().ok()?,
            }),
            FigureKind::Quadrilateral => Self::Quadrilateral(Quadrilateral {
                points: points.try_into().ok()?,
            }),
            FigureKind::Polygon if points.len() >= 5 => Self::Polygon(Polygon {
                points: points.to_vec(),
            }),
            FigureKind::Polygon => return None,
        };
        Some(figure)
    }

    /// Returns the variant of this figure.
    #[must_use]
    pub fn kind(&self) -> FigureKind {
        match self {
            Self::Triangle(_) => FigureKind::Triangle,
            Self::Rectangle(_) => FigureKind::Rectangle,
            Self::Quadrilateral(_) => FigureKind::Quadrilateral,
            Self::Polygon(_) => FigureKind::Polygon,
        }
    }

    /// Returns the persisted tag of this figure's variant.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.kind().tag()
    }

    /// Returns the boundary points in their original order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::Triangle(t) => &t.points,
            Self::Rectangle(r) => &r.points,
            Self::Quadrilateral(q) => &q.points,
            Self::Polygon(p) => &p.points,
        }
    }

    /// Returns the number of boundary points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points().len()
    }

    /// Signed enclosed area; positive for counter-clockwise boundaries.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(self.points())
    }

    /// Enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Length of the closed boundary.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(self.points())
    }

    /// Winding direction of the boundary.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

#[cfg(test)]
impl Figure {
    /// Builds a polygon without validation, for exercising downstream guards.
    pub(crate) fn polygon_unchecked(points: Vec<Point2>) -> Self {
        Self::Polygon(Polygon { points })
    }
}
