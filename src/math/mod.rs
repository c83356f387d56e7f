pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global relative tolerance for geometric predicates.
///
/// Compared against sines and cosines of angles and against lengths divided
/// by the size of the figure, never against raw coordinates.
pub const TOLERANCE: f64 = 1e-10;

/// Z component of the cross product of two planar vectors.
///
/// Positive when `b` turns counter-clockwise from `a`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes() {
        assert!((cross_2d(&Vector2::x(), &Vector2::y()) - 1.0).abs() < TOLERANCE);
        assert!((cross_2d(&Vector2::y(), &Vector2::x()) + 1.0).abs() < TOLERANCE);
    }
}
