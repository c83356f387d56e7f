use super::{cross_2d, Point2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Coordinates are
/// taken relative to the first vertex to keep far-from-origin figures exact.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let origin = points[0];
    let mut sum = 0.0;
    for i in 1..n - 1 {
        sum += cross_2d(&(points[i] - origin), &(points[i + 1] - origin));
    }
    sum * 0.5
}

/// Computes the length of the closed boundary through `points`.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Larger side of the axis-aligned bounding box of `points`.
#[must_use]
pub fn extent_2d(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (mut min, mut max) = (*first, *first);
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (max.x - min.x).max(max.y - min.y)
}

/// Whether the enclosed area is negligible next to the squared perimeter.
///
/// `tolerance` is relative, so the test gives the same answer at any scale.
#[must_use]
pub fn has_negligible_area(points: &[Point2], tolerance: f64) -> bool {
    let perimeter = perimeter_2d(points);
    signed_area_2d(points).abs() <= tolerance * perimeter * perimeter
}

/// Returns the first pair of cyclically adjacent vertices whose distance is
/// within `tolerance` times the polygon's extent.
///
/// The last vertex is adjacent to the first.
#[must_use]
pub fn find_coincident_adjacent(points: &[Point2], tolerance: f64) -> Option<(usize, usize)> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let limit = tolerance * extent_2d(points);
    (0..n)
        .map(|i| (i, (i + 1) % n))
        .find(|&(i, j)| (points[j] - points[i]).norm() <= limit)
}

/// Returns the index of the first vertex whose two incident edges are collinear.
///
/// The turn is compared as the sine of the angle between the edges, so
/// `tolerance` is independent of edge length.
#[must_use]
pub fn find_collinear_vertex(points: &[Point2], tolerance: f64) -> Option<usize> {
    let n = points.len();
    if n < 3 {
        return None;
    }
    (0..n).find(|&i| {
        let incoming = points[i] - points[(i + n - 1) % n];
        let outgoing = points[(i + 1) % n] - points[i];
        cross_2d(&incoming, &outgoing).abs() <= tolerance * incoming.norm() * outgoing.norm()
    })
}

/// Returns `true` if every vertex of the closed polygon is a right angle.
///
/// Uses the cosine of each corner, so `tolerance` is independent of edge length.
#[must_use]
pub fn all_right_angles(points: &[Point2], tolerance: f64) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| {
        let incoming = points[i] - points[(i + n - 1) % n];
        let outgoing = points[(i + 1) % n] - points[i];
        incoming.dot(&outgoing).abs() <= tolerance * incoming.norm() * outgoing.norm()
    })
}
