use super::{cross_2d, Point2};

/// Sign of the orientation of `c` relative to the directed line `a -> b`.
///
/// Snapped to zero when the sine of the angle at `a` is within `tolerance`.
fn orientation_sign(a: &Point2, b: &Point2, c: &Point2, tolerance: f64) -> i8 {
    let ab = b - a;
    let ac = c - a;
    let cross = cross_2d(&ab, &ac);
    if cross.abs() <= tolerance * ab.norm() * ac.norm() {
        0
    } else if cross > 0.0 {
        1
    } else {
        -1
    }
}

/// Whether `p`, already known to be collinear with `a -> b`, lies within the segment's extent.
///
/// The margin is `tolerance` times the segment length.
fn within_extent(a: &Point2, b: &Point2, p: &Point2, tolerance: f64) -> bool {
    let margin = tolerance * (b - a).norm();
    p.x >= a.x.min(b.x) - margin
        && p.x <= a.x.max(b.x) + margin
        && p.y >= a.y.min(b.y) - margin
        && p.y <= a.y.max(b.y) + margin
}

/// Bounded segment-segment intersection test in 2D.
///
/// Touching endpoints and collinear overlaps count as intersections.
/// `tolerance` is relative to the segment lengths.
#[must_use]
pub fn segments_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tolerance: f64,
) -> bool {
    let o1 = orientation_sign(a0, a1, b0, tolerance);
    let o2 = orientation_sign(a0, a1, b1, tolerance);
    let o3 = orientation_sign(b0, b1, a0, tolerance);
    let o4 = orientation_sign(b0, b1, a1, tolerance);

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }

    (o1 == 0 && within_extent(a0, a1, b0, tolerance))
        || (o2 == 0 && within_extent(a0, a1, b1, tolerance))
        || (o3 == 0 && within_extent(b0, b1, a0, tolerance))
        || (o4 == 0 && within_extent(b0, b1, a1, tolerance))
}

/// Finds the first pair of non-adjacent edges of a closed polygon that intersect.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`. Returns the edge indices.
#[must_use]
pub fn find_self_intersection(points: &[Point2], tolerance: f64) -> Option<(usize, usize)> {
    let n = points.len();
    if n < 4 {
        return None;
    }
    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in (i + 2)..n {
            // First and last edges share vertex 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            if segments_intersect_2d(a0, a1, b0, b1, tolerance) {
                return Some((i, j));
            }
        }
    }
    None
}
