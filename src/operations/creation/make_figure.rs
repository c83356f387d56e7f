use tracing::debug;

use crate::error::{FigureError, Result};
use crate::geometry::{Figure, FigureKind};
use crate::math::intersect_2d::find_self_intersection;
use crate::math::polygon_2d::{
    all_right_angles, find_coincident_adjacent, find_collinear_vertex, has_negligible_area,
};
use crate::math::{Point2, TOLERANCE};

/// Number of points required by the smallest figure variant.
pub const MIN_POINTS: usize = 3;

/// Parameters controlling figure validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactoryOptions {
    tolerance: f64,
}

impl FactoryOptions {
    /// Creates options with the given relative tolerance.
    ///
    /// # Errors
    ///
    /// Returns `FigureError::InvalidOptions` if `tolerance` is not a positive finite number.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(FigureError::InvalidOptions(format!(
                "tolerance must be positive and finite, got {tolerance}"
            )));
        }
        Ok(Self { tolerance })
    }

    /// Returns the relative tolerance used for coincidence, collinearity and area tests.
    ///
    /// Point distances are compared against `tolerance * extent`, vertex turns
    /// against `tolerance * |incoming| * |outgoing|` and area against
    /// `tolerance * perimeter²`, so a figure validates the same way at any scale.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Builds validated figures from ordered point sequences.
///
/// The variant is chosen from the point count:
///
/// | Points | Variant                                                         |
/// |--------|-----------------------------------------------------------------|
/// | 3      | [`FigureKind::Triangle`]                                        |
/// | 4      | [`FigureKind::Rectangle`] if every corner is a right angle      |
/// | 4      | [`FigureKind::Quadrilateral`] otherwise                         |
/// | 5+     | [`FigureKind::Polygon`]                                         |
///
/// Every variant must have distinct adjacent points, no straight-angle vertex,
/// no crossing or touching between non-adjacent edges, and non-zero area.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigureFactory {
    options: FactoryOptions,
}

impl FigureFactory {
    /// Creates a factory with the given options.
    #[must_use]
    pub fn new(options: FactoryOptions) -> Self {
        Self { options }
    }

    /// Returns the factory's options.
    #[must_use]
    pub fn options(&self) -> &FactoryOptions {
        &self.options
    }

    /// Validates `points` and builds the matching figure.
    ///
    /// # Errors
    ///
    /// - `FigureError::InsufficientPoints` if fewer than [`MIN_POINTS`] are given.
    /// - `FigureError::NonFiniteCoordinate` if any coordinate is NaN or infinite.
    /// - `FigureError::InvalidGeometry` if the points are degenerate.
    pub fn create(&self, points: &[Point2]) -> Result<Figure> {
        self.build(points)
            .inspect(|figure| {
                debug!(kind = %figure.kind(), points = points.len(), "created figure");
            })
            .inspect_err(|err| debug!(points = points.len(), %err, "rejected figure"))
    }

    /// Builds a new figure from `figure` with the point at `index` replaced.
    ///
    /// The result may be a different variant, e.g. a rectangle becomes a
    /// quadrilateral once a corner moves.
    ///
    /// # Errors
    ///
    /// Returns `FigureError::InvalidGeometry` if `index` is out of range, or any
    /// error [`create`](Self::create) reports for the edited points.
    pub fn replace_point(&self, figure: &Figure, index: usize, point: Point2) -> Result<Figure> {
        let mut points = figure.points().to_vec();
        let count = points.len();
        let slot = points.get_mut(index).ok_or_else(|| {
            FigureError::InvalidGeometry(format!(
                "point index {index} is out of range for {count} points"
            ))
        })?;
        *slot = point;
        self.create(&points)
    }

    fn build(&self, points: &[Point2]) -> Result<Figure> {
        if points.len() < MIN_POINTS {
            return Err(FigureError::InsufficientPoints {
                required: MIN_POINTS,
                actual: points.len(),
            });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(FigureError::NonFiniteCoordinate { index });
        }

        self.validate_boundary(points)?;

        let kind = self.classify(points);
        Figure::from_validated(kind, points).ok_or_else(|| {
            FigureError::InvalidGeometry(format!("{} points do not form a {kind}", points.len()))
        })
    }

    fn validate_boundary(&self, points: &[Point2]) -> Result<()> {
        let tol = self.options.tolerance;

        if let Some((i, j)) = find_coincident_adjacent(points, tol) {
            return Err(FigureError::InvalidGeometry(format!(
                "adjacent points {i} and {j} coincide"
            )));
        }
        if let Some(i) = find_collinear_vertex(points, tol) {
            let reason = if points.len() == 3 {
                "points are collinear".to_owned()
            } else {
                format!("point {i} is collinear with its neighbours")
            };
            return Err(FigureError::InvalidGeometry(reason));
        }
        if let Some((i, j)) = find_self_intersection(points, tol) {
            return Err(FigureError::InvalidGeometry(format!(
                "edges {i} and {j} intersect"
            )));
        }
        if has_negligible_area(points, tol) {
            return Err(FigureError::InvalidGeometry("zero signed area".to_owned()));
        }
        Ok(())
    }

    fn classify(&self, points: &[Point2]) -> FigureKind {
        match points.len() {
            3 => FigureKind::Triangle,
            4 if all_right_angles(points, self.options.tolerance) => FigureKind::Rectangle,
            4 => FigureKind::Quadrilateral,
            _ => FigureKind::Polygon,
        }
    }
}
