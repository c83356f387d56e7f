use crate::error::{Axis, FigureError, Result};
use crate::math::Point2;

/// Parses one user-entered coordinate.
///
/// Accepts the invariant decimal syntax of `f64` (`.` as the decimal
/// separator, optional exponent) with surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns `FigureError::InvalidNumber` if the text is not a finite number.
pub fn parse_coordinate(text: &str, axis: Axis) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FigureError::InvalidNumber {
            axis,
            text: text.to_owned(),
        }),
    }
}

/// Parses a point from separately entered x and y text.
///
/// # Errors
///
/// Returns `FigureError::InvalidNumber` naming the first axis that fails to parse.
pub fn parse_point(x_text: &str, y_text: &str) -> Result<Point2> {
    let x = parse_coordinate(x_text, Axis::X)?;
    let y = parse_coordinate(y_text, Axis::Y)?;
    Ok(Point2::new(x, y))
}
