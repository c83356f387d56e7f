use super::{Color, Figure};

/// A figure together with its display colors; the unit of persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureRecord {
    pub figure: Figure,
    pub fill_color: Color,
    pub border_color: Color,
    pub point_color: Color,
}

impl FigureRecord {
    /// Creates a record with explicit colors.
    #[must_use]
    pub fn new(
        figure: Figure,
        fill_color: Color,
        border_color: Color,
        point_color: Color,
    ) -> Self {
        Self {
            figure,
            fill_color,
            border_color,
            point_color,
        }
    }

    /// Creates a record with the given fill and black border and points.
    #[must_use]
    pub fn with_fill(figure: Figure, fill_color: Color) -> Self {
        Self::new(figure, fill_color, Color::BLACK, Color::BLACK)
    }
}
