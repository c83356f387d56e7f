use thiserror::Error;

/// Top-level error type for figure construction and persistence.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("at least {required} points are required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("corrupt record {record} at line {line}: {reason}")]
    CorruptRecord {
        record: usize,
        line: usize,
        reason: String,
    },

    #[error("invalid {axis} coordinate `{text}`")]
    InvalidNumber { axis: Axis, text: String },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid factory options: {0}")]
    InvalidOptions(String),
}

/// Coordinate axis, used to name the offending field of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Convenience type alias for results using [`FigureError`].
pub type Result<T> = std::result::Result<T, FigureError>;
