pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod persistence;

pub use error::{Axis, FigureError, Result};
pub use geometry::{Color, Figure, FigureKind, FigureRecord};
pub use operations::creation::{FactoryOptions, FigureFactory};
pub use persistence::{FigureSerializer, TextSerializer};
