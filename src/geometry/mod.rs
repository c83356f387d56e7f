pub mod color;
pub mod figure;
pub mod record;

pub use color::Color;
pub use figure::{Figure, FigureKind, Orientation, Polygon, Quadrilateral, Rectangle, Triangle};
pub use record::FigureRecord;
