mod make_figure;
mod parse_point;

pub use make_figure::{FactoryOptions, FigureFactory, MIN_POINTS};
pub use parse_point::{parse_coordinate, parse_point};
