use std::path::PathBuf;

use clap::{Parser, Subcommand};
use figkit::math::Point2;
use figkit::operations::creation::parse_point;
use figkit::Color;

/// Build planar figures and manage figure collection files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a figure from points and append it to a collection file
    Create {
        /// Collection file; created if missing
        file: PathBuf,

        /// A point as `X,Y`; repeat in boundary order
        #[arg(short, long = "point", value_parser = parse_point_arg, required = true)]
        points: Vec<Point2>,

        /// Fill color, `#RRGGBB[AA]` or a name such as `red`
        #[arg(long, default_value = "white")]
        fill: Color,

        /// Border color
        #[arg(long, default_value = "black")]
        border: Color,

        /// Point marker color
        #[arg(long = "point-color", default_value = "black")]
        point_color: Color,
    },

    /// Print the records of a collection file
    List { file: PathBuf },

    /// Print a record and its points in boundary order
    Show { file: PathBuf, index: usize },

    /// Remove the record at INDEX (0-based) from a collection file
    Remove { file: PathBuf, index: usize },

    /// Validate a collection file
    Check { file: PathBuf },
}

fn parse_point_arg(text: &str) -> Result<Point2, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{text}`"))?;
    parse_point(x, y).map_err(|err| err.to_string())
}
