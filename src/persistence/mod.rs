//! Persistence of figure collections.
//!
//! The on-disk text format holds one record per line, fields separated by a
//! single space:
//!
//! ```text
//! <tag> <pointCount> <x1> <y1> ... <xn> <yn> <fill> <border> <point>
//! ```
//!
//! - `tag` is one of `triangle`, `rectangle`, `quadrilateral`, `polygon`.
//! - Coordinates use the invariant shortest round-trip form of `f64`
//!   (`0.1`, `-0`, `12345.678`), never a locale-dependent one.
//! - Colors are `#RRGGBBAA` in upper-case hex.
//!
//! Blank lines are skipped when reading. Every figure is rebuilt through the
//! [`FigureFactory`](crate::operations::creation::FigureFactory) on read, so a
//! line whose points are degenerate or whose tag disagrees with its points is
//! reported as corrupt.

mod text_format;
mod text_serializer;

use std::path::Path;

use crate::error::Result;
use crate::geometry::FigureRecord;

pub use text_format::encode_record;
pub use text_serializer::{read_records, write_records, TextSerializer};

/// Stores and restores an ordered collection of figure records.
pub trait FigureSerializer {
    /// Replaces the contents of `path` with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be encoded or the file cannot be written.
    /// On error the previous contents of `path` are left unchanged.
    fn serialize(&self, records: &[FigureRecord], path: &Path) -> Result<()>;

    /// Reads every record stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any record is corrupt.
    fn deserialize(&self, path: &Path) -> Result<Vec<FigureRecord>>;
}
