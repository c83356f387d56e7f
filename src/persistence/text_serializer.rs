use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::text_format::{decode_record, encode_record};
use super::FigureSerializer;
use crate::error::{FigureError, Result};
use crate::geometry::FigureRecord;
use crate::operations::creation::FigureFactory;

/// Writes `records` to `writer`, one line each, and flushes it.
///
/// # Errors
///
/// Returns `FigureError::NonFiniteCoordinate` for an unencodable record, or
/// `FigureError::Io` if writing fails.
pub fn write_records<W: Write>(mut writer: W, records: &[FigureRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", encode_record(record)?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads every record from `reader`, stopping at the first corrupt one.
///
/// # Errors
///
/// Returns `FigureError::CorruptRecord` naming the 0-based record index and
/// 1-based line of the first malformed record (including one that is not
/// valid UTF-8), or `FigureError::Io` if reading fails.
pub fn read_records<R: BufRead>(reader: R, factory: &FigureFactory) -> Result<Vec<FigureRecord>> {
    let mut records = Vec::new();
    for (line_index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let record_index = records.len();
        let corrupt = |reason: String| FigureError::CorruptRecord {
            record: record_index,
            line: line_index + 1,
            reason,
        };

        let line = std::str::from_utf8(&bytes)
            .map_err(|err| format!("invalid UTF-8 after byte {}", err.valid_up_to()))
            .map_err(corrupt)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        records.push(decode_record(trimmed, factory).map_err(corrupt)?);
    }
    Ok(records)
}

/// Serializer for the line-oriented text format described in [`crate::persistence`].
///
/// Writes go to a temporary file beside the destination, which replaces the
/// destination only after every record has been written and synced.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSerializer {
    factory: FigureFactory,
}

impl TextSerializer {
    /// Creates a serializer that validates loaded figures with `factory`.
    #[must_use]
    pub fn new(factory: FigureFactory) -> Self {
        Self { factory }
    }
}

impl FigureSerializer for TextSerializer {
    fn serialize(&self, records: &[FigureRecord], path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::Builder::new()
            .prefix(".figkit-")
            .suffix(".tmp")
            .tempfile_in(dir)?;
        write_records(BufWriter::new(tmp.as_file_mut()), records)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|err| err.error)?;

        debug!(path = %path.display(), records = records.len(), "wrote figures");
        Ok(())
    }

    fn deserialize(&self, path: &Path) -> Result<Vec<FigureRecord>> {
        let file = File::open(path)?;
        let records = read_records(BufReader::new(file), &self.factory)
            .inspect_err(|err| warn!(path = %path.display(), %err, "failed to read figures"))?;

        debug!(path = %path.display(), records = records.len(), "read figures");
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Color, Figure};
    use crate::math::Point2;

    fn record(coords: &[(f64, f64)], fill: Color) -> FigureRecord {
        let points: Vec<Point2> = coords.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        FigureRecord::with_fill(FigureFactory::default().create(&points).unwrap(), fill)
    }

    fn sample() -> Vec<FigureRecord> {
        vec![
            record(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)], Color::RED),
            record(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)], Color::GREEN),
            record(
                &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 1.0), (0.0, 4.0)],
                Color::BLUE,
            ),
        ]
    }

    #[test]
    fn buffer_round_trip() {
        let records = sample();
        let mut buf = Vec::new();
        write_records(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));

        let decoded = read_records(buf.as_slice(), &FigureFactory::default()).unwrap();
        assert_eq!(decoded, records);
    }

    #[test]
    fn empty_input_reads_empty() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
        let decoded = read_records(buf.as_slice(), &FigureFactory::default()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn blank_lines_and_crlf_are_tolerated() {
        let text = "\r\ntriangle 3 0 0 4 0 0 3 #FF0000FF #000000FF #000000FF\r\n\n  \n";
        let decoded = read_records(text.as_bytes(), &FigureFactory::default()).unwrap();
        assert_eq!(decoded.len(), 1);
    }

    #[test]
    fn fails_fast_on_first_corrupt_record() {
        let text = "\
triangle 3 0 0 4 0 0 3 #FF0000FF #000000FF #000000FF

triangle 3 0 0 4 0 #FF0000FF #000000FF #000000FF
circle 1 0 0 #FF0000FF #000000FF #000000FF
";
        match read_records(text.as_bytes(), &FigureFactory::default()) {
            Err(FigureError::CorruptRecord { record, line, reason }) => {
                assert_eq!(record, 1);
                assert_eq!(line, 3);
                assert!(reason.contains("expected 11 fields"), "{reason}");
            }
            other => panic!("expected CorruptRecord, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_positioned_corrupt_record() {
        let bytes: &[u8] = b"triangle 3 0 0 4 0 0 3 #FF0000FF #000000FF #000000FF\n\
triangle 3 0 \xFF3 4 0 0 3 #FF0000FF #000000FF #000000FF\n";
        match read_records(bytes, &FigureFactory::default()) {
            Err(FigureError::CorruptRecord { record, line, reason }) => {
                assert_eq!(record, 1);
                assert_eq!(line, 2);
                assert_eq!(reason, "invalid UTF-8 after byte 13");
            }
            other => panic!("expected CorruptRecord, got {other:?}"),
        }
    }

    #[test]
    fn failed_serialize_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figures.txt");
        let serializer = TextSerializer::default();
        serializer.serialize(&sample(), &path).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let mut records = sample();
        records.push(FigureRecord::with_fill(
            Figure::polygon_unchecked(vec![
                Point2::new(0.0, 0.0),
                Point2::new(f64::NAN, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.5, 2.0),
                Point2::new(0.0, 1.0),
            ]),
            Color::WHITE,
        ));
        assert!(matches!(
            serializer.serialize(&records, &path),
            Err(FigureError::NonFiniteCoordinate { index: 1 })
        ));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary file was not cleaned up");
    }
}
