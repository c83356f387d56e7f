use crate::error::{FigureError, Result};
use crate::geometry::{Color, FigureKind, FigureRecord};
use crate::math::Point2;
use crate::operations::creation::FigureFactory;

/// Number of fields in a record besides its coordinates: tag, count and three colors.
const FIXED_FIELDS: usize = 5;

/// Encodes one record as a single line, without the trailing newline.
///
/// # Errors
///
/// Returns `FigureError::NonFiniteCoordinate` if any point has a NaN or infinite
/// coordinate, since those cannot round-trip through decimal text.
pub fn encode_record(record: &FigureRecord) -> Result<String> {
    let figure = &record.figure;
    let points = figure.points();
    if let Some(index) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(FigureError::NonFiniteCoordinate { index });
    }

    let head = [figure.tag().to_owned(), points.len().to_string()];
    let coords = points.iter().flat_map(|p| [p.x.to_string(), p.y.to_string()]);
    let colors = [
        record.fill_color.to_string(),
        record.border_color.to_string(),
        record.point_color.to_string(),
    ];
    let fields: Vec<String> = head.into_iter().chain(coords).chain(colors).collect();
    Ok(fields.join(" "))
}

/// Decodes one non-blank line into a record, rebuilding the figure through `factory`.
///
/// The error is a human-readable reason; the caller attaches the position.
pub(crate) fn decode_record(
    line: &str,
    factory: &FigureFactory,
) -> std::result::Result<FigureRecord, String> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    let (&tag, rest) = fields.split_first().ok_or("empty record")?;

    let kind = FigureKind::from_tag(tag).ok_or_else(|| format!("unknown figure tag `{tag}`"))?;

    let count_text = rest.first().ok_or("missing point count")?;
    let count: usize = count_text
        .parse()
        .map_err(|_| format!("invalid point count `{count_text}`"))?;

    let expected = count
        .checked_mul(2)
        .and_then(|n| n.checked_add(FIXED_FIELDS))
        .ok_or_else(|| format!("point count {count} is too large"))?;
    if fields.len() != expected {
        return Err(format!(
            "expected {expected} fields for {count} points, found {}",
            fields.len()
        ));
    }

    let coords = &fields[2..2 + 2 * count];
    let points = coords
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let x = parse_coordinate(pair[0], i, "x")?;
            let y = parse_coordinate(pair[1], i, "y")?;
            Ok(Point2::new(x, y))
        })
        .collect::<std::result::Result<Vec<_>, String>>()?;

    let colors = &fields[2 + 2 * count..];
    let fill_color = parse_color(colors[0], "fill")?;
    let border_color = parse_color(colors[1], "border")?;
    let point_color = parse_color(colors[2], "point")?;

    let figure = factory
        .create(&points)
        .map_err(|err| format!("invalid figure: {err}"))?;
    if figure.kind() != kind {
        return Err(format!(
            "tag `{tag}` does not match its points, which form a {}",
            figure.kind()
        ));
    }

    Ok(FigureRecord::new(figure, fill_color, border_color, point_color))
}

fn parse_coordinate(text: &str, index: usize, axis: &str) -> std::result::Result<f64, String> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("point {index}: non-finite {axis} coordinate `{text}`")),
        Err(_) => Err(format!("point {index}: invalid {axis} coordinate `{text}`")),
    }
}

fn parse_color(text: &str, role: &str) -> std::result::Result<Color, String> {
    // Persisted colors are always hex; names are for interactive input only.
    text.starts_with('#')
        .then(|| text.parse::<Color>().ok())
        .flatten()
        .ok_or_else(|| format!("invalid {role} color `{text}`"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Figure;

    fn triangle_record() -> FigureRecord {
        let figure = FigureFactory::default()
            .create(&[
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
                Point2::new(0.0, 3.0),
            ])
            .unwrap();
        FigureRecord::new(figure, Color::RED, Color::BLACK, Color::BLACK)
    }

    fn decode(line: &str) -> std::result::Result<FigureRecord, String> {
        decode_record(line, &FigureFactory::default())
    }

    #[test]
    fn encodes_documented_layout() {
        assert_eq!(
            encode_record(&triangle_record()).unwrap(),
            "triangle 3 0 0 4 0 0 3 #FF0000FF #000000FF #000000FF"
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let record = triangle_record();
        let line = encode_record(&record).unwrap();
        assert_eq!(decode(&line).unwrap(), record);
    }

    #[test]
    fn awkward_floats_survive() {
        let figure = FigureFactory::default()
            .create(&[
                Point2::new(-0.0, 0.1),
                Point2::new(1e-300, 2.5e7),
                Point2::new(123_456_789.123_456_78, -2.5e7),
            ])
            .unwrap();
        let record = FigureRecord::with_fill(figure, Color::new(1, 2, 3, 4));
        let decoded = decode(&encode_record(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
        assert!(decoded.figure.points()[0].x.is_sign_negative());
        assert_eq!(decoded.figure.points()[1].x.to_bits(), 1e-300_f64.to_bits());
    }

    #[test]
    fn rejects_non_finite_on_encode() {
        let figure = Figure::polygon_unchecked(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, f64::INFINITY),
            Point2::new(0.5, 2.0),
            Point2::new(0.0, 1.0),
        ]);
        let record = FigureRecord::with_fill(figure, Color::WHITE);
        assert!(matches!(
            encode_record(&record),
            Err(FigureError::NonFiniteCoordinate { index: 2 })
        ));
    }

    #[test]
    fn missing_coordinate_pair() {
        let reason = decode("triangle 3 0 0 4 0 #FF0000FF #000000FF #000000FF").unwrap_err();
        assert_eq!(reason, "expected 11 fields for 3 points, found 9");
    }

    #[test]
    fn unknown_tag() {
        let reason = decode("circle 3 0 0 4 0 0 3 #FF0000FF #000000FF #000000FF").unwrap_err();
        assert_eq!(reason, "unknown figure tag `circle`");
    }

    #[test]
    fn bad_count() {
        let reason = decode("triangle three 0 0 #FF0000FF").unwrap_err();
        assert_eq!(reason, "invalid point count `three`");
        let reason = decode(&format!("polygon {} #FF0000FF", usize::MAX)).unwrap_err();
        assert!(reason.contains("too large"), "{reason}");
    }

    #[test]
    fn bad_number_names_point_and_axis() {
        let reason = decode("triangle 3 0 0 4 0 0 3,5 #FF0000FF #000000FF #000000FF").unwrap_err();
        assert_eq!(reason, "point 2: invalid y coordinate `3,5`");
        let reason = decode("triangle 3 0 0 NaN 0 0 3 #FF0000FF #000000FF #000000FF").unwrap_err();
        assert_eq!(reason, "point 1: non-finite x coordinate `NaN`");
    }

    #[test]
    fn bad_color() {
        let reason = decode("triangle 3 0 0 4 0 0 3 #FF0000FF black #000000FF").unwrap_err();
        assert_eq!(reason, "invalid border color `black`");
        let reason = decode("triangle 3 0 0 4 0 0 3 #FF0000FF #000000FF #0000").unwrap_err();
        assert_eq!(reason, "invalid point color `#0000`");
    }

    #[test]
    fn degenerate_points_are_corrupt() {
        let reason = decode("triangle 3 0 0 1 1 2 2 #FF0000FF #000000FF #000000FF").unwrap_err();
        assert!(reason.starts_with("invalid figure:"), "{reason}");
    }

    #[test]
    fn tag_must_match_points() {
        let reason =
            decode("quadrilateral 4 0 0 4 0 4 3 0 3 #FF0000FF #000000FF #000000FF").unwrap_err();
        assert_eq!(
            reason,
            "tag `quadrilateral` does not match its points, which form a rectangle"
        );
    }
}
