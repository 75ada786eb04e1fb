//! Single sample line parsing

use crate::error::DataError;
use crate::types::Point3D;

/// Parse one comma-separated sample line into a point.
///
/// Only the first three fields are read as x, y and z; trailing fields are ignored.
/// `line_number` is 1-based and only used to give errors context.
pub fn parse_sample_line(line: &str, line_number: usize) -> Result<Point3D, DataError> {
    let mut fields = line.split(',');
    let mut coords = [0.0f64; 3];

    for (axis, slot) in coords.iter_mut().enumerate() {
        let field = fields.next().ok_or_else(|| DataError::MalformedInput {
            line: line_number,
            reason: format!("expected at least 3 fields, found {} in {:?}", axis, line),
        })?;

        let value: f64 = field.trim().parse().map_err(|e| DataError::MalformedInput {
            line: line_number,
            reason: format!("field {} ({:?}) is not a number: {}", axis + 1, field, e),
        })?;

        // NaN or infinite samples would poison the bounding box
        if !value.is_finite() {
            return Err(DataError::MalformedInput {
                line: line_number,
                reason: format!("field {} ({:?}) is not finite", axis + 1, field),
            });
        }

        *slot = value;
    }

    Ok(Point3D::new(coords[0], coords[1], coords[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_fields() {
        let p = parse_sample_line("1.5,-2,3e2", 1).unwrap();
        assert_eq!(p, Point3D::new(1.5, -2.0, 300.0));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let p = parse_sample_line("1,2,3,0.016,not-a-number", 1).unwrap();
        assert_eq!(p, Point3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_whitespace_around_fields() {
        let p = parse_sample_line(" 0.25 , 0.5,\t0.75 ", 1).unwrap();
        assert_eq!(p, Point3D::new(0.25, 0.5, 0.75));
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_sample_line("1,2", 7).unwrap_err();
        match err {
            DataError::MalformedInput { line, reason } => {
                assert_eq!(line, 7);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_field() {
        let err = parse_sample_line("1,abc,3", 3).unwrap_err();
        assert!(matches!(err, DataError::MalformedInput { line: 3, .. }));
        assert!(err.to_string().contains("field 2"));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert!(parse_sample_line("", 1).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_sample_line("nan,0,0", 1).is_err());
        assert!(parse_sample_line("0,inf,0", 1).is_err());
    }
}
