//! Record tokenization shared by both ingestion passes.

use plot_common::{Coordinate, PlotError, PlotResult};

/// Token separators within a record. Runs of separators collapse, so
/// "1.0, 2.0" and "1.0#2.0" both tokenize to two values.
const DELIMITERS: &[char] = &[',', ' ', '#'];

/// Parse one record into a coordinate.
///
/// The first two tokens are taken as X and Y; anything after them is
/// ignored. A record that does not yield two numeric tokens is fatal:
/// skipping it would hide discarded data behind an apparently correct image.
pub fn parse_record(line: &str, line_no: u64) -> PlotResult<Coordinate> {
    let mut tokens = line.trim_end().split(DELIMITERS).filter(|t| !t.is_empty());

    let x = parse_token(tokens.next(), line, line_no, "X")?;
    let y = parse_token(tokens.next(), line, line_no, "Y")?;

    Ok(Coordinate::new(x, y))
}

fn parse_token(token: Option<&str>, line: &str, line_no: u64, axis: &str) -> PlotResult<f64> {
    let token = token.ok_or_else(|| PlotError::MalformedRecord {
        line: line_no,
        content: line.to_string(),
        reason: format!("missing {} value", axis),
    })?;

    token.parse().map_err(|_| PlotError::MalformedRecord {
        line: line_no,
        content: line.to_string(),
        reason: format!("{} value is not a number: {:?}", axis, token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        let coord = parse_record("1.5,-2.25", 1).unwrap();
        assert_eq!(coord, Coordinate::new(1.5, -2.25));
    }

    #[test]
    fn test_space_separated() {
        let coord = parse_record("10 20", 1).unwrap();
        assert_eq!(coord, Coordinate::new(10.0, 20.0));
    }

    #[test]
    fn test_hash_separated() {
        let coord = parse_record("3#4", 1).unwrap();
        assert_eq!(coord, Coordinate::new(3.0, 4.0));
    }

    #[test]
    fn test_mixed_delimiter_run() {
        // Consecutive separators collapse rather than producing empty tokens.
        let coord = parse_record("1.0, 2.0", 1).unwrap();
        assert_eq!(coord, Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let coord = parse_record("1,2,some trailing annotation", 1).unwrap();
        assert_eq!(coord, Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_crlf_line() {
        let coord = parse_record("5,6\r", 1).unwrap();
        assert_eq!(coord, Coordinate::new(5.0, 6.0));
    }

    #[test]
    fn test_scientific_notation() {
        let coord = parse_record("1e-3,2.5e2", 1).unwrap();
        assert_eq!(coord, Coordinate::new(0.001, 250.0));
    }

    #[test]
    fn test_missing_y() {
        let err = parse_record("42", 7).unwrap_err();
        match err {
            PlotError::MalformedRecord { line, reason, .. } => {
                assert_eq!(line, 7);
                assert!(reason.contains("Y"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_line() {
        assert!(matches!(
            parse_record("", 3),
            Err(PlotError::MalformedRecord { line: 3, .. })
        ));
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse_record("abc,1", 12).unwrap_err();
        match err {
            PlotError::MalformedRecord { line, content, .. } => {
                assert_eq!(line, 12);
                assert_eq!(content, "abc,1");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }
}
