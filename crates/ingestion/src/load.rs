//! Second ingestion pass: materialize the coordinate sequence.

use std::io::BufRead;

use plot_common::{Coordinate, PlotError, PlotResult};
use tracing::debug;

use crate::record::parse_record;
use crate::source::RecordSource;

/// Load every record from the source into an ordered coordinate sequence.
///
/// `expected` is the record count from the range scan. Because both passes
/// use the same tokenizer, a differing count means the underlying source
/// changed between passes; that run is unsalvageable and aborts with
/// `RecordCountMismatch`.
pub fn load(source: &dyn RecordSource, expected: u64) -> PlotResult<Vec<Coordinate>> {
    let reader = source.open()?;

    let mut coords = Vec::with_capacity(expected as usize);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| PlotError::SourceUnreadable {
            path: source.origin().to_path_buf(),
            source: source_err,
        })?;
        coords.push(parse_record(&line, idx as u64 + 1)?);
    }

    let actual = coords.len() as u64;
    if actual != expected {
        return Err(PlotError::RecordCountMismatch { expected, actual });
    }

    debug!(records = actual, "Coordinate load complete");
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::source::MemorySource;

    /// Source whose content differs between the first and second open.
    struct UnstableSource {
        opens: Cell<usize>,
        origin: PathBuf,
    }

    impl UnstableSource {
        fn new() -> Self {
            Self {
                opens: Cell::new(0),
                origin: PathBuf::from("<unstable>"),
            }
        }
    }

    impl RecordSource for UnstableSource {
        fn open(&self) -> PlotResult<Box<dyn BufRead + '_>> {
            let n = self.opens.get();
            self.opens.set(n + 1);
            let data: &[u8] = if n == 0 { b"1,1\n2,2\n3,3\n" } else { b"1,1\n2,2\n" };
            Ok(Box::new(Cursor::new(data)))
        }

        fn origin(&self) -> &Path {
            &self.origin
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let source = MemorySource::new("0,0\n10,5\n-2,8\n");
        let coords = load(&source, 3).unwrap();

        assert_eq!(
            coords,
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(10.0, 5.0),
                Coordinate::new(-2.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_load_detects_changed_source() {
        let source = UnstableSource::new();
        let expected = crate::scan(&source).unwrap().records;
        assert_eq!(expected, 3);

        match load(&source, expected) {
            Err(PlotError::RecordCountMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected RecordCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_line_is_fatal() {
        let source = MemorySource::new("1,1\n2;2\n");
        assert!(matches!(
            load(&source, 2),
            Err(PlotError::MalformedRecord { line: 2, .. })
        ));
    }
}
