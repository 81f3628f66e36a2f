//! First ingestion pass: extent and record count.

use std::io::BufRead;

use plot_common::{Extent, PlotError, PlotResult};
use tracing::debug;

use crate::record::parse_record;
use crate::source::RecordSource;

/// Result of the range scan over a record source.
#[derive(Debug, Clone, Copy)]
pub struct ScanSummary {
    /// Bounding extent of all scanned coordinates.
    pub extent: Extent,
    /// Number of records scanned.
    pub records: u64,
}

/// Scan the source once, computing the bounding extent and record count.
///
/// No records are retained. The extent is seeded from the first record and
/// extended per axis, so data entirely on one side of zero still yields the
/// true min/max. An empty source is an error; downstream phases have
/// nothing meaningful to do with it.
pub fn scan(source: &dyn RecordSource) -> PlotResult<ScanSummary> {
    let reader = source.open()?;

    let mut extent: Option<Extent> = None;
    let mut records: u64 = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| PlotError::SourceUnreadable {
            path: source.origin().to_path_buf(),
            source: source_err,
        })?;
        let line_no = idx as u64 + 1;
        let coord = parse_record(&line, line_no)?;

        extent = Some(match extent {
            None => Extent::from_point(coord.x, coord.y),
            Some(mut extent) => {
                extent.include(coord.x, coord.y);
                extent
            }
        });
        records += 1;
    }

    let extent = extent.ok_or(PlotError::EmptyInput)?;
    debug!(
        records,
        min_x = extent.min_x,
        max_x = extent.max_x,
        min_y = extent.min_y,
        max_y = extent.max_y,
        "Range scan complete"
    );

    Ok(ScanSummary { extent, records })
}
