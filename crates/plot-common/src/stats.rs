//! Run summary statistics.

use serde::{Deserialize, Serialize};

use crate::extent::Extent;

/// Summary of a completed plotting run, for reporting only.
///
/// Nothing downstream consumes this for control flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlotStatistics {
    /// Number of records ingested.
    pub data_points: u64,
    /// Bounding extent of the input data.
    pub extent: Extent,
    /// Highest occupancy observed in any single cell.
    pub max_occupancy: u32,
}
