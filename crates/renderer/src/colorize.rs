//! Occupancy-to-color quantization.

use plot_common::ThresholdTable;

use crate::buffer::PixelBuffer;

/// Assign a tier color to every occupied cell.
///
/// Visits each cell exactly once; cells with zero occupancy keep the
/// background color. Visitation order does not matter; there is no
/// cross-cell dependency.
pub fn colorize(buffer: &mut PixelBuffer, thresholds: &ThresholdTable) {
    for cell in buffer.cells_mut() {
        if cell.occupancy > 0 {
            cell.color = thresholds.color_for(cell.occupancy);
        }
    }
}
