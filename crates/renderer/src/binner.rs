//! Density binning: coordinates to per-cell occupancy counts.

use plot_common::{Coordinate, Extent, PlotResult};
use tracing::debug;

use crate::buffer::PixelBuffer;

/// Bin every coordinate into the buffer, returning the maximum occupancy.
///
/// Each coordinate maps to exactly one cell:
///
/// ```text
/// cell_x = floor((x - min_x) * width  / (max_x - min_x))
/// cell_y = floor((max_y - y) * height / (max_y - min_y))
/// ```
///
/// Y is inverted because row 0 is the top edge of the image while the data's
/// maximum Y is conceptually "up". Coordinates exactly on the far edge
/// (`x == max_x`, `y == min_y`) would floor to `width`/`height`; they are
/// clamped to the last valid index so the extreme corner lands in
/// `(width-1, height-1)`. That is the only clamping performed; any other
/// out-of-range index indicates a mapping bug and surfaces as
/// `IndexOutOfRange` from the buffer.
///
/// The extent is validated first; a degenerate axis aborts before any cell
/// is touched.
pub fn bin(buffer: &mut PixelBuffer, coords: &[Coordinate], extent: &Extent) -> PlotResult<u32> {
    extent.validate()?;

    let width = buffer.width() as f64;
    let height = buffer.height() as f64;

    let mut max_occupancy: u32 = 0;
    for coord in coords {
        let fx = (coord.x - extent.min_x) * width / extent.width();
        let fy = (extent.max_y - coord.y) * height / extent.height();

        let x = (fx.floor() as usize).min(buffer.width().saturating_sub(1));
        let y = (fy.floor() as usize).min(buffer.height().saturating_sub(1));

        let cell = buffer.cell_mut(x, y)?;
        cell.occupancy += 1;
        if cell.occupancy > max_occupancy {
            max_occupancy = cell.occupancy;
        }
    }

    debug!(
        points = coords.len(),
        max_occupancy, "Density binning complete"
    );
    Ok(max_occupancy)
}
