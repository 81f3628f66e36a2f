//! Bounding extent of the input data set.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, PlotError, PlotResult};

/// The bounding rectangle spanning all input coordinates.
///
/// Always built from the first scanned point and then extended per axis, so
/// min/max are genuine running values rather than numeric sentinels. Seeding
/// from a type extreme silently biases the extent when all data lies on one
/// side of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Create a degenerate extent covering a single point.
    pub fn from_point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Extend the extent to include a point, each axis independently.
    pub fn include(&mut self, x: f64, y: f64) {
        if x < self.min_x {
            self.min_x = x;
        }
        if x > self.max_x {
            self.max_x = x;
        }
        if y < self.min_y {
            self.min_y = y;
        }
        if y > self.max_y {
            self.max_y = y;
        }
    }

    /// Width of the extent in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extent in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this extent.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Reject extents where min equals max on either axis.
    ///
    /// A degenerate axis makes the pixel-mapping division undefined, so it is
    /// surfaced as an explicit error before any binning happens.
    pub fn validate(&self) -> PlotResult<()> {
        if self.width() == 0.0 {
            return Err(PlotError::DegenerateExtent {
                axis: Axis::X,
                value: self.min_x,
            });
        }
        if self.height() == 0.0 {
            return Err(PlotError::DegenerateExtent {
                axis: Axis::Y,
                value: self.min_y,
            });
        }
        Ok(())
    }
}
