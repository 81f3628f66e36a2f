//! Common types shared across the xy-density plotting crates.

pub mod color;
pub mod coord;
pub mod error;
pub mod extent;
pub mod stats;
pub mod style;

pub use color::Rgb;
pub use coord::Coordinate;
pub use error::{Axis, PlotError, PlotResult};
pub use extent::Extent;
pub use stats::PlotStatistics;
pub use style::ThresholdTable;
