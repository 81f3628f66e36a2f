//! Raster rendering for xy density plots.
//!
//! The pipeline owns a single [`PixelBuffer`] throughout:
//! - [`bin`] maps coordinates into cells and accumulates occupancy
//! - [`colorize`] assigns tier colors from occupancy counts
//! - [`PngSink`] serializes the finished buffer to a PNG file

pub mod binner;
pub mod buffer;
pub mod colorize;
pub mod png;

pub use binner::bin;
pub use buffer::{Cell, PixelBuffer};
pub use colorize::colorize;
pub use png::{ImageSink, PngSink};
