//! RGB color values and the fixed density palette.

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Background for unoccupied cells.
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// Densest tier.
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

pub const LIGHT_RED: Rgb = Rgb::new(255, 100, 100);

pub const ORANGE: Rgb = Rgb::new(255, 165, 0);

pub const YELLOW: Rgb = Rgb::new(255, 255, 0);

/// Sparsest tier.
pub const LIGHT_BLUE: Rgb = Rgb::new(100, 100, 255);
