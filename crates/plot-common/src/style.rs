//! Occupancy thresholds and the density color ramp.

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};

/// Ordered occupancy breakpoints mapping cell density to a color tier.
///
/// By convention `a > b > c > d`; an out-of-order table is not rejected (it
/// produces a differently bucketed but well-defined image), callers may check
/// [`ThresholdTable::is_descending`] and warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            a: 1000,
            b: 500,
            c: 100,
            d: 20,
        }
    }
}

impl ThresholdTable {
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Parse a threshold table from a comma-separated string: "a,b,c,d".
    pub fn from_arg(s: &str) -> Result<Self, ThresholdParseError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(ThresholdParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0u32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse()
                .map_err(|_| ThresholdParseError::InvalidNumber(part.to_string()))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// True when the tiers are strictly descending (`a > b > c > d`).
    pub fn is_descending(&self) -> bool {
        self.a > self.b && self.b > self.c && self.c > self.d
    }

    /// Color for an occupied cell, walking the tiers in descending order.
    ///
    /// Callers are expected to skip cells with zero occupancy; those keep the
    /// background color.
    pub fn color_for(&self, occupancy: u32) -> Rgb {
        if occupancy >= self.a {
            color::WHITE
        } else if occupancy > self.b {
            color::LIGHT_RED
        } else if occupancy > self.c {
            color::ORANGE
        } else if occupancy > self.d {
            color::YELLOW
        } else {
            color::LIGHT_BLUE
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThresholdParseError {
    #[error("Invalid threshold format: {0}. Expected 'a,b,c,d'")]
    InvalidFormat(String),

    #[error("Invalid number in thresholds: {0}")]
    InvalidNumber(String),
}
