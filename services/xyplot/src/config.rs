//! Plot configuration assembled from CLI arguments.

use anyhow::{bail, Context, Result};
use plot_common::ThresholdTable;
use tracing::warn;

/// Configuration handed to the plotting pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PlotConfig {
    /// Output image width in pixels.
    pub width: usize,
    /// Output image height in pixels.
    pub height: usize,
    /// Occupancy color tiers.
    pub thresholds: ThresholdTable,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 4000,
            height: 2000,
            thresholds: ThresholdTable::default(),
        }
    }
}

impl PlotConfig {
    /// Build a configuration from raw CLI values.
    ///
    /// Height defaults to half the width when not given explicitly.
    pub fn from_args(width: usize, height: Option<usize>, thresholds: &str) -> Result<Self> {
        let thresholds = ThresholdTable::from_arg(thresholds)
            .context("Invalid --thresholds value")?;

        let config = Self {
            width,
            height: height.unwrap_or(width / 2),
            thresholds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Zero dimensions are rejected. A non-descending threshold table is
    /// accepted with a warning: it produces a differently bucketed but
    /// well-defined image.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "Image dimensions must be non-zero (got {}x{})",
                self.width,
                self.height
            );
        }

        if !self.thresholds.is_descending() {
            warn!(
                a = self.thresholds.a,
                b = self.thresholds.b,
                c = self.thresholds.c,
                d = self.thresholds.d,
                "Thresholds are not strictly descending; color tiers will bucket differently"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_defaults_to_half_width() {
        let config = PlotConfig::from_args(4000, None, "1000,500,100,20").unwrap();
        assert_eq!(config.height, 2000);
    }

    #[test]
    fn test_explicit_height_wins() {
        let config = PlotConfig::from_args(4000, Some(300), "1000,500,100,20").unwrap();
        assert_eq!(config.height, 300);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(PlotConfig::from_args(0, None, "1000,500,100,20").is_err());
    }

    #[test]
    fn test_bad_thresholds_rejected() {
        assert!(PlotConfig::from_args(100, None, "1000,500").is_err());
    }

    #[test]
    fn test_non_descending_thresholds_accepted() {
        // Warned about, not rejected.
        let config = PlotConfig::from_args(100, None, "20,100,500,1000").unwrap();
        assert!(!config.thresholds.is_descending());
    }
}
