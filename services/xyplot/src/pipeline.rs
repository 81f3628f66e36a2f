//! The synchronous plotting pipeline.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ingestion::RecordSource;
use plot_common::PlotStatistics;
use renderer::{ImageSink, PixelBuffer};
use tracing::info;

use crate::config::PlotConfig;

/// Wall-clock duration of each pipeline phase.
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimings {
    pub scan: Duration,
    pub load: Duration,
    pub bin: Duration,
    pub colorize: Duration,
    pub encode: Duration,
}

/// Run the full pipeline: scan, load, bin, colorize, encode.
///
/// Phases run strictly in order; each one's output feeds the next, and any
/// failure aborts the run before an output file is written. Per-phase
/// durations are measured locally and returned alongside the statistics.
pub fn run(
    config: &PlotConfig,
    source: &dyn RecordSource,
    sink: &dyn ImageSink,
    output: &Path,
) -> Result<(PlotStatistics, PhaseTimings)> {
    let started = Instant::now();
    let summary = ingestion::scan(source).context("Range scan failed")?;
    let scan = started.elapsed();
    info!(
        records = summary.records,
        ms = scan.as_millis() as u64,
        "First pass complete"
    );

    let started = Instant::now();
    let coords = ingestion::load(source, summary.records).context("Coordinate load failed")?;
    let load = started.elapsed();
    info!(ms = load.as_millis() as u64, "Second pass complete");

    let mut buffer = PixelBuffer::new(config.width, config.height);

    let started = Instant::now();
    let max_occupancy =
        renderer::bin(&mut buffer, &coords, &summary.extent).context("Density binning failed")?;
    let bin = started.elapsed();
    info!(
        max_occupancy,
        ms = bin.as_millis() as u64,
        "Density binning complete"
    );

    let started = Instant::now();
    renderer::colorize(&mut buffer, &config.thresholds);
    let colorize = started.elapsed();
    info!(ms = colorize.as_millis() as u64, "Colorization complete");

    let started = Instant::now();
    sink.write(&buffer, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    let encode = started.elapsed();
    info!(
        path = %output.display(),
        ms = encode.as_millis() as u64,
        "Output written"
    );

    let stats = PlotStatistics {
        data_points: summary.records,
        extent: summary.extent,
        max_occupancy,
    };
    let timings = PhaseTimings {
        scan,
        load,
        bin,
        colorize,
        encode,
    };
    Ok((stats, timings))
}
