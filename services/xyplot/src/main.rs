//! Density heatmap plotter for xy point data.
//!
//! Reads a text file of xy records (one coordinate pair per line, separated
//! by comma, space, or `#`), bins the points into a pixel grid scaled to the
//! data's bounding extent, and writes a PNG where cell color encodes point
//! density.

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ingestion::FileSource;
use renderer::PngSink;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::PlotConfig;

#[derive(Parser, Debug)]
#[command(name = "xyplot")]
#[command(about = "Render xy point data as a density heatmap PNG")]
struct Args {
    /// Input file of xy records, one pair per line
    input: PathBuf,

    /// Output PNG path (default: <input>.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, env = "PLOT_WIDTH", default_value = "4000")]
    width: usize,

    /// Image height in pixels (default: half the width)
    #[arg(long, env = "PLOT_HEIGHT")]
    height: Option<usize>,

    /// Occupancy color thresholds, descending: "a,b,c,d"
    #[arg(long, env = "PLOT_THRESHOLDS", default_value = "1000,500,100,20")]
    thresholds: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print run statistics as JSON on stdout
    #[arg(long)]
    stats_json: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = PlotConfig::from_args(args.width, args.height, &args.thresholds)?;

    let output = args.output.unwrap_or_else(|| {
        // Match the historical convention: xy.csv -> xy.csv.png
        let mut name = args.input.clone().into_os_string();
        name.push(".png");
        PathBuf::from(name)
    });

    info!(
        input = %args.input.display(),
        output = %output.display(),
        width = config.width,
        height = config.height,
        "Starting density plot"
    );

    let source = FileSource::new(&args.input);
    let sink = PngSink::new();
    let (stats, timings) = pipeline::run(&config, &source, &sink, &output)?;

    info!(
        output = %output.display(),
        width = config.width,
        height = config.height,
        data_points = stats.data_points,
        min_x = stats.extent.min_x,
        max_x = stats.extent.max_x,
        min_y = stats.extent.min_y,
        max_y = stats.extent.max_y,
        max_occupancy = stats.max_occupancy,
        "Plot complete"
    );
    info!(
        scan_ms = timings.scan.as_millis() as u64,
        load_ms = timings.load.as_millis() as u64,
        bin_ms = timings.bin.as_millis() as u64,
        colorize_ms = timings.colorize.as_millis() as u64,
        encode_ms = timings.encode.as_millis() as u64,
        "Phase timings"
    );

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
