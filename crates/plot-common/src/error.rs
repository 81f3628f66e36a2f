//! Error types for the xy-density pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using PlotError.
pub type PlotResult<T> = Result<T, PlotError>;

/// Axis identifier used in extent diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Primary error type for plotting operations.
///
/// There is no partial-success mode: any of these aborts the run before an
/// output file is written.
#[derive(Debug, Error)]
pub enum PlotError {
    // === Input errors ===
    #[error("Failed to open input {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line}: {reason} (record: {content:?})")]
    MalformedRecord {
        line: u64,
        content: String,
        reason: String,
    },

    #[error("Input contained no records")]
    EmptyInput,

    // === Consistency errors ===
    #[error("Record count changed between passes: first pass saw {expected}, second pass saw {actual}")]
    RecordCountMismatch { expected: u64, actual: u64 },

    #[error("Degenerate extent on the {axis} axis: min equals max ({value})")]
    DegenerateExtent { axis: Axis, value: f64 },

    // === Buffer errors ===
    #[error("Cell index ({x}, {y}) out of range for {width}x{height} buffer")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    // === Output errors ===
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
