//! Re-traversable record sources.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use plot_common::{PlotError, PlotResult};

/// A source of text records that can be traversed more than once.
///
/// Each call to [`RecordSource::open`] yields a fresh reader positioned at
/// the first record. A stable source produces the same sequence on every
/// open; the ingestion passes rely on this and abort with
/// `RecordCountMismatch` when it does not hold.
pub trait RecordSource {
    /// Open a fresh reader over the records.
    fn open(&self) -> PlotResult<Box<dyn BufRead + '_>>;

    /// Origin of the records, for diagnostics.
    fn origin(&self) -> &Path;
}

/// A record source backed by a file path, re-opened for each pass.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn open(&self) -> PlotResult<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(|source| PlotError::SourceUnreadable {
            path: self.path.clone(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn origin(&self) -> &Path {
        &self.path
    }
}

/// A record source holding its records in memory.
///
/// Used for tests and for inputs already buffered by the caller.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: String,
    origin: PathBuf,
}

impl MemorySource {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            origin: PathBuf::from("<memory>"),
        }
    }
}

impl RecordSource for MemorySource {
    fn open(&self) -> PlotResult<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.data.as_bytes())))
    }

    fn origin(&self) -> &Path {
        &self.origin
    }
}
