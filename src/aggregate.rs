//! Directory-wide collection of records.
//!
//! [`aggregate`] runs the extractor over every `.vmg` file directly inside
//! one directory, drops incomplete records and returns the rest in
//! chronological order.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vmgpack::aggregate::aggregate;
//!
//! let aggregation = aggregate(Path::new("backup/inbox"))?;
//! println!(
//!     "{} records, {} skipped",
//!     aggregation.records.len(),
//!     aggregation.stats.skipped
//! );
//! # Ok::<(), vmgpack::VmgError>(())
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, VmgError};
use crate::extract::{SOURCE_EXTENSION, VmgReader};
use crate::record::Record;

/// Counters for one directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    /// Source files read.
    pub processed: usize,
    /// Files dropped because the contact or body was missing.
    pub skipped: usize,
    /// Kept records that carry the epoch placeholder date.
    pub fallback_dates: usize,
}

impl AggregateStats {
    /// Number of records that made it into the output.
    pub fn kept(&self) -> usize {
        self.processed - self.skipped
    }

    /// Adds another run's counters to this one.
    pub fn absorb(&mut self, other: AggregateStats) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.fallback_dates += other.fallback_dates;
    }
}

/// Ordered records of one directory plus counters.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Complete records, sorted by date.
    pub records: Vec<Record>,
    /// What happened along the way.
    pub stats: AggregateStats,
}

/// Collects and sorts the records of every `.vmg` file in `dir`.
pub fn aggregate(dir: &Path) -> Result<Aggregation> {
    aggregate_with(&VmgReader::new(), dir)
}

/// Same as [`aggregate`], reusing an existing reader.
pub fn aggregate_with(reader: &VmgReader, dir: &Path) -> Result<Aggregation> {
    let mut aggregation = Aggregation::default();

    for path in source_files(dir)? {
        info!("Processing file: {}", path.display());
        aggregation.stats.processed += 1;

        let extraction = reader.read(&path)?;
        match extraction.into_record(&path) {
            Ok(record) => {
                if record.timestamp_fallback() {
                    debug!(file = %path.display(), "no usable X-NOK-DT, using epoch placeholder");
                    aggregation.stats.fallback_dates += 1;
                }
                aggregation.records.push(record);
            }
            Err(incomplete) => {
                warn!("missing information in {}: {}", path.display(), incomplete);
                aggregation.stats.skipped += 1;
            }
        }
    }

    sort_records(&mut aggregation.records);
    Ok(aggregation)
}

/// Sorts by the formatted date, keeping input order among equal dates.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(Record::date);
}

/// Lists the `.vmg` files directly inside `dir`, in enumeration order.
///
/// Hidden files are ignored, as a shell glob would.
pub fn source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(VmgError::not_a_directory(dir));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
            VmgError::read(path, io::Error::from(e))
        })?;

        if entry.file_type().is_file() && is_source_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Returns `true` for a visible file named `*.vmg` (case-sensitive).
pub fn is_source_file(path: &Path) -> bool {
    // Raw bytes, so names that are not valid UTF-8 still count
    let visible = path
        .file_name()
        .is_some_and(|name| name.as_encoded_bytes().first() != Some(&b'.'));

    visible && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}
