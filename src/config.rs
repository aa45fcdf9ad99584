//! Run configuration.
//!
//! [`ConvertConfig`] describes one conversion run: the input directories,
//! in processing order, and the output file. It is the library-side
//! counterpart of the CLI arguments and carries no CLI framework types.
//!
//! # Example
//!
//! ```rust,no_run
//! use vmgpack::config::ConvertConfig;
//!
//! let report = ConvertConfig::new("backup.csv")
//!     .with_input_dir("phone/inbox")
//!     .with_input_dir("phone/sent")
//!     .run()?;
//!
//! println!("{} messages written", report.total().kept());
//! # Ok::<(), vmgpack::VmgError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::{AggregateStats, aggregate_with};
use crate::error::{Result, VmgError};
use crate::extract::VmgReader;
use crate::format::OutputFormat;
use crate::output::create_writer;

/// Default output filename when none is given.
pub const DEFAULT_OUTPUT: &str = "vmg.txt";

/// Configuration of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Directories to scan, processed in this order.
    pub input_dirs: Vec<PathBuf>,

    /// Output file; its extension selects the format (default: `vmg.txt`).
    pub output: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dirs: Vec::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConvertConfig {
    /// Creates a configuration writing to `output`, with no inputs yet.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            input_dirs: Vec::new(),
            output: output.into(),
        }
    }

    /// Appends an input directory.
    #[must_use]
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dirs.push(dir.into());
        self
    }

    /// Appends several input directories, keeping their order.
    #[must_use]
    pub fn with_input_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.input_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Checks the configuration and resolves the output format.
    ///
    /// The extension is checked first, then every input path must be an
    /// existing directory. Nothing is opened or written.
    pub fn validate(&self) -> Result<OutputFormat> {
        let format = OutputFormat::from_path(&self.output)?;

        for dir in &self.input_dirs {
            if !dir.is_dir() {
                return Err(VmgError::not_a_directory(dir));
            }
        }

        Ok(format)
    }

    /// Validates, then converts every input directory into the output file.
    ///
    /// Directories are aggregated and written one after another; records
    /// from different directories are never merged or re-sorted together.
    pub fn run(&self) -> Result<RunReport> {
        let format = self.validate()?;
        let reader = VmgReader::new();
        let mut writer = create_writer(format, &self.output)?;
        let mut report = RunReport {
            format,
            directories: Vec::with_capacity(self.input_dirs.len()),
        };

        for dir in &self.input_dirs {
            info!("Processing directory: {}", dir.display());
            let aggregation = aggregate_with(&reader, dir)?;
            writer.write_records(&aggregation.records)?;
            report.directories.push((dir.clone(), aggregation.stats));
        }

        writer.finish()?;
        Ok(report)
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Outcome of [`ConvertConfig::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Format that was written.
    pub format: OutputFormat,
    /// Per-directory counters, in processing order.
    pub directories: Vec<(PathBuf, AggregateStats)>,
}

impl RunReport {
    /// Counters summed over all directories.
    pub fn total(&self) -> AggregateStats {
        let mut total = AggregateStats::default();
        for (_, stats) in &self.directories {
            total.absorb(*stats);
        }
        total
    }
}
