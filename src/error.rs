//! Unified error types for vmgpack.
//!
//! This module provides a single [`VmgError`] enum that covers every fatal
//! condition of a conversion run. Missing fields inside a `.vmg` file are
//! not errors: the extractor degrades them to empty values and the
//! aggregator skips the record (see [`crate::record::Incomplete`]).
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for vmgpack operations.
///
/// # Example
///
/// ```rust
/// use vmgpack::error::Result;
/// use vmgpack::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, VmgError>;

/// The error type for all vmgpack operations.
///
/// Every variant aborts the run. There are no retries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VmgError {
    /// An I/O error without further context.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A source file or input directory could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The path being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output document could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// The output path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An input path does not exist or is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// The offending input path
        path: PathBuf,
    },

    /// The output filename has an extension that selects no writer.
    ///
    /// Only `.txt`, `.csv` and `.xml` are supported.
    #[error("Unsupported output extension '{extension}' for {}. Expected one of: txt, csv, xml", path.display())]
    UnsupportedExtension {
        /// The output path
        path: PathBuf,
        /// The extension found (empty when there is none)
        extension: String,
    },

    /// The requested output format was compiled out.
    #[error("Output format {format} requires the '{feature}' feature to be enabled")]
    FeatureDisabled {
        /// Display name of the format
        format: &'static str,
        /// Cargo feature that enables it
        feature: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rendered output was not valid UTF-8 when a `String` was requested.
    ///
    /// Only the `to_*` string converters can hit this; file writers copy
    /// bytes through untouched.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for VmgError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        VmgError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl VmgError {
    /// Creates a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VmgError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        VmgError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a not-a-directory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        VmgError::NotADirectory { path: path.into() }
    }

    /// Creates an unsupported extension error, reading the extension off `path`.
    pub fn unsupported_extension(path: &Path) -> Self {
        VmgError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Returns `true` if this is an I/O error of any kind.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            VmgError::Io(_) | VmgError::Read { .. } | VmgError::Write { .. }
        )
    }

    /// Returns `true` if this error was raised while validating the run
    /// configuration, before any file was processed.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            VmgError::NotADirectory { .. }
                | VmgError::UnsupportedExtension { .. }
                | VmgError::FeatureDisabled { .. }
        )
    }
}
