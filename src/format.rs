//! Output format selection.
//!
//! The output kind is never chosen directly: it follows from the extension
//! of the output filename, and the mapping is fixed.
//!
//! | Extension | Format | Writer |
//! |-----------|--------|--------|
//! | `.txt` | [`Text`](OutputFormat::Text) | banner blocks |
//! | `.csv` | [`Csv`](OutputFormat::Csv) | `contact,date,body` rows |
//! | `.xml` | [`Xml`](OutputFormat::Xml) | `<messages>` document |
//!
//! # Example
//!
//! ```rust
//! use vmgpack::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("backup.xml")?;
//! assert_eq!(format, OutputFormat::Xml);
//! assert!(OutputFormat::from_path("backup.json").is_err());
//! # Ok::<(), vmgpack::VmgError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VmgError;

/// Output document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one `=`-delimited banner block per message (default).
    #[default]
    Text,

    /// Comma-separated values with a `contact,date,body` header.
    Csv,

    /// A `<messages>` element with one `<message>` per record.
    Xml,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
        }
    }

    /// Returns all supported extensions.
    pub fn all_extensions() -> &'static [&'static str] {
        &["txt", "csv", "xml"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Csv, OutputFormat::Xml]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Xml => "application/xml",
        }
    }

    /// Picks the format from the extension of `path`.
    ///
    /// Matching is exact: `out.TXT` and `out` are both rejected.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VmgError> {
        let path = path.as_ref();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("txt") => Ok(OutputFormat::Text),
            Some("csv") => Ok(OutputFormat::Csv),
            Some("xml") => Ok(OutputFormat::Xml),
            _ => Err(VmgError::unsupported_extension(path)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TXT"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Xml => write!(f, "XML"),
        }
    }
}
