//! Output format writers.
//!
//! This module provides one writer per [`OutputFormat`]:
//! - [`TextWriter`] / [`to_text`] - `=`-delimited banner blocks
//! - [`CsvWriter`] / [`to_csv`] - `contact,date,body` rows - requires `csv-output` feature
//! - [`XmlWriter`] / [`to_xml`] - `<messages>` document with escaped bodies
//!
//! Every writer owns its destination and implements [`RecordWriter`]. A run
//! opens a single writer and calls [`RecordWriter::write_records`] once per
//! input directory; each call appends a complete rendering of that
//! directory's records.
//!
//! # Example
//!
//! ```rust,no_run
//! use vmgpack::format::OutputFormat;
//! use vmgpack::output::create_writer;
//! use vmgpack::Record;
//!
//! let records = vec![Record::new("+19995550123", None, "Hello!\n", "in/1.vmg").unwrap()];
//!
//! let mut writer = create_writer(OutputFormat::Xml, "messages.xml")?;
//! writer.write_records(&records)?;
//! writer.finish()?;
//! # Ok::<(), vmgpack::VmgError>(())
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod text_writer;
mod xml_writer;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::Record;
use crate::error::{Result, VmgError};
use crate::format::OutputFormat;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CsvWriter, to_csv};
pub use text_writer::{TextWriter, to_text};
pub use xml_writer::{XmlWriter, escape_xml, to_xml};

/// A destination that renders ordered records in one output format.
pub trait RecordWriter {
    /// The format this writer produces.
    fn format(&self) -> OutputFormat;

    /// Appends the rendering of `records`, in the order given.
    fn write_records(&mut self, records: &[Record]) -> Result<()>;

    /// Flushes and closes the destination.
    fn finish(self: Box<Self>) -> Result<()>;
}

/// Creates (or truncates) `path` and returns a buffered writer for `format`.
pub fn create_writer(
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<Box<dyn RecordWriter>> {
    let path = path.as_ref();

    #[cfg(not(feature = "csv-output"))]
    if format == OutputFormat::Csv {
        return Err(VmgError::FeatureDisabled {
            format: "CSV",
            feature: "csv-output",
        });
    }

    let file = File::create(path).map_err(|e| VmgError::write(path, e))?;
    let out = BufWriter::new(file);

    Ok(match format {
        OutputFormat::Text => Box::new(TextWriter::new(out)),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => Box::new(CsvWriter::new(out)),
        OutputFormat::Xml => Box::new(XmlWriter::new(out)),
        #[allow(unreachable_patterns)]
        _ => Box::new(TextWriter::new(out)),
    })
}

/// Renders `records` in `format` into a `String`.
///
/// Fails with [`VmgError::Utf8`] if a body is not valid UTF-8; use a
/// [`RecordWriter`] to keep such bytes as they are.
pub fn to_format_string(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => to_text(records),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => to_csv(records),
        OutputFormat::Xml => to_xml(records),
        #[allow(unreachable_patterns)]
        _ => Err(VmgError::FeatureDisabled {
            format: "CSV",
            feature: "csv-output",
        }),
    }
}
