//! CSV output writer.

use std::io::Write;

use crate::Record;
use crate::error::Result;
use crate::format::OutputFormat;

use super::RecordWriter;

const HEADER: [&str; 3] = ["contact", "date", "body"];

/// Writes records as comma-separated rows.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `contact`, `date`, `body`
/// - Quoting: only fields containing `,`, `"`, CR or LF
/// - Line terminator: CRLF
///
/// The header row starts every [`write_records`](RecordWriter::write_records)
/// call, so a multi-directory run repeats it once per directory.
pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(out);
        Self { writer }
    }

    /// Flushes and returns the underlying destination.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> RecordWriter for CsvWriter<W> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn write_records(&mut self, records: &[Record]) -> Result<()> {
        self.writer.write_record(HEADER)?;

        for record in records {
            let date = record.date();
            self.writer.write_record([
                record.contact().as_bytes(),
                date.as_bytes(),
                record.body_bytes(),
            ])?;
        }

        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let mut out = self.into_inner()?;
        out.flush()?;
        Ok(())
    }
}

/// Renders records as CSV into a `String`.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut writer = CsvWriter::new(Vec::new());
    writer.write_records(records)?;
    Ok(String::from_utf8(writer.into_inner()?)?)
}
