//! Plain text output writer.

use std::io::Write;

use crate::Record;
use crate::error::Result;
use crate::format::OutputFormat;

use super::RecordWriter;

const BANNER: &str = "=============================";

/// Writes each record as a banner block.
///
/// # Format
/// ```text
/// =============================
/// File        : inbox/1.vmg
/// Contact     : +19995550123
/// Date        : 2008-05-26 12:42:32
/// Message     :
/// Hello there!
///
/// =============================
/// ```
/// The body is written verbatim, bytes included.
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying destination.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "File        : {}", record.file().display())?;
        writeln!(self.out, "Contact     : {}", record.contact())?;
        writeln!(self.out, "Date        : {}", record.date())?;
        writeln!(self.out, "Message     :")?;
        self.out.write_all(record.body_bytes())?;
        writeln!(self.out)?;
        writeln!(self.out, "{BANNER}")?;
        Ok(())
    }
}

impl<W: Write> RecordWriter for TextWriter<W> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn write_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Renders records as text into a `String`.
pub fn to_text(records: &[Record]) -> Result<String> {
    let mut writer = TextWriter::new(Vec::new());
    writer.write_records(records)?;
    Ok(String::from_utf8(writer.into_inner())?)
}
