//! XML output writer.

use std::io::Write;

use crate::Record;
use crate::error::Result;
use crate::format::OutputFormat;

use super::RecordWriter;

/// Replacements applied to message bodies, checked in order at each byte.
///
/// `Â¤` is how `¤` shows up after a Latin-1/UTF-8 mix-up in some archives.
/// A correctly decoded `¤` is escaped too, so both spellings collapse to
/// the same entity.
const XML_ESCAPES: &[(&str, &str)] = &[
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("Â¤", "&curren;"),
    ("¤", "&curren;"),
    ("ä", "&auml;"),
];

/// Escapes a message body for the XML document.
///
/// Bytes that are not part of an escaped sequence pass through untouched,
/// including invalid UTF-8.
///
/// # Example
///
/// ```rust
/// use vmgpack::output::escape_xml;
///
/// assert_eq!(escape_xml(b"<script>"), b"&lt;script&gt;");
/// assert_eq!(escape_xml("Käse".as_bytes()), b"K&auml;se");
/// ```
pub fn escape_xml(body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len());
    let mut rest = body;

    'scan: while let Some((&first, tail)) = rest.split_first() {
        for (raw, entity) in XML_ESCAPES {
            if let Some(after) = rest.strip_prefix(raw.as_bytes()) {
                out.extend_from_slice(entity.as_bytes());
                rest = after;
                continue 'scan;
            }
        }
        out.push(first);
        rest = tail;
    }

    out
}

/// Writes records as a `<messages>` document.
///
/// # Format
/// ```text
/// <messages>
///   <message>
///     <file>
///       inbox/1.vmg
///     </file>
///     <contact>+19995550123</contact>
///     <date>2008-05-26 12:42:32</date>
///     <body>
///       Hello there!
///     </body>
///   </message></messages>
/// ```
/// No XML declaration and no reindentation. The body loses one trailing
/// newline and is escaped with [`escape_xml`]; file, contact and date are
/// written as they are.
pub struct XmlWriter<W: Write> {
    out: W,
}

impl<W: Write> XmlWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying destination.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        let body = record.body_bytes();
        let body = body.strip_suffix(b"\n").unwrap_or(body);

        write!(
            self.out,
            "\n  <message>\n    <file>\n      {}\n    </file>\n    <contact>{}</contact>\n    <date>{}</date>\n    <body>\n      ",
            record.file().display(),
            record.contact(),
            record.date()
        )?;
        self.out.write_all(&escape_xml(body))?;
        write!(self.out, "\n    </body>\n  </message>")?;
        Ok(())
    }
}

impl<W: Write> RecordWriter for XmlWriter<W> {
    fn format(&self) -> OutputFormat {
        OutputFormat::Xml
    }

    fn write_records(&mut self, records: &[Record]) -> Result<()> {
        self.out.write_all(b"<messages>")?;
        for record in records {
            self.write_record(record)?;
        }
        self.out.write_all(b"</messages>")?;
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Renders records as XML into a `String`.
pub fn to_xml(records: &[Record]) -> Result<String> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write_records(records)?;
    Ok(String::from_utf8(writer.into_inner())?)
}
