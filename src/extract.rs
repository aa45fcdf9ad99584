//! Field extraction from a single `.vmg` file.
//!
//! A `.vmg` file is a vMessage envelope, usually stored as UTF-16LE with
//! CRLF line endings:
//!
//! ```text
//! BEGIN:VMSG
//! X-NOK-DT:20080526T124232Z
//! BEGIN:VCARD
//! TEL:+19995550123
//! END:VCARD
//! BEGIN:VBODY
//! Date:26.05.2008 12:42:32
//! Hello there!
//! END:VBODY
//! END:VMSG
//! ```
//!
//! The reader drops every NUL byte (which turns UTF-16LE text into its
//! ASCII/Latin subset), normalises line endings and then runs three
//! independent searches. Nothing here fails on malformed content: a field
//! that cannot be found comes back empty.
//!
//! Matching works on bytes, so files that are not valid UTF-8 are handled
//! without loss.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::bytes::Regex;

use crate::error::{Result, VmgError};
use crate::record::Extraction;

/// File extension of source archives, without the dot.
pub const SOURCE_EXTENSION: &str = "vmg";

/// `TEL:` followed by a word or an optionally `+`-prefixed number.
const TEL_PATTERN: &str = r"TEL:(\w+|\+?\d+)";

/// `X-NOK-DT:` followed by a compact ISO-8601 UTC timestamp.
const DATE_PATTERN: &str = r"X-NOK-DT:([\dTZ]+)";

/// Everything after the first `Date:` line up to the last `END:VBODY`.
///
/// The body group matches raw bytes so invalid UTF-8 stays in the span.
const BODY_PATTERN: &str = r"(?s)Date:[\d.: ]+\n((?-u:.)*)END:VBODY";

/// chrono layout of the `X-NOK-DT` value.
pub const NOKIA_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Reader for `.vmg` files.
///
/// # Example
///
/// ```rust
/// use vmgpack::extract::VmgReader;
///
/// let reader = VmgReader::new();
/// let raw = b"X-NOK-DT:20080526T124232Z\nTEL:+19995550123\nDate:26.05.2008 12:42:32\nHi!\nEND:VBODY";
/// let extraction = reader.extract(raw);
///
/// assert_eq!(extraction.contact, "+19995550123");
/// assert_eq!(extraction.body, b"Hi!\n");
/// ```
#[derive(Debug, Clone)]
pub struct VmgReader {
    tel: Regex,
    date: Regex,
    body: Regex,
}

impl VmgReader {
    /// Creates a reader with the patterns compiled.
    pub fn new() -> Self {
        Self {
            tel: Regex::new(TEL_PATTERN).expect("TEL pattern is valid"),
            date: Regex::new(DATE_PATTERN).expect("X-NOK-DT pattern is valid"),
            body: Regex::new(BODY_PATTERN).expect("body pattern is valid"),
        }
    }

    /// Reads and extracts the file at `path`.
    ///
    /// The only failure is an unreadable file.
    pub fn read(&self, path: &Path) -> Result<Extraction> {
        let raw = fs::read(path).map_err(|e| VmgError::read(path, e))?;
        Ok(self.extract(&raw))
    }

    /// Extracts contact, timestamp and body from raw file bytes.
    pub fn extract(&self, raw: &[u8]) -> Extraction {
        let text = clean(raw);

        Extraction {
            contact: self.contact(&text),
            timestamp: self.timestamp(&text),
            body: self.body(&text),
        }
    }

    fn contact(&self, text: &[u8]) -> String {
        self.tel
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
            .unwrap_or_default()
    }

    fn timestamp(&self, text: &[u8]) -> Option<NaiveDateTime> {
        let raw = self.date.captures(text)?.get(1)?;
        let raw = std::str::from_utf8(raw.as_bytes()).ok()?;
        parse_nokia_timestamp(raw)
    }

    fn body(&self, text: &[u8]) -> Vec<u8> {
        self.body
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_bytes().to_vec())
            .unwrap_or_default()
    }
}

impl Default for VmgReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an `X-NOK-DT` value such as `20080526T124232Z`.
///
/// Returns `None` for anything that is not exactly that layout.
pub fn parse_nokia_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, NOKIA_DATETIME_FORMAT).ok()
}

/// Drops NUL bytes, then turns `\r\n` and lone `\r` into `\n`.
fn clean(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().copied().filter(|&b| b != 0).peekable();

    while let Some(b) = bytes.next() {
        if b == b'\r' {
            if bytes.peek() == Some(&b'\n') {
                bytes.next();
            }
            out.push(b'\n');
        } else {
            out.push(b);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "BEGIN:VMSG\r\n\
VERSION:1.1\r\n\
X-IRMC-STATUS:READ\r\n\
X-IRMC-BOX:INBOX\r\n\
X-NOK-DT:20080526T124232Z\r\n\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:\r\n\
TEL:+19995550123\r\n\
END:VCARD\r\n\
BEGIN:VENV\r\n\
BEGIN:VBODY\r\n\
Date:26.05.2008 12:42:32\r\n\
Hello there!\r\n\
See you at 8\r\n\
END:VBODY\r\n\
END:VENV\r\n\
END:VMSG\r\n";

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    #[test]
    fn test_extract_all_fields() {
        let extraction = VmgReader::new().extract(SAMPLE.as_bytes());
        assert_eq!(extraction.contact, "+19995550123");
        assert_eq!(
            extraction.timestamp.unwrap().to_string(),
            "2008-05-26 12:42:32"
        );
        assert_eq!(extraction.body, b"Hello there!\nSee you at 8\n");
    }

    #[test]
    fn test_extract_utf16le() {
        let extraction = VmgReader::new().extract(&utf16le(SAMPLE));
        assert_eq!(extraction.contact, "+19995550123");
        assert!(extraction.timestamp.is_some());
        assert_eq!(extraction.body, b"Hello there!\nSee you at 8\n");
    }

    #[test]
    fn test_contact_name_token() {
        let extraction = VmgReader::new().extract(b"TEL:Mum\n");
        assert_eq!(extraction.contact, "Mum");
    }

    #[test]
    fn test_contact_first_match_wins() {
        let extraction = VmgReader::new().extract(b"TEL:111\nTEL:222\n");
        assert_eq!(extraction.contact, "111");
    }

    #[test]
    fn test_contact_missing() {
        let extraction = VmgReader::new().extract(b"TEL:\nN:Someone\n");
        assert_eq!(extraction.contact, "");
    }

    #[test]
    fn test_timestamp_missing() {
        let extraction = VmgReader::new().extract(b"TEL:1\n");
        assert!(extraction.timestamp.is_none());
    }

    #[test]
    fn test_timestamp_malformed() {
        let reader = VmgReader::new();
        assert!(reader.extract(b"X-NOK-DT:20081326T124232Z").timestamp.is_none());
        assert!(reader.extract(b"X-NOK-DT:2008T").timestamp.is_none());
        assert!(reader.extract(b"X-NOK-DT:20080526T124232ZZ").timestamp.is_none());
    }

    #[test]
    fn test_parse_nokia_timestamp() {
        let ts = parse_nokia_timestamp("20080526T124232Z").unwrap();
        assert_eq!(ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2008-05-26 12:42:32");
        assert!(parse_nokia_timestamp("2008-05-26").is_none());
    }

    #[test]
    fn test_body_missing_end_marker() {
        let extraction = VmgReader::new().extract(b"Date:26.05.2008 12:42:32\nHello\n");
        assert!(extraction.body.is_empty());
    }

    #[test]
    fn test_body_missing_date_line() {
        let extraction = VmgReader::new().extract(b"BEGIN:VBODY\nHello\nEND:VBODY\n");
        assert!(extraction.body.is_empty());
    }

    #[test]
    fn test_body_runs_to_last_end_marker() {
        let raw = b"TEL:1\nDate:1.1.2001 00:00\nfirst\nEND:VBODY\nsecond\nEND:VBODY\n";
        let extraction = VmgReader::new().extract(raw);
        assert_eq!(extraction.body, b"first\nEND:VBODY\nsecond\n");
    }

    #[test]
    fn test_body_preserves_invalid_utf8() {
        let mut raw = b"TEL:1\nDate:26.05.2008 12:42:32\nK".to_vec();
        raw.push(0xe4);
        raw.extend_from_slice(b"se\nEND:VBODY\n");

        let extraction = VmgReader::new().extract(&raw);
        assert_eq!(extraction.body, vec![b'K', 0xe4, b's', b'e', b'\n']);
    }

    #[test]
    fn test_body_keeps_utf8_text() {
        let raw = "Date:26.05.2008 12:42:32\nKäse ¤ 5\nEND:VBODY".as_bytes();
        let extraction = VmgReader::new().extract(raw);
        assert_eq!(extraction.body, "Käse ¤ 5\n".as_bytes());
    }

    #[test]
    fn test_clean_line_endings() {
        assert_eq!(clean(b"a\r\nb\rc\n"), b"a\nb\nc\n");
        assert_eq!(clean(b"a\0b\r\0\n\0"), b"ab\n");
    }

    #[test]
    fn test_empty_input() {
        let extraction = VmgReader::new().extract(b"");
        assert_eq!(extraction, Extraction::default());
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let err = VmgReader::new()
            .read(Path::new("/definitely/not/here.vmg"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
