//! The message record produced from one `.vmg` file.
//!
//! Extraction happens in two steps:
//!
//! 1. [`VmgReader`](crate::extract::VmgReader) scans the raw bytes and
//!    yields an [`Extraction`], where every field may be missing.
//! 2. [`Extraction::into_record`] validates it into a [`Record`], or reports
//!    which fields were absent through [`Incomplete`].
//!
//! A [`Record`] therefore always has a non-empty contact and body. The
//! timestamp is never missing: an absent or unparsable `X-NOK-DT` value is
//! replaced by the Unix epoch and flagged with
//! [`Record::timestamp_fallback`].
//!
//! # Example
//!
//! ```
//! use vmgpack::record::Extraction;
//!
//! let extraction = Extraction {
//!     contact: "+19995550123".to_string(),
//!     timestamp: None,
//!     body: b"See you at 8\n".to_vec(),
//! };
//!
//! let record = extraction.into_record("inbox/1.vmg").unwrap();
//! assert_eq!(record.date(), "1970-01-01 00:00:00");
//! assert!(record.timestamp_fallback());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};

/// Layout used for every rendered date, and the sort key of the aggregator.
///
/// Fixed width, so lexicographic order equals chronological order.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder timestamp for files without a usable `X-NOK-DT` value.
///
/// This is a sentinel, not real data. Records carrying it report
/// `timestamp_fallback() == true`.
pub fn epoch_fallback() -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.naive_utc()
}

/// Raw fields pulled out of one file, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Value following `TEL:`, empty when absent.
    pub contact: String,
    /// Parsed `X-NOK-DT` value, `None` when absent or malformed.
    pub timestamp: Option<NaiveDateTime>,
    /// Bytes between the `Date:` line and `END:VBODY`, empty when absent.
    ///
    /// Kept as bytes: archives are not reliably UTF-8 and the body must
    /// reach the output unchanged.
    pub body: Vec<u8>,
}

impl Extraction {
    /// Validates the extraction into a [`Record`] for `file`.
    ///
    /// A field counts as missing only when it is empty. Content is never
    /// judged, so a contact of `"0"` or a whitespace-only body is kept.
    pub fn into_record(self, file: impl Into<PathBuf>) -> Result<Record, Incomplete> {
        Record::new(self.contact, self.timestamp, self.body, file)
    }
}

/// Fields that were missing from an [`Extraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Incomplete {
    /// No `TEL:` value was found.
    pub missing_contact: bool,
    /// No message body was found.
    pub missing_body: bool,
}

impl Incomplete {
    /// Names of the missing fields, in output column order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.missing_contact {
            fields.push("contact");
        }
        if self.missing_body {
            fields.push("body");
        }
        fields
    }
}

impl fmt::Display for Incomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing {}", self.missing_fields().join(", "))
    }
}

impl std::error::Error for Incomplete {}

/// One message, ready to be serialized.
///
/// Immutable once built. Construct through [`Record::new`] or
/// [`Extraction::into_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    contact: String,
    timestamp: NaiveDateTime,
    timestamp_fallback: bool,
    body: Vec<u8>,
    file: PathBuf,
}

impl Record {
    /// Builds a record, rejecting an empty contact or body.
    ///
    /// A `None` timestamp becomes [`epoch_fallback`].
    ///
    /// # Example
    ///
    /// ```
    /// use vmgpack::Record;
    ///
    /// assert!(Record::new("", None, "hi", "a.vmg").is_err());
    /// assert!(Record::new("0", None, "hi", "a.vmg").is_ok());
    /// ```
    pub fn new(
        contact: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
        body: impl Into<Vec<u8>>,
        file: impl Into<PathBuf>,
    ) -> Result<Self, Incomplete> {
        let contact = contact.into();
        let body = body.into();

        let incomplete = Incomplete {
            missing_contact: contact.is_empty(),
            missing_body: body.is_empty(),
        };
        if incomplete.missing_contact || incomplete.missing_body {
            return Err(incomplete);
        }

        Ok(Self {
            contact,
            timestamp: timestamp.unwrap_or_else(epoch_fallback),
            timestamp_fallback: timestamp.is_none(),
            body,
            file: file.into(),
        })
    }

    /// Returns the contact identifier (phone number or name).
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the message timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns `true` when the timestamp is the epoch placeholder.
    pub fn timestamp_fallback(&self) -> bool {
        self.timestamp_fallback
    }

    /// Returns the timestamp rendered with [`DATETIME_FORMAT`].
    pub fn date(&self) -> String {
        self.timestamp.format(DATETIME_FORMAT).to_string()
    }

    /// Returns the body exactly as found in the source file.
    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn body(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the source file path.
    pub fn file(&self) -> &Path {
        &self.file
    }
}
