//! # vmgpack
//!
//! A Rust library for consolidating legacy mobile message archives (`.vmg`
//! files, one message per file) into a single document.
//!
//! ## Overview
//!
//! Each `.vmg` file yields a contact, a timestamp and a message body. A
//! directory of such files becomes an ordered list of [`Record`]s, which is
//! then rendered as:
//! - **Text**: `=`-delimited banner blocks (`.txt`)
//! - **CSV**: `contact,date,body` rows (`.csv`)
//! - **XML**: a `<messages>` document with escaped bodies (`.xml`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vmgpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let report = ConvertConfig::new("messages.csv")
//!         .with_input_dir("phone/inbox")
//!         .run()?;
//!
//!     println!("{} messages", report.total().kept());
//!     Ok(())
//! }
//! ```
//!
//! ## Step by Step
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vmgpack::prelude::*;
//!
//! let aggregation = aggregate(Path::new("phone/inbox"))?;
//!
//! let mut writer = create_writer(OutputFormat::Xml, "inbox.xml")?;
//! writer.write_records(&aggregation.records)?;
//! writer.finish()?;
//! # Ok::<(), vmgpack::VmgError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`extract`]: [`VmgReader`](extract::VmgReader), per-file field extraction
//! - [`record`]: [`Record`], [`Extraction`](record::Extraction), validation
//! - [`aggregate`]: directory scan, skip rule, chronological sort
//! - [`output`]: [`RecordWriter`](output::RecordWriter) and the text, CSV and XML writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat), extension mapping
//! - [`config`]: [`ConvertConfig`](config::ConvertConfig), a whole run
//! - [`error`]: [`VmgError`], [`Result`]
//! - [`prelude`]: Convenient re-exports

pub mod aggregate;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod output;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{Result, VmgError};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use vmgpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;

    pub use crate::error::{Result, VmgError};

    pub use crate::extract::VmgReader;
    pub use crate::record::{Extraction, Incomplete};

    pub use crate::aggregate::{AggregateStats, Aggregation, aggregate, sort_records};

    pub use crate::output::{RecordWriter, create_writer, to_format_string, to_text, to_xml};
    #[cfg(feature = "csv-output")]
    pub use crate::output::to_csv;

    pub use crate::format::OutputFormat;

    pub use crate::config::{ConvertConfig, RunReport};
}
