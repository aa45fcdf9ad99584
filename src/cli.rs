//! Command-line interface definition using clap.
//!
//! The flag names (`--in_dir`, `--out_filename`) are kept in snake case for
//! compatibility with existing scripts around the tool.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConvertConfig, DEFAULT_OUTPUT};

/// Consolidate .vmg message archives into a single TXT, CSV or XML file.
///
/// The output format follows the extension of --out_filename.
#[derive(Parser, Debug, Clone)]
#[command(name = "vmgpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    vmgpack --in_dir phone/inbox
    vmgpack --in_dir phone/inbox phone/sent --out_filename backup.csv
    vmgpack --in_dir inbox --out_filename messages.xml")]
pub struct Args {
    /// Directories containing .vmg files (processed in the order given)
    #[arg(long = "in_dir", value_name = "DIR", num_args = 1.., required = true, value_parser = existing_dir)]
    pub in_dir: Vec<PathBuf>,

    /// Output file; extension selects the format (txt, csv or xml)
    #[arg(long = "out_filename", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub out_filename: PathBuf,
}

impl Args {
    /// Converts the parsed arguments into a run configuration.
    pub fn into_config(self) -> ConvertConfig {
        ConvertConfig::new(self.out_filename).with_input_dirs(self.in_dir)
    }
}

/// Accepts only paths that exist and are directories.
fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("not a directory: {value}"))
    }
}
